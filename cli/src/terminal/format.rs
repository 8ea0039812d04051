use crate::terminal::colors;
use colored::*;
use dome_common::finding::{Finding, Liveness};
use std::collections::BTreeSet;
use std::net::IpAddr;

pub fn ip_to_key_value_pair(ips: &BTreeSet<IpAddr>) -> Vec<(String, ColoredString)> {
    ips.iter()
        .map(|ip| match ip {
            IpAddr::V4(ipv4_addr) => {
                let value: ColoredString = ipv4_addr.to_string().color(colors::IPV4_ADDR);
                (String::from("IPv4"), value)
            }
            IpAddr::V6(ipv6_addr) => {
                let value: ColoredString = ipv6_addr.to_string().color(colors::IPV6_ADDR);
                (String::from("IPv6"), value)
            }
        })
        .collect()
}

pub fn status_color(status: u16) -> Color {
    match status {
        200..=299 => colors::STATUS_OK,
        300..=399 => colors::STATUS_REDIRECT,
        400..=499 => colors::STATUS_CLIENT_ERROR,
        _ => colors::STATUS_SERVER_ERROR,
    }
}

pub fn liveness_to_value(liveness: Option<Liveness>) -> ColoredString {
    match liveness {
        Some(Liveness { status }) => status.to_string().color(status_color(status)).bold(),
        None => "no answer".color(colors::NO_ANSWER),
    }
}

/// Branches printed under a host: its addresses, then probe results when probing ran.
pub fn finding_to_key_value_pair(finding: &Finding, probed: bool) -> Vec<(String, ColoredString)> {
    let mut pairs: Vec<(String, ColoredString)> = ip_to_key_value_pair(&finding.addresses);

    if probed {
        pairs.push((String::from("HTTPS"), liveness_to_value(finding.https)));
        pairs.push((String::from("HTTP"), liveness_to_value(finding.http)));
    }

    pairs
}

/// Comma-separated addresses, as printed next to hosts in CSV mode.
pub fn addresses_inline(ips: &BTreeSet<IpAddr>) -> String {
    ips.iter()
        .map(IpAddr::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
