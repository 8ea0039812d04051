//! # Wildcard DNS Detection
//!
//! Some zones answer every name with a catch-all record. To tell those
//! answers apart from real hosts, a few random labels that almost certainly
//! do not exist are resolved first; every address they return forms the
//! [`WildcardSet`]. A candidate whose addresses all fall inside that set is
//! noise.
//!
//! This is a sampling heuristic. A catch-all backed by a large rotating pool
//! may not be fully captured, and a zone without a wildcard yields an empty
//! set, which never filters anything.

use std::collections::BTreeSet;
use std::net::IpAddr;
use std::time::Duration;

use futures::future;
use rand::Rng;

use dome_common::dns::Resolver;
use dome_common::domain::Domain;

const LABEL_LEN: usize = 16;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Addresses returned for names that should not exist. Immutable once detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildcardSet(BTreeSet<IpAddr>);

impl WildcardSet {
    pub fn new(addresses: BTreeSet<IpAddr>) -> Self {
        Self(addresses)
    }

    pub fn addresses(&self) -> &BTreeSet<IpAddr> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A non-empty answer made up entirely of wildcard addresses is noise.
    ///
    /// Partial overlap is not enough: such a host has at least one address the
    /// catch-all never returned.
    pub fn is_noise(&self, addresses: &BTreeSet<IpAddr>) -> bool {
        !self.0.is_empty() && !addresses.is_empty() && addresses.is_subset(&self.0)
    }
}

pub fn random_label() -> String {
    let mut rng = rand::rng();
    (0..LABEL_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Resolves `tries` random names under `domain` and collects every address returned.
pub async fn detect_wildcard(
    resolver: &dyn Resolver,
    domain: &Domain,
    tries: usize,
    timeout: Duration,
) -> WildcardSet {
    let probes: Vec<String> = (0..tries).map(|_| domain.child(&random_label())).collect();

    let answers: Vec<BTreeSet<IpAddr>> =
        future::join_all(probes.iter().map(|host| resolver.resolve(host, timeout))).await;

    WildcardSet::new(answers.into_iter().flatten().collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
