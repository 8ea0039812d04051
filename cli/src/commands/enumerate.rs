use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use dome_common::config::{Config, ScanConfig};
use dome_common::finding::Finding;
use dome_common::{debug, error, success, warn, wordlist};
use dome_core::report::{self, OutputFormat};
use dome_core::{EnumerationService, ScanContext, ScanReport};
use tracing::{Instrument, Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::CommandLine;
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn enumerate(args: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let words: Vec<String> = load_wordlist(args.wordlist.as_deref());
    let scan_cfg: ScanConfig = args.scan_config();

    enumeration_starts(args, cfg, &scan_cfg, words.len());

    let span: Span = info_span!("enumeration", indicatif.pb_show = true);
    span.pb_set_style(&spinner::progress_style());
    span.pb_set_message("resolving");

    let progress_span: Span = span.clone();
    let service: EnumerationService =
        EnumerationService::from_config(&scan_cfg).on_progress(move |completed, total| {
            if completed == 1 {
                progress_span.pb_set_length(total as u64);
            }
            progress_span.pb_inc(1);
        });
    let ctx: ScanContext = ScanContext::from_config(&scan_cfg);

    let start: Instant = Instant::now();
    let scan: ScanReport = service
        .enumerate(&args.domain, &words, &scan_cfg, &ctx)
        .instrument(span)
        .await;
    let elapsed: Duration = start.elapsed();
    drop(service);

    enumeration_ends(args, cfg, &scan_cfg, &scan, elapsed)
}

/// Reads the user wordlist, falling back to the built-in one when it cannot be read.
fn load_wordlist(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return wordlist::default_words();
    };

    match wordlist::load_words(path) {
        Ok(words) => {
            if words.is_empty() {
                warn!("Wordlist {} contains no labels", path.display());
            }
            words
        }
        Err(e) => {
            warn!("{e}, using the built-in wordlist");
            wordlist::default_words()
        }
    }
}

fn enumeration_starts(args: &CommandLine, cfg: &Config, scan_cfg: &ScanConfig, word_count: usize) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("enumeration setup", cfg.quiet);
    print::aligned_line("Target", args.domain.as_str().color(colors::ACCENT));
    print::aligned_line("Wordlist", wordlist_label(args.wordlist.as_deref(), word_count));
    print::aligned_line("Workers", scan_cfg.pool_size().to_string());
    print::aligned_line("Timeout", format!("{:.1}s", scan_cfg.timeout.as_secs_f64()));
    print::aligned_line(
        "Passive",
        scan_cfg
            .passive
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| String::from("off")),
    );
    let probe: String = if scan_cfg.probe {
        let ports: Vec<String> = scan_cfg.ports.iter().map(u16::to_string).collect();
        format!("ports {}", ports.join(","))
    } else {
        String::from("off")
    };
    print::aligned_line("Probe", probe);
    if let Some(deadline) = scan_cfg.deadline {
        print::aligned_line("Deadline", format!("{:.1}s", deadline.as_secs_f64()));
    }
}

fn wordlist_label(path: Option<&Path>, word_count: usize) -> String {
    match path {
        Some(path) => format!("{} ({word_count} labels)", path.display()),
        None => format!("built-in ({word_count} labels)"),
    }
}

fn enumeration_ends(
    args: &CommandLine,
    cfg: &Config,
    scan_cfg: &ScanConfig,
    scan: &ScanReport,
    elapsed: Duration,
) -> anyhow::Result<()> {
    match args.output_format() {
        Some(OutputFormat::Json) => {
            println!("{}", report::to_json(&scan.findings)?);
            if let Some(path) = &args.output {
                save(path, OutputFormat::Json, &scan.findings);
            }
        }
        Some(OutputFormat::Csv) => {
            match &args.output {
                Some(path) => save(path, OutputFormat::Csv, &scan.findings),
                None => warn!("--csv needs --output to write a file"),
            }
            emit_host_lines(&scan.findings, true);
        }
        None => {
            print_findings(cfg, scan, scan_cfg.probe, elapsed);
            if let Some(path) = &args.output {
                save(path, OutputFormat::Json, &scan.findings);
            }
        }
    }

    Ok(())
}

fn save(path: &Path, format: OutputFormat, findings: &[Finding]) {
    match report::save(path, format, findings) {
        Ok(()) => success!("Saved {} result(s) to {}", findings.len(), path.display()),
        Err(e) => error!("Could not save results: {e:#}"),
    }
}

/// Result lines go to stdout so they can be piped; logs stay on stderr.
fn emit_host_lines(findings: &[Finding], with_addresses: bool) {
    let stdout = io::stdout();
    if let Err(e) = write_host_lines(stdout.lock(), findings, with_addresses) {
        debug!("stdout closed while writing results: {e}");
    }
}

fn write_host_lines<W: Write>(
    mut out: W,
    findings: &[Finding],
    with_addresses: bool,
) -> io::Result<()> {
    for finding in findings {
        if with_addresses {
            writeln!(out, "{}, {}", finding.host, format::addresses_inline(&finding.addresses))?;
        } else {
            writeln!(out, "{}", finding.host)?;
        }
    }
    out.flush()
}

fn print_findings(cfg: &Config, scan: &ScanReport, probed: bool, elapsed: Duration) {
    if cfg.quiet >= 2 {
        emit_host_lines(&scan.findings, false);
        return;
    }

    print::header("enumeration results", cfg.quiet);

    if scan.findings.is_empty() {
        print::no_results();
    }

    for (idx, finding) in scan.findings.iter().enumerate() {
        print::tree_head(idx + 1, &finding.host);
        print::as_tree_one_level(&format::finding_to_key_value_pair(finding, probed));
        if idx + 1 != scan.findings.len() {
            mprint!();
        }
    }

    if cfg.quiet > 0 {
        return;
    }

    print::header("summary", cfg.quiet);
    if !scan.wildcard.is_empty() {
        let addrs: Vec<String> = scan.wildcard.addresses().iter().map(|a| a.to_string()).collect();
        print::aligned_line("Wildcard", addrs.join(", ").color(colors::STATUS_CLIENT_ERROR));
        print::aligned_line("Filtered", scan.suppressed.len().to_string());
    }
    print::aligned_line("Candidates", scan.candidates.to_string());
    if scan.passive_names > 0 {
        print::aligned_line("Passive", format!("{} name(s)", scan.passive_names));
    }
    if scan.truncated {
        print::aligned_line(
            "Deadline",
            format!("stopped after {}/{}", scan.dispatched, scan.candidates)
                .color(colors::STATUS_CLIENT_ERROR),
        );
    }

    let output: String = format!(
        "Enumeration Complete: {} live subdomain(s) identified in {:.2}s",
        scan.findings.len().to_string().color(colors::ACCENT).bold(),
        elapsed.as_secs_f64()
    );
    mprint!();
    print::centerln(&output);
    print::end_of_program();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
