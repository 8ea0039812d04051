#![cfg(test)]
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use dome_common::config::ScanConfig;
use dome_common::wordlist;
use dome_core::report::{self, FindingRecord, OutputFormat};
use dome_core::{EnumerationService, ScanContext, ScanReport};
use tempfile::TempDir;

use crate::util::{TableResolver, domain};

async fn scan_with_wordlist(contents: &str) -> ScanReport {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("words.txt");
    fs::write(&path, contents).unwrap();
    let words: Vec<String> = wordlist::load_words(&path).unwrap();

    let resolver: TableResolver = TableResolver::new(&[
        ("www.example.com", &["93.184.216.34"]),
        ("vpn.example.com", &["2001:db8::10", "10.0.0.10"]),
    ]);

    EnumerationService::new(Arc::new(resolver))
        .enumerate(&domain("example.com"), &words, &ScanConfig::default(), &ScanContext::new())
        .await
}

#[tokio::test]
async fn saved_json_matches_scan_findings() {
    let scan: ScanReport = scan_with_wordlist("# corp names\nwww\n\nVPN\nstaging\n").await;
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("out.json");

    report::save(&path, OutputFormat::Json, &scan.findings).unwrap();

    let records: Vec<FindingRecord> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].host, "vpn.example.com");
    assert_eq!(records[0].addresses, vec!["10.0.0.10", "2001:db8::10"]);
    assert_eq!(records[0].http_open, None);
    assert_eq!(records[1].host, "www.example.com");
    assert!(records.iter().all(|r| !r.is_wildcard));
}

#[tokio::test]
async fn saved_csv_has_header_and_one_row_per_host() {
    let scan: ScanReport = scan_with_wordlist("www\nvpn\n").await;
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("out.csv");

    report::save(&path, OutputFormat::Csv, &scan.findings).unwrap();

    let text: String = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "host,addresses,http_open,http_status,https_open,https_status",
            "vpn.example.com,10.0.0.10;2001:db8::10,,,,",
            "www.example.com,93.184.216.34,,,,",
        ]
    );
}

#[tokio::test]
async fn saving_into_missing_directory_fails() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("missing").join("out.json");

    assert!(report::save(&path, OutputFormat::Json, &[]).is_err());
}
