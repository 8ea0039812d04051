#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use dome_common::config::ScanConfig;
use dome_core::{EnumerationService, ScanContext, ScanReport};

use crate::util::{TableResolver, domain, ips, words};

fn config() -> ScanConfig {
    ScanConfig {
        threads: 4,
        timeout: Duration::from_millis(200),
        ..ScanConfig::default()
    }
}

/// Every name under example.com answers 9.9.9.9; `evil` and `api` answer more.
fn catch_all_resolver() -> TableResolver {
    TableResolver::new(&[
        ("evil.example.com", &["9.9.9.9", "5.5.5.5"]),
        ("api.example.com", &["10.1.1.1"]),
    ])
    .catch_all(&["9.9.9.9"])
}

#[tokio::test]
async fn wildcard_answers_are_suppressed() {
    let service: EnumerationService = EnumerationService::new(Arc::new(catch_all_resolver()));

    let report: ScanReport = service
        .enumerate(
            &domain("example.com"),
            &words(&["www", "evil", "api"]),
            &config(),
            &ScanContext::new(),
        )
        .await;

    assert_eq!(report.wildcard.addresses(), &ips(&["9.9.9.9"]));

    let hosts: Vec<&str> = report.findings.iter().map(|f| f.host.as_str()).collect();
    assert_eq!(hosts, vec!["api.example.com", "evil.example.com"]);

    let suppressed: Vec<&str> = report.suppressed.iter().map(|f| f.host.as_str()).collect();
    assert_eq!(suppressed, vec!["www.example.com"]);
    assert!(report.suppressed.iter().all(|f| f.is_wildcard));
}

#[tokio::test]
async fn partial_overlap_with_wildcard_is_kept_in_full() {
    let service: EnumerationService = EnumerationService::new(Arc::new(catch_all_resolver()));

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &words(&["evil"]), &config(), &ScanContext::new())
        .await;

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].addresses, ips(&["5.5.5.5", "9.9.9.9"]));
    assert!(!report.findings[0].is_wildcard);
}

#[tokio::test]
async fn no_wildcard_when_random_names_do_not_resolve() {
    let resolver: TableResolver = TableResolver::new(&[("www.example.com", &["9.9.9.9"])]);

    let report: ScanReport = EnumerationService::new(Arc::new(resolver))
        .enumerate(&domain("example.com"), &words(&["www"]), &config(), &ScanContext::new())
        .await;

    assert!(report.wildcard.is_empty());
    assert_eq!(report.findings.len(), 1);
    assert!(report.suppressed.is_empty());
}
