#![cfg(test)]
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use dome_common::config::ScanConfig;
use dome_common::finding::{Finding, Liveness};
use dome_common::passive::PassiveKind;
use dome_common::probe::{ProbeOutcome, Prober};
use dome_core::{EnumerationService, ScanContext, ScanReport};

use crate::util::{StaticSource, TableResolver, domain, ips, words};

fn quick_config() -> ScanConfig {
    ScanConfig {
        threads: 8,
        timeout: Duration::from_millis(200),
        ..ScanConfig::default()
    }
}

fn passive_config() -> ScanConfig {
    ScanConfig {
        passive: Some(PassiveKind::CrtSh),
        ..quick_config()
    }
}

fn example_resolver() -> TableResolver {
    TableResolver::new(&[
        ("www.example.com", &["93.184.216.34"]),
        ("api.example.com", &["93.184.216.35", "2606:2800:220:1::35"]),
    ])
}

struct FixedProber(ProbeOutcome);

#[async_trait::async_trait]
impl Prober for FixedProber {
    async fn probe(&self, _host: &str, _ports: &[u16], _timeout: Duration) -> ProbeOutcome {
        self.0
    }
}

/// www and api resolve, the third label does not, there is no wildcard.
#[tokio::test]
async fn enumeration_finds_resolving_labels_only() {
    let service: EnumerationService = EnumerationService::new(Arc::new(example_resolver()));

    let report: ScanReport = service
        .enumerate(
            &domain("example.com"),
            &words(&["www", "api", "doesnotexist123"]),
            &quick_config(),
            &ScanContext::new(),
        )
        .await;

    let hosts: Vec<&str> = report.findings.iter().map(|f| f.host.as_str()).collect();
    assert_eq!(hosts, vec!["api.example.com", "www.example.com"]);
    assert_eq!(report.findings[0].addresses, ips(&["93.184.216.35", "2606:2800:220:1::35"]));
    assert_eq!(report.findings[1].addresses, ips(&["93.184.216.34"]));

    assert!(report.findings.iter().all(|f| !f.is_wildcard));
    assert!(report.findings.iter().all(|f| f.http.is_none() && f.https.is_none()));
    assert!(report.wildcard.is_empty());
    assert!(report.suppressed.is_empty());
    assert_eq!(report.candidates, 3);
    assert!(!report.truncated);
}

#[tokio::test]
async fn enumeration_with_empty_wordlist_finds_nothing() {
    let service: EnumerationService = EnumerationService::new(Arc::new(example_resolver()));

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &[], &quick_config(), &ScanContext::new())
        .await;

    assert!(report.findings.is_empty());
    assert_eq!(report.candidates, 0);
    assert!(!report.truncated);
}

#[tokio::test]
async fn enumeration_merges_passive_names_without_duplicates() {
    let resolver: Arc<TableResolver> = Arc::new(TableResolver::new(&[
        ("www.example.com", &["93.184.216.34"]),
        ("mail.example.com", &["93.184.216.40"]),
        ("dev.app.example.com", &["10.0.0.7"]),
    ]));
    let source = StaticSource(vec![
        String::from("www.example.com"),
        String::from("dev.app.example.com"),
        String::from("mail.example.com"),
        String::from("cdn.other.org"),
    ]);
    let service: EnumerationService =
        EnumerationService::new(resolver.clone()).with_passive(Box::new(source));

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &words(&["www"]), &passive_config(), &ScanContext::new())
        .await;

    let hosts: Vec<&str> = report.findings.iter().map(|f| f.host.as_str()).collect();
    assert_eq!(hosts, vec!["dev.app.example.com", "mail.example.com", "www.example.com"]);
    assert_eq!(report.candidates, 3, "www must be tried once, cdn.other.org never");
}

#[tokio::test]
async fn failed_passive_source_matches_disabled_passive() {
    let scan = |passive: bool| async move {
        let mut service: EnumerationService = EnumerationService::new(Arc::new(example_resolver()));
        let mut cfg: ScanConfig = quick_config();
        if passive {
            service = service.with_passive(Box::new(StaticSource(Vec::new())));
            cfg = passive_config();
        }
        service
            .enumerate(
                &domain("example.com"),
                &words(&["www", "api", "nope"]),
                &cfg,
                &ScanContext::new(),
            )
            .await
            .findings
    };

    let with_failed_source: Vec<Finding> = scan(true).await;
    let without_source: Vec<Finding> = scan(false).await;
    assert_eq!(with_failed_source, without_source);
}

#[tokio::test]
async fn probing_attaches_liveness_to_every_finding() {
    let prober = FixedProber(ProbeOutcome {
        http: Some(Liveness::new(301)),
        https: Some(Liveness::new(200)),
    });
    let service: EnumerationService =
        EnumerationService::new(Arc::new(example_resolver())).with_prober(Arc::new(prober));
    let cfg: ScanConfig = ScanConfig {
        probe: true,
        ..quick_config()
    };

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &words(&["www", "api", "x"]), &cfg, &ScanContext::new())
        .await;

    assert_eq!(report.findings.len(), 2);
    for finding in &report.findings {
        assert_eq!(finding.http_open(), Some(true));
        assert_eq!(finding.http_status(), Some(301));
        assert_eq!(finding.https_status(), Some(200));
    }
}

#[tokio::test]
async fn unanswered_probe_keeps_host_with_absent_liveness() {
    let service: EnumerationService = EnumerationService::new(Arc::new(example_resolver()))
        .with_prober(Arc::new(FixedProber(ProbeOutcome::default())));
    let cfg: ScanConfig = ScanConfig {
        probe: true,
        ..quick_config()
    };

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &words(&["www"]), &cfg, &ScanContext::new())
        .await;

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].http_open(), None);
    assert_eq!(report.findings[0].https_status(), None);
}

#[tokio::test]
async fn disabled_probe_leaves_liveness_absent_even_with_prober_attached() {
    let prober = FixedProber(ProbeOutcome {
        http: Some(Liveness::new(200)),
        https: Some(Liveness::new(200)),
    });
    let service: EnumerationService =
        EnumerationService::new(Arc::new(example_resolver())).with_prober(Arc::new(prober));

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &words(&["www", "api"]), &quick_config(), &ScanContext::new())
        .await;

    assert_eq!(report.findings.len(), 2);
    assert!(report.findings.iter().all(|f| f.http.is_none() && f.https.is_none()));
}

#[tokio::test]
async fn disabled_passive_ignores_attached_source() {
    let resolver: TableResolver = TableResolver::new(&[("dev.example.com", &["10.0.0.7"])]);
    let service: EnumerationService = EnumerationService::new(Arc::new(resolver))
        .with_passive(Box::new(StaticSource(vec![String::from("dev.example.com")])));

    let report: ScanReport = service
        .enumerate(&domain("example.com"), &[], &quick_config(), &ScanContext::new())
        .await;

    assert!(report.findings.is_empty());
    assert_eq!(report.candidates, 0);
    assert_eq!(report.passive_names, 0);
}

#[tokio::test]
async fn deadline_stops_dispatch_and_marks_report_truncated() {
    let resolver: Arc<TableResolver> =
        Arc::new(TableResolver::new(&[]).with_delay(Duration::from_millis(50)));
    let labels: Vec<String> = (0..40).map(|i| format!("host{i}")).collect();
    let cfg: ScanConfig = ScanConfig {
        threads: 4,
        wildcard_tries: 0,
        ..quick_config()
    };

    let report: ScanReport = EnumerationService::new(resolver.clone())
        .enumerate(
            &domain("example.com"),
            &labels,
            &cfg,
            &ScanContext::with_deadline(Duration::from_millis(120)),
        )
        .await;

    assert!(report.truncated);
    assert_eq!(report.candidates, 40);
    assert!(report.dispatched < 40);
    assert!(resolver.lookups.load(Ordering::SeqCst) < 40);
}

#[tokio::test]
async fn cancelled_context_dispatches_nothing() {
    let ctx: ScanContext = ScanContext::new();
    ctx.cancel();

    let report: ScanReport = EnumerationService::new(Arc::new(example_resolver()))
        .enumerate(&domain("example.com"), &words(&["www", "api"]), &quick_config(), &ctx)
        .await;

    assert!(report.findings.is_empty());
    assert_eq!(report.dispatched, 0);
    assert!(report.truncated);
}
