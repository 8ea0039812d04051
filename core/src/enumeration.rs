//! # Subdomain Enumeration Service
//!
//! Implements the core "enumerate a domain" use case.
//!
//! The service owns the outbound ports ([`Resolver`], optional
//! [`PassiveSource`], optional [`Prober`]) and orchestrates a scan:
//!
//! 1. **Candidates**: wordlist labels under the domain, merged with passive names.
//! 2. **Wildcard detection**: sampled once, read-only afterwards.
//! 3. **Resolution**: a bounded pool of workers, one candidate per worker at
//!    a time. Survivors of the wildcard filter are probed in the same worker.
//! 4. **Aggregation**: findings are ordered by host.
//!
//! Per-candidate failures never leave the worker. A [`ScanContext`] can stop
//! dispatching early (deadline or cancellation); whatever was dispatched still
//! completes and is reported.

use std::sync::Arc;
use std::time::Duration;

use futures::{StreamExt, future, stream};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use dome_common::config::ScanConfig;
use dome_common::dns::Resolver;
use dome_common::domain::Domain;
use dome_common::finding::Finding;
use dome_common::passive::PassiveSource;
use dome_common::probe::{ProbeOutcome, Prober};
use dome_common::{debug, info, warn};

use crate::aggregator;
use crate::candidates;
use crate::passive;
use crate::prober::HttpProber;
use crate::resolver::SystemResolver;
use crate::wildcard::{self, WildcardSet};

type ProgressFn = dyn Fn(usize, usize) + Send + Sync;

/// Stop conditions shared with every dispatch decision of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// No candidate is dispatched once `budget` has elapsed from now.
    pub fn with_deadline(budget: Duration) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(Instant::now() + budget),
        }
    }

    pub fn from_config(cfg: &ScanConfig) -> Self {
        match cfg.deadline {
            Some(budget) => Self::with_deadline(budget),
            None => Self::new(),
        }
    }

    /// Handle that stops further dispatch when cancelled, e.g. from a signal handler.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn should_dispatch(&self) -> bool {
        let not_cancelled: bool = !self.cancel.is_cancelled();
        let time_remains: bool = self.deadline.is_none_or(|deadline| Instant::now() < deadline);

        not_cancelled && time_remains
    }
}

/// Everything a scan learned, including the noise it discarded.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Live, non-wildcard hosts sorted by name.
    pub findings: Vec<Finding>,
    /// Hosts that only resolved to wildcard addresses. Kept for diagnostics, never emitted.
    pub suppressed: Vec<Finding>,
    pub wildcard: WildcardSet,
    pub candidates: usize,
    pub passive_names: usize,
    pub dispatched: usize,
    /// Dispatch stopped before every candidate was tried.
    pub truncated: bool,
}

pub struct EnumerationService {
    resolver: Arc<dyn Resolver>,
    passive: Option<Box<dyn PassiveSource>>,
    prober: Option<Arc<dyn Prober>>,
    on_progress: Option<Arc<ProgressFn>>,
}

impl EnumerationService {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self {
            resolver,
            passive: None,
            prober: None,
            on_progress: None,
        }
    }

    /// Wires the production adapters selected by `cfg`.
    pub fn from_config(cfg: &ScanConfig) -> Self {
        let resolver: Arc<dyn Resolver> = Arc::new(SystemResolver::from_system_conf(cfg.timeout));
        let mut service: Self = Self::new(resolver);

        if let Some(kind) = cfg.passive {
            if let Some(source) = passive::source_for(kind, cfg.passive_timeout) {
                service = service.with_passive(source);
            }
        }
        if cfg.probe {
            service = service.with_prober(Arc::new(HttpProber::new()));
        }

        service
    }

    pub fn with_passive(mut self, source: Box<dyn PassiveSource>) -> Self {
        self.passive = Some(source);
        self
    }

    pub fn with_prober(mut self, prober: Arc<dyn Prober>) -> Self {
        self.prober = Some(prober);
        self
    }

    /// Registers a callback invoked with `(completed, total)` after each candidate.
    pub fn on_progress(mut self, callback: impl Fn(usize, usize) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Runs a full scan of `domain`.
    ///
    /// Never fails: resolution, passive and probe errors only shrink the result.
    /// The attached passive source and prober only run when `cfg.passive` and
    /// `cfg.probe` enable them.
    pub async fn enumerate(
        &self,
        domain: &Domain,
        words: &[String],
        cfg: &ScanConfig,
        ctx: &ScanContext,
    ) -> ScanReport {
        let (passive_names, wildcard) = tokio::join!(
            self.collect_passive(domain, cfg),
            wildcard::detect_wildcard(self.resolver.as_ref(), domain, cfg.wildcard_tries, cfg.timeout),
        );

        if !wildcard.is_empty() {
            warn!(
                "Wildcard DNS detected for *.{domain}: {} catch-all address(es) will be filtered",
                wildcard.addresses().len()
            );
        }

        let candidates: Vec<String> = candidates::build_candidates(domain, words, &passive_names);
        let total: usize = candidates.len();
        info!("Resolving {total} candidates with {} workers", cfg.pool_size());

        let worker: Worker = Worker {
            resolver: self.resolver.clone(),
            prober: self.prober.clone().filter(|_| cfg.probe),
            wildcard: Arc::new(wildcard.clone()),
            timeout: cfg.timeout,
            ports: cfg.ports.clone().into(),
            probe_timeout: cfg.probe_timeout,
        };

        let mut results = stream::iter(candidates)
            .take_while(|_| future::ready(ctx.should_dispatch()))
            .map(|host| tokio::spawn(worker.clone().inspect(host)))
            .buffer_unordered(cfg.pool_size());

        let mut findings: Vec<Finding> = Vec::new();
        let mut suppressed: Vec<Finding> = Vec::new();
        let mut completed: usize = 0;

        while let Some(joined) = results.next().await {
            completed += 1;
            self.report_progress(completed, total);

            match joined {
                Ok(Outcome::Live(finding)) => findings.push(finding),
                Ok(Outcome::Noise(finding)) => suppressed.push(finding),
                Ok(Outcome::Missing) => {}
                Err(e) => debug!("worker aborted, candidate dropped: {e}"),
            }
        }

        let truncated: bool = completed < total;
        if truncated {
            warn!("Scan stopped early: {completed} of {total} candidates were tried");
        }

        ScanReport {
            findings: aggregator::finalize(findings),
            suppressed: aggregator::finalize(suppressed),
            wildcard,
            candidates: total,
            passive_names: passive_names.len(),
            dispatched: completed,
            truncated,
        }
    }

    async fn collect_passive(&self, domain: &Domain, cfg: &ScanConfig) -> Vec<String> {
        let Some(source) = self.passive.as_ref().filter(|_| cfg.passive.is_some()) else {
            return Vec::new();
        };

        let names: Vec<String> = source.lookup(domain).await;
        info!("{} reported {} names under {domain}", source.name(), names.len());
        names
    }

    fn report_progress(&self, completed: usize, total: usize) {
        if let Some(callback) = &self.on_progress {
            callback(completed, total);
        }
    }
}

enum Outcome {
    Missing,
    Noise(Finding),
    Live(Finding),
}

/// The per-candidate unit of work. Cheap to clone; everything shared is read-only.
#[derive(Clone)]
struct Worker {
    resolver: Arc<dyn Resolver>,
    prober: Option<Arc<dyn Prober>>,
    wildcard: Arc<WildcardSet>,
    timeout: Duration,
    ports: Arc<[u16]>,
    probe_timeout: Duration,
}

impl Worker {
    async fn inspect(self, host: String) -> Outcome {
        let addresses = self.resolver.resolve(&host, self.timeout).await;
        if addresses.is_empty() {
            return Outcome::Missing;
        }

        if self.wildcard.is_noise(&addresses) {
            debug!("{host} only resolves to wildcard addresses");
            return Outcome::Noise(Finding::new(host, addresses).wildcard());
        }

        let mut finding: Finding = Finding::new(host, addresses);
        if let Some(prober) = &self.prober {
            let outcome: ProbeOutcome = prober
                .probe(&finding.host, &self.ports, self.probe_timeout)
                .await;
            finding = finding.with_liveness(outcome.http, outcome.https);
        }

        Outcome::Live(finding)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
