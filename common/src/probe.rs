use std::time::Duration;

use async_trait::async_trait;

use crate::finding::Liveness;

/// Per-protocol result of probing one host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub http: Option<Liveness>,
    pub https: Option<Liveness>,
}

impl ProbeOutcome {
    /// Both protocols have a recorded answer, so no further port is worth trying.
    pub fn is_complete(&self) -> bool {
        self.http.is_some() && self.https.is_some()
    }
}

/// Checks whether a host serves HTTP and/or HTTPS on any of `ports`.
///
/// Failures never surface: a protocol that did not answer stays `None`.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, host: &str, ports: &[u16], timeout: Duration) -> ProbeOutcome;
}
