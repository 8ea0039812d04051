//! HTTP/HTTPS liveness probing with `HEAD` requests.
//!
//! For every port, HTTPS is tried before HTTP and the first answer per
//! protocol is kept. Iteration stops once both protocols have answered.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};

use dome_common::finding::Liveness;
use dome_common::probe::{ProbeOutcome, Prober};
use dome_common::{debug, warn};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

pub struct HttpProber {
    client: Option<Client>,
}

impl HttpProber {
    /// Builds the shared client. If that fails, probing degrades to "no answer".
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("dome/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build();

        match client {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(e) => {
                warn!("HTTP client unavailable, probe results will be empty: {e}");
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self { client: None }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, host: &str, ports: &[u16], timeout: Duration) -> ProbeOutcome {
        let mut outcome: ProbeOutcome = ProbeOutcome::default();
        let Some(client) = &self.client else {
            return outcome;
        };

        for &port in ports {
            if outcome.https.is_none() {
                outcome.https = head(client, Scheme::Https, host, port, timeout).await;
            }
            if outcome.http.is_none() {
                outcome.http = head(client, Scheme::Http, host, port, timeout).await;
            }
            if outcome.is_complete() {
                break;
            }
        }

        outcome
    }
}

async fn head(
    client: &Client,
    scheme: Scheme,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Option<Liveness> {
    let url: String = format!("{}://{host}:{port}", scheme.as_str());

    match client.head(&url).timeout(timeout).send().await {
        Ok(response) => Some(Liveness::new(response.status().as_u16())),
        Err(e) => {
            debug!("{url} did not answer: {e}");
            None
        }
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
