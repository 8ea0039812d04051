use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;

use dome_common::domain::Domain;
use dome_common::passive::PassiveSource;
use dome_common::{debug, warn};

use crate::candidates::normalize_passive;

pub const CRTSH_ENDPOINT: &str = "https://crt.sh/";

#[derive(Debug, Deserialize)]
struct CrtShEntry {
    #[serde(default)]
    name_value: String,
}

/// Certificate-transparency search at crt.sh.
///
/// One request per lookup, no retries. Every failure degrades to an empty
/// result.
pub struct CrtSh {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl CrtSh {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Self::with_endpoint(CRTSH_ENDPOINT, timeout)
    }

    /// Points the adapter at another deployment of the crt.sh API.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .user_agent(concat!("dome/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building crt.sh HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    async fn fetch(&self, domain: &Domain) -> anyhow::Result<Vec<CrtShEntry>> {
        let query: [(&str, String); 2] = [
            ("q", format!("%.{domain}")),
            ("output", String::from("json")),
        ];

        let entries: Vec<CrtShEntry> = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("unexpected status")?
            .json()
            .await
            .context("malformed response")?;

        Ok(entries)
    }
}

#[async_trait]
impl PassiveSource for CrtSh {
    fn name(&self) -> &'static str {
        "crt.sh"
    }

    async fn lookup(&self, domain: &Domain) -> Vec<String> {
        match self.fetch(domain).await {
            Ok(entries) => {
                debug!("crt.sh returned {} certificate records", entries.len());
                extract_names(&entries, domain)
            }
            Err(e) => {
                warn!("crt.sh lookup failed, continuing without passive results: {e:#}");
                Vec::new()
            }
        }
    }
}

/// Splits the newline-separated `name_value` of every record and keeps in-scope names.
fn extract_names(entries: &[CrtShEntry], domain: &Domain) -> Vec<String> {
    let names: BTreeSet<String> = entries
        .iter()
        .flat_map(|entry| entry.name_value.split('\n'))
        .filter_map(|name| normalize_passive(domain, name))
        .collect();

    names.into_iter().collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
