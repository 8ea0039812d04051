//! System DNS resolution backed by `hickory-resolver`.
//!
//! The resolver is built once from the host's resolver configuration and
//! shared by every worker. Per-call deadlines are applied with
//! [`tokio::time::timeout`] around each lookup, so concurrent callers never
//! observe each other's timeout.

use std::collections::BTreeSet;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf;

use dome_common::dns::Resolver;
use dome_common::{debug, warn};

pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Reads `/etc/resolv.conf` (or the platform equivalent).
    ///
    /// Falls back to Cloudflare's public resolvers when the system
    /// configuration cannot be read.
    pub fn from_system_conf(timeout: Duration) -> Self {
        let (config, opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("Cannot read system resolver configuration ({e}), using public resolvers");
                (ResolverConfig::cloudflare(), ResolverOpts::default())
            }
        };
        Self::with_config(config, opts, timeout)
    }

    pub fn with_config(config: ResolverConfig, mut opts: ResolverOpts, timeout: Duration) -> Self {
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        opts.timeout = timeout;
        opts.attempts = 1;

        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str, timeout: Duration) -> BTreeSet<IpAddr> {
        let fqdn: String = to_fqdn(host);

        match tokio::time::timeout(timeout, self.inner.lookup_ip(fqdn.as_str())).await {
            Ok(Ok(lookup)) => lookup.iter().collect(),
            Ok(Err(e)) => {
                debug!("{host} did not resolve: {e}");
                BTreeSet::new()
            }
            Err(_elapsed) => {
                debug!("{host} timed out after {:.1}s", timeout.as_secs_f64());
                BTreeSet::new()
            }
        }
    }
}

/// Appends the root label so the system search list is never applied to a candidate.
fn to_fqdn(host: &str) -> String {
    if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{host}.")
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
