use std::collections::BTreeSet;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

/// Forward name resolution for a single host.
///
/// Implementations follow CNAME chains and return only final A/AAAA
/// addresses. Every failure (NXDOMAIN, timeout, network error) yields an
/// empty set: to a scan, a name that cannot be resolved does not exist.
///
/// `timeout` bounds this call only. Implementations must not change any
/// resolver state shared with concurrent callers to honour it.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, host: &str, timeout: Duration) -> BTreeSet<IpAddr>;
}
