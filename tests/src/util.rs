use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dome_common::domain::Domain;
use dome_common::passive::PassiveSource;

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn ips(list: &[&str]) -> BTreeSet<IpAddr> {
    list.iter().map(|s| ip(s)).collect()
}

pub fn domain(s: &str) -> Domain {
    s.parse().unwrap()
}

pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Authoritative answers from a fixed table; `fallback` answers every other name.
pub struct TableResolver {
    table: HashMap<String, BTreeSet<IpAddr>>,
    fallback: BTreeSet<IpAddr>,
    delay: Duration,
    pub lookups: AtomicUsize,
}

impl TableResolver {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let table: HashMap<String, BTreeSet<IpAddr>> = entries
            .iter()
            .map(|(host, addrs)| (host.to_string(), ips(addrs)))
            .collect();

        Self {
            table,
            fallback: BTreeSet::new(),
            delay: Duration::ZERO,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn catch_all(mut self, addrs: &[&str]) -> Self {
        self.fallback = ips(addrs);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl dome_common::dns::Resolver for TableResolver {
    async fn resolve(&self, host: &str, _timeout: Duration) -> BTreeSet<IpAddr> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.table
            .get(host)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Passive source with a canned answer. An empty answer behaves like a failed lookup.
pub struct StaticSource(pub Vec<String>);

#[async_trait]
impl PassiveSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn lookup(&self, _domain: &Domain) -> Vec<String> {
        self.0.clone()
    }
}
