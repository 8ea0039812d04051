//! # Finding Model
//!
//! A [`Finding`] is one candidate that resolved to at least one address.
//!
//! Liveness results are `Option`s on purpose: `None` means "not probed, or no
//! response", which is different from a probe that reached a closed service.

use std::collections::BTreeSet;
use std::net::IpAddr;

/// A protocol answered a probe with the given status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Liveness {
    pub status: u16,
}

impl Liveness {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub host: String,
    pub addresses: BTreeSet<IpAddr>,
    pub is_wildcard: bool,
    pub http: Option<Liveness>,
    pub https: Option<Liveness>,
}

impl Finding {
    pub fn new(host: impl Into<String>, addresses: BTreeSet<IpAddr>) -> Self {
        Self {
            host: host.into(),
            addresses,
            is_wildcard: false,
            http: None,
            https: None,
        }
    }

    pub fn wildcard(mut self) -> Self {
        self.is_wildcard = true;
        self
    }

    pub fn with_liveness(mut self, http: Option<Liveness>, https: Option<Liveness>) -> Self {
        self.http = http;
        self.https = https;
        self
    }

    pub fn http_open(&self) -> Option<bool> {
        self.http.map(|_| true)
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http.map(|l| l.status)
    }

    pub fn https_open(&self) -> Option<bool> {
        self.https.map(|_| true)
    }

    pub fn https_status(&self) -> Option<u16> {
        self.https.map(|l| l.status)
    }
}
