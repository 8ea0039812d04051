//! # Passive Sources
//!
//! Third-party providers of historically observed hostnames.
//!
//! A source is best-effort by contract: [`PassiveSource::lookup`] returns an
//! empty list instead of an error, so adding or losing a provider never
//! affects the brute-force half of a scan.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::domain::Domain;
use crate::error::ConfigError;

/// The passive providers selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassiveKind {
    /// Certificate-transparency search at crt.sh.
    CrtSh,
}

impl FromStr for PassiveKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crtsh" | "crt.sh" => Ok(Self::CrtSh),
            _ => Err(ConfigError::UnknownPassiveSource(s.to_string())),
        }
    }
}

impl fmt::Display for PassiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrtSh => f.write_str("crtsh"),
        }
    }
}

#[async_trait]
pub trait PassiveSource: Send + Sync {
    /// Short provider name used in log lines.
    fn name(&self) -> &'static str;

    /// Returns lowercase names covered by `domain`, sorted and deduplicated.
    async fn lookup(&self, domain: &Domain) -> Vec<String>;
}
