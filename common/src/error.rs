use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while turning user input into a scan configuration.
///
/// None of these abort a scan on their own: the CLI reports them once and
/// falls back to a safe default wherever one exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port '{0}' in port list")]
    InvalidPort(String),

    #[error("port list is empty")]
    EmptyPortList,

    #[error("cannot read wordlist {}: {source}", path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid domain '{input}': {reason}")]
    InvalidDomain { input: String, reason: &'static str },

    #[error("invalid duration '{0}', expected a positive number of seconds")]
    InvalidDuration(String),

    #[error("unknown passive source '{0}' (available: crtsh)")]
    UnknownPassiveSource(String),
}
