//! # Target Domain Model
//!
//! The apex name every candidate is built under.
//!
//! Parsing is forgiving about presentation (case, a trailing root dot, a
//! leading `*.` copied from a certificate) but rejects anything that is not a
//! plain DNS name, such as URLs or names with whitespace.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A normalized (lowercase, no trailing dot) DNS domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(String);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when `name` is this domain or one of its subdomains.
    ///
    /// `name` is expected to be lowercase already.
    pub fn covers(&self, name: &str) -> bool {
        match name.strip_suffix(self.0.as_str()) {
            Some("") => true,
            Some(prefix) => prefix.len() > 1 && prefix.ends_with('.'),
            None => false,
        }
    }

    /// Builds `label.domain`.
    pub fn child(&self, label: &str) -> String {
        format!("{label}.{}", self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ConfigError::InvalidDomain {
            input: s.to_string(),
            reason,
        };

        let mut name: String = s.trim().to_ascii_lowercase();

        if name.contains("://") || name.contains('/') {
            return Err(invalid("expected a bare domain name, not a URL"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if let Some(stripped) = name.strip_prefix("*.") {
            name = stripped.to_string();
        }
        if let Some(stripped) = name.strip_suffix('.') {
            name = stripped.to_string();
        }

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 253 characters"));
        }

        for label in name.split('.') {
            validate_label(label).map_err(invalid)?;
        }

        Ok(Self(name))
    }
}

fn validate_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("contains an empty label");
    }
    if label.len() > MAX_LABEL_LEN {
        return Err("label is longer than 63 characters");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("label starts or ends with a hyphen");
    }
    let valid_chars: bool = label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
    if !valid_chars {
        return Err("label contains characters outside [a-z0-9-_]");
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
