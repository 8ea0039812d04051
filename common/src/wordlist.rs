//! # Wordlists
//!
//! Labels that are prefixed to the target domain to build brute-force
//! candidates. A wordlist file holds one label per line; blank lines and
//! lines starting with `#` are ignored.

use std::path::Path;

use crate::error::ConfigError;

/// Built-in list of common subdomain labels, used when no wordlist is given.
pub const DEFAULT_WORDS: &[&str] = &[
    "www", "api", "dev", "test", "stage", "staging", "prod", "production", "beta", "alpha",
    "admin", "portal", "cdn", "img", "static", "media", "files", "mail", "smtp", "pop", "imap",
    "vpn", "sso", "auth", "login", "blog", "wiki", "help", "docs", "status", "m", "mobile",
    "mta", "ftp", "ns1", "ns2", "dns1", "dns2", "gateway", "gw", "proxy", "router", "git",
    "gitlab", "github", "ci", "cd", "jenkins", "build", "infra", "internal", "intranet", "qa",
    "uat", "preview", "edge", "cache", "assets", "shop", "store", "payments", "billing", "pay",
    "s3", "oos", "oss", "bucket", "downloads", "dl", "node", "app", "backend", "frontend",
    "web", "nginx", "apache", "mysql", "db", "redis", "kafka", "mq", "rabbit", "elastic", "es",
    "log", "graylog", "grafana", "prometheus", "metrics", "monitor", "monitoring", "kibana",
    "search", "seo", "tracking", "analytics", "pixel", "click", "collector", "ad", "ads",
    "adserver", "api1", "api2", "api3", "v1", "v2", "v3", "site1", "site2", "legacy", "old",
    "new", "sandbox", "demo", "trial", "customer", "client", "partner", "vendor", "office",
    "corp", "global", "hk", "jp", "kr", "us", "eu", "de", "fr", "uk", "ca", "au", "sg", "in",
    "br", "ru", "cn", "autodiscover", "autoconfig", "webmail", "remote", "exchange", "owa",
    "lyncdiscover", "sip", "vpn2", "secure", "support", "my", "account", "accounts", "id",
    "identity", "console", "panel", "dashboard", "cpanel", "whm", "webdisk", "ns3", "ns4", "mx",
    "mx1", "mx2", "relay", "email", "direct", "origin", "cloud", "k8s", "kube", "registry",
    "docker", "jira", "confluence", "sentry", "vault",
];

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Extracts labels from wordlist text.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads a wordlist file. Invalid UTF-8 sequences are replaced rather than rejected.
pub fn load_words(path: &Path) -> Result<Vec<String>, ConfigError> {
    let bytes: Vec<u8> = std::fs::read(path).map_err(|source| ConfigError::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&String::from_utf8_lossy(&bytes)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
