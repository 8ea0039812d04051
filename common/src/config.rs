use std::time::Duration;

use crate::error::ConfigError;
use crate::passive::PassiveKind;

pub const DEFAULT_THREADS: usize = 200;
/// Lower bound on the worker pool so a bad `--threads` value cannot serialize a scan.
pub const MIN_THREADS: usize = 4;
pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_millis(2_500);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_PASSIVE_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_PORTS: &[u16] = &[80, 443];
pub const WILDCARD_TRIES: usize = 3;

/// Presentation settings of the terminal front-end.
pub struct Config {
    /// `0` prints everything, `1` drops banners and headers, `2` prints hosts only.
    pub quiet: u8,
    pub no_banner: bool,
}

/// Everything that shapes a single enumeration run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub threads: usize,
    /// Bound on each DNS lookup, including wildcard detection.
    pub timeout: Duration,
    pub wildcard_tries: usize,
    pub passive: Option<PassiveKind>,
    pub passive_timeout: Duration,
    pub probe: bool,
    pub ports: Vec<u16>,
    pub probe_timeout: Duration,
    /// Overall budget for dispatching candidates. `None` means unbounded.
    pub deadline: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            timeout: DEFAULT_DNS_TIMEOUT,
            wildcard_tries: WILDCARD_TRIES,
            passive: None,
            passive_timeout: DEFAULT_PASSIVE_TIMEOUT,
            probe: false,
            ports: DEFAULT_PORTS.to_vec(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            deadline: None,
        }
    }
}

impl ScanConfig {
    pub fn pool_size(&self) -> usize {
        self.threads.max(MIN_THREADS)
    }
}

/// Parses a comma-separated port list such as `"80,443,8080"`.
///
/// Blank entries are skipped and duplicates keep their first position.
pub fn parse_ports(raw: &str) -> Result<Vec<u16>, ConfigError> {
    let mut ports: Vec<u16> = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let port: u16 = token
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigError::InvalidPort(token.to_string()))?;

        if !ports.contains(&port) {
            ports.push(port);
        }
    }

    if ports.is_empty() {
        return Err(ConfigError::EmptyPortList);
    }
    Ok(ports)
}

/// Parses a positive, fractional number of seconds (`"2.5"`) into a [`Duration`].
pub fn parse_seconds(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(raw.to_string());
    let secs: f64 = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if secs <= 0.0 {
        return Err(invalid());
    }
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
