pub mod enumerate;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use dome_common::config::{self, DEFAULT_PORTS, DEFAULT_THREADS, ScanConfig, WILDCARD_TRIES};
use dome_common::domain::Domain;
use dome_common::passive::PassiveKind;
use dome_common::warn;
use dome_core::report::OutputFormat;

#[derive(Parser)]
#[command(name = "dome", version)]
#[command(about = "Find live subdomains by DNS brute force, certificate transparency and HTTP probing.")]
pub struct CommandLine {
    /// Target domain (e.g. example.com)
    pub domain: Domain,

    /// Wordlist file with one label per line [default: built-in list]
    #[arg(short, long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Number of concurrent resolution workers (minimum 4)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// DNS timeout in seconds, per lookup
    #[arg(long, value_name = "SECONDS", default_value = "2.5", value_parser = config::parse_seconds)]
    pub timeout: Duration,

    /// Merge candidates from a passive source
    #[arg(long, value_name = "SOURCE")]
    pub passive: Option<PassiveKind>,

    /// Timeout in seconds for the passive source request
    #[arg(long, value_name = "SECONDS", default_value = "8", value_parser = config::parse_seconds)]
    pub passive_timeout: Duration,

    /// Probe live hosts over HTTPS and HTTP (HEAD)
    #[arg(long)]
    pub probe: bool,

    /// Comma-separated ports to probe
    #[arg(long, value_name = "PORTS", default_value = "80,443")]
    pub ports: String,

    /// Timeout in seconds for each probe request
    #[arg(long, value_name = "SECONDS", default_value = "3", value_parser = config::parse_seconds)]
    pub probe_timeout: Duration,

    /// Stop dispatching new candidates after this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = config::parse_seconds)]
    pub deadline: Option<Duration>,

    /// Print results as JSON (also written to --output when given)
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Write results as CSV to --output
    #[arg(long)]
    pub csv: bool,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reduce console output (-q drops headers, -qq prints hosts only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the scan configuration, reporting and replacing an invalid port list.
    pub fn scan_config(&self) -> ScanConfig {
        let ports: Vec<u16> = match config::parse_ports(&self.ports) {
            Ok(ports) => ports,
            Err(e) => {
                warn!("{e}, falling back to default ports {DEFAULT_PORTS:?}");
                DEFAULT_PORTS.to_vec()
            }
        };

        ScanConfig {
            threads: self.threads,
            timeout: self.timeout,
            wildcard_tries: WILDCARD_TRIES,
            passive: self.passive,
            passive_timeout: self.passive_timeout,
            probe: self.probe,
            ports,
            probe_timeout: self.probe_timeout,
            deadline: self.deadline,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        match (self.json, self.csv) {
            (true, _) => Some(OutputFormat::Json),
            (_, true) => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}
