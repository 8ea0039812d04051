//! # Report Writers
//!
//! Materializes findings into the JSON and CSV layouts consumed by
//! downstream tooling.
//!
//! * **JSON**: an array of objects with `host`, `addresses`, `is_wildcard`,
//!   `http_open`, `http_status`, `https_open`, `https_status`. Absent
//!   liveness values are `null`.
//! * **CSV**: header `host,addresses,http_open,http_status,https_open,https_status`,
//!   addresses joined with `;`, absent values as empty cells.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use dome_common::finding::Finding;

const CSV_HEADER: [&str; 6] = [
    "host",
    "addresses",
    "http_open",
    "http_status",
    "https_open",
    "https_status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Serialized shape of a [`Finding`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub host: String,
    pub addresses: Vec<String>,
    pub is_wildcard: bool,
    pub http_open: Option<bool>,
    pub http_status: Option<u16>,
    pub https_open: Option<bool>,
    pub https_status: Option<u16>,
}

impl From<&Finding> for FindingRecord {
    fn from(finding: &Finding) -> Self {
        Self {
            host: finding.host.clone(),
            addresses: finding.addresses.iter().map(|ip| ip.to_string()).collect(),
            is_wildcard: finding.is_wildcard,
            http_open: finding.http_open(),
            http_status: finding.http_status(),
            https_open: finding.https_open(),
            https_status: finding.https_status(),
        }
    }
}

pub fn to_json(findings: &[Finding]) -> anyhow::Result<String> {
    let records: Vec<FindingRecord> = findings.iter().map(FindingRecord::from).collect();
    serde_json::to_string_pretty(&records).context("serializing findings to JSON")
}

pub fn write_json<W: Write>(mut writer: W, findings: &[Finding]) -> anyhow::Result<()> {
    writer.write_all(to_json(findings)?.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, findings: &[Finding]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for finding in findings {
        let record: FindingRecord = FindingRecord::from(finding);
        wtr.write_record([
            record.host,
            record.addresses.join(";"),
            cell(record.http_open),
            cell(record.http_status),
            cell(record.https_open),
            cell(record.https_status),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `findings` to `path` in the requested format, replacing any existing file.
pub fn save(path: &Path, format: OutputFormat, findings: &[Finding]) -> anyhow::Result<()> {
    let file: File =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let writer: BufWriter<File> = BufWriter::new(file);

    match format {
        OutputFormat::Json => write_json(writer, findings),
        OutputFormat::Csv => write_csv(writer, findings),
    }
    .with_context(|| format!("writing {}", path.display()))
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
