//! # Dome Core
//!
//! Subdomain discovery engine: brute-force DNS resolution under a bounded
//! worker pool, optional certificate-transparency candidates, wildcard-noise
//! suppression and optional HTTP/HTTPS liveness probing.
//!
//! ## Layout
//! * **[`enumeration`]**: the application service that orchestrates a scan.
//! * **[`candidates`]**, **[`wildcard`]**, **[`aggregator`]**: pure scan logic.
//! * **[`resolver`]**, **[`passive`]**, **[`prober`]**: adapters implementing the
//!   port traits of `dome-common` on top of hickory and reqwest.
//! * **[`report`]**: JSON and CSV writers for finished scans.

pub mod aggregator;
pub mod candidates;
pub mod enumeration;
pub mod passive;
pub mod prober;
pub mod report;
pub mod resolver;
pub mod wildcard;

pub use enumeration::{EnumerationService, ScanContext, ScanReport};
