//! # Dome Common
//!
//! Shared vocabulary of the workspace: the models a scan produces, the
//! configuration it runs with, and the outbound **port traits** the core
//! drives ([`dns::Resolver`], [`passive::PassiveSource`], [`probe::Prober`]).
//!
//! Nothing in this crate performs network I/O. Concrete adapters live in
//! `dome-core`.

pub mod config;
pub mod dns;
pub mod domain;
pub mod error;
pub mod finding;
pub mod log;
pub mod passive;
pub mod probe;
pub mod wordlist;

pub use tracing;
