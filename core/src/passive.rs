//! Adapters for [`PassiveSource`] providers.
//!
//! New providers implement the trait in a submodule and register here; the
//! enumeration service only ever sees `Box<dyn PassiveSource>`.

use std::time::Duration;

use dome_common::passive::{PassiveKind, PassiveSource};
use dome_common::warn;

mod crtsh;

pub use crtsh::{CRTSH_ENDPOINT, CrtSh};

/// Instantiates the adapter for `kind`.
///
/// Returns `None` (after logging why) when the adapter cannot be built, so
/// the scan continues with brute-force candidates only.
pub fn source_for(kind: PassiveKind, timeout: Duration) -> Option<Box<dyn PassiveSource>> {
    match kind {
        PassiveKind::CrtSh => match CrtSh::new(timeout) {
            Ok(source) => Some(Box::new(source)),
            Err(e) => {
                warn!("Passive source {kind} unavailable: {e:#}");
                None
            }
        },
    }
}
