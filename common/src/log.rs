//! Logging macros shared by every crate in the workspace.
//!
//! They forward to [`tracing`] so the CLI subscriber decides how (and whether)
//! events are rendered. `success!` is an `INFO` event on a dedicated target,
//! which the terminal formatter renders with its own glyph.

pub const SUCCESS_TARGET: &str = "dome::success";
pub const PRINT_TARGET: &str = "dome::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "dome::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}
