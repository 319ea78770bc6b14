//! Logging shorthands used across the workspace.
//!
//! They forward to `tracing` so the subscriber installed by the binary decides
//! where (and whether) the line ends up.

/// Target used to tag successful outcomes so formatters can style them apart.
pub const SUCCESS_TARGET: &str = "loto::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}
