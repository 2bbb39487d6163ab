//! Tracing integration for rail results.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rail-result = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use tracing::Level;

use crate::types::Result;

/// Logs the error track of a result without changing it.
///
/// The event carries the operation name and the `Debug` form of the error
/// payload, and is emitted inside whatever span is current.
///
/// # Example
///
/// ```rust,ignore
/// use rail_result::traits::TraceExt;
///
/// let user = load_user(id).trace_err("load_user").bind(check_quota);
/// ```
pub trait TraceExt: Sized {
    /// Emits a `WARN` event when the error alternative is active.
    fn trace_err(self, operation: &'static str) -> Self {
        self.trace_with(Level::WARN, operation)
    }

    /// Emits an event at `level` when the error alternative is active.
    fn trace_with(self, level: Level, operation: &'static str) -> Self;
}

impl<V, E: Debug> TraceExt for Result<V, E> {
    fn trace_with(self, level: Level, operation: &'static str) -> Self {
        if let Result::Err(error) = &self {
            if level == Level::ERROR {
                tracing::error!(operation, error = ?error, "result on error track");
            } else if level == Level::WARN {
                tracing::warn!(operation, error = ?error, "result on error track");
            } else if level == Level::INFO {
                tracing::info!(operation, error = ?error, "result on error track");
            } else if level == Level::DEBUG {
                tracing::debug!(operation, error = ?error, "result on error track");
            } else {
                tracing::trace!(operation, error = ?error, "result on error track");
            }
        }
        self
    }
}
