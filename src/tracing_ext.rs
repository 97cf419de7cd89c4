//! Tracing integration for structured errors.
//!
//! This module emits the collected key/value payload of an error as a
//! `tracing` event and can record the active span on an error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! structured-error = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::StructuredError;

/// Emits `error` as an `ERROR` level event.
///
/// The event carries the rendered chain as `error` and the collected pairs,
/// folded so the outermost value of a repeated key wins, as `kvs`.
///
/// # Example
///
/// ```rust,ignore
/// use structured_error::{tracing_ext::log_error, StructuredError};
///
/// let err = StructuredError::new("disk full").with_kv("volume", "/var");
/// log_error(&err);
/// // ERROR error=disk full kvs=volume=/var
/// ```
pub fn log_error(error: &StructuredError) {
    let kvs = error.collect_kvs().fold_outer_wins();
    tracing::error!(error = %error, kvs = %kvs);
}

/// Attaches the name of the current span as a `span` pair.
pub fn with_current_span(error: StructuredError) -> StructuredError {
    with_span(error, &Span::current())
}

/// Attaches the name of `span` as a `span` pair.
pub fn with_span(error: StructuredError, span: &Span) -> StructuredError {
    error.with_kv("span", span_name(span))
}

/// Name of a span, or `"unknown"` for a disabled span.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

/// Extension trait for results failing with [`StructuredError`].
pub trait ResultTraceExt<T> {
    /// Logs the error with [`log_error`] and returns the result unchanged.
    fn log_err(self) -> Self;

    /// Attaches the current span name to the error.
    fn with_span_kv(self) -> Self;
}

impl<T> ResultTraceExt<T> for Result<T, StructuredError> {
    #[inline]
    fn log_err(self) -> Self {
        self.inspect_err(log_error)
    }

    #[inline]
    fn with_span_kv(self) -> Self {
        self.map_err(with_current_span)
    }
}
