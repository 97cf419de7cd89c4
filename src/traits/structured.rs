//! The capability set an error exposes to take part in structured traversal.
//!
//! Implementing [`Structured`] lets a custom error type sit inside a chain
//! next to [`StructuredError`](crate::StructuredError): its pairs are picked
//! up by [`collect_kvs`](crate::collect_kvs) and traversal continues through
//! its cause.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//! use structured_error::{kvs, collect_kvs, Cause, KeyValues, Structured, StructuredError};
//!
//! #[derive(Debug)]
//! struct QuotaExceeded {
//!     kvs: KeyValues,
//! }
//!
//! impl fmt::Display for QuotaExceeded {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("quota exceeded")
//!     }
//! }
//!
//! impl std::error::Error for QuotaExceeded {}
//!
//! impl Structured for QuotaExceeded {
//!     fn message(&self) -> &str {
//!         "quota exceeded"
//!     }
//!
//!     fn kvs(&self) -> &KeyValues {
//!         &self.kvs
//!     }
//!
//!     fn cause_ref(&self) -> Option<&Cause> {
//!         None
//!     }
//! }
//!
//! let inner = QuotaExceeded { kvs: kvs!("limit" => 10) };
//! let err = StructuredError::wrap(Cause::structured(inner), "upload failed").with_kv("file", "a.txt");
//!
//! assert_eq!(collect_kvs(Some(&err)).len(), 2);
//! ```

use std::error::Error;

use crate::types::{Cause, KeyValues};

/// Borrows a value as a `dyn Error` trait object.
///
/// Implemented for every sized error type; it lets a `&dyn Structured` be
/// viewed as a plain `&dyn Error`.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<T: Error + 'static> AsDynError for T {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// An error that carries its own key/value pairs and an optional cause.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot take part in structured traversal",
    label = "this type does not implement `Structured`",
    note = "wrap it with `Cause::opaque` to use it as a terminal cause instead"
)]
pub trait Structured: Error + AsDynError + Send + Sync + 'static {
    /// The message describing this layer alone, without its cause.
    fn message(&self) -> &str;

    /// Pairs attached to this layer only.
    fn kvs(&self) -> &KeyValues;

    /// The immediate cause, if any.
    fn cause_ref(&self) -> Option<&Cause>;
}
