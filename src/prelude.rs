//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use structured_error::prelude::*;
//!
//! fn load(path: &'static str) -> StructuredResult<String> {
//!     std::fs::read_to_string(path).wrap_err("loading file", kvs!("path" => path))
//! }
//!
//! let err = load("/no/such/file").unwrap_err();
//! assert_eq!(collect_kvs(Some(&err)).len(), 1);
//! ```

// Macros
pub use crate::{kvs, structured};

// Core types
pub use crate::types::{Cause, ErrorRef, KeyValue, KeyValues, StructuredError, StructuredResult, Value};

// Chain inspection
pub use crate::chain::{collect_kvs, is, root_cause, unwrap};

// Traits
pub use crate::traits::{ResultExt, Structured, StructuredResultExt};
