//! Structured errors: a message, an optional cause chain and key/value pairs
//! for structured logging.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `structured_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping with Context
//!
//! ```
//! use structured_error::{collect_kvs, kvs, StructuredError, Value};
//!
//! let e1 = StructuredError::new("e1").with_kvs(kvs!("name" => "cats", "lives" => 9));
//! let e2 = StructuredError::wrap(e1, "e2").with_kvs(kvs!("name" => "dogs"));
//!
//! assert_eq!(e2.to_string(), "e2: e1");
//!
//! // Outer pairs come first, so the newest value of a key wins.
//! let kvs = collect_kvs(Some(&e2)).fold_outer_wins();
//! assert_eq!(kvs.get("name"), Some(&Value::from("dogs")));
//! assert_eq!(kvs.get("lives"), Some(&Value::from(9)));
//! ```
//!
//! ## Comparing Against a Sentinel
//!
//! ```
//! use structured_error::{is, root_cause, unwrap, StructuredError};
//!
//! let err = StructuredError::wrap(
//!     StructuredError::wrap_opaque(std::fmt::Error, "writing row"),
//!     "exporting report",
//! );
//!
//! // `unwrap` reaches the sentinel, `root_cause` stops at the last structured layer.
//! assert!(unwrap(&err).downcast_ref::<std::fmt::Error>().is_some());
//! assert_eq!(root_cause(&err).as_structured().unwrap().message(), "writing row");
//! assert!(is(&err, &std::fmt::Error));
//! ```

/// Error chain traversal: key/value collection, unwrapping, comparison
pub mod chain;
/// Free-function constructors
pub mod construct;
/// Single-resource lookup against a cluster API
pub mod lookup;
/// Key/value and error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for structured errors
pub mod traits;
/// StructuredError, causes, chain views and key/value types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::*;
pub use construct::*;
pub use traits::*;
pub use types::{
    error_formatter::{ChainFormatConfig, ErrorFormatBuilder},
    Cause, Chain, ErrorRef, ErrorVec, Key, KeyValue, KeyValues, KvParityError, StructuredError,
    StructuredResult, Value,
};
