//! Core traits for structured errors.
//!
//! - [`Structured`]: the capability set (message, own pairs, cause) that lets
//!   an error take part in key/value traversal
//! - [`ResultExt`] / [`StructuredResultExt`]: wrap the error of a `Result`
//!   with a message and pairs
//!
//! # Examples
//!
//! ```
//! use structured_error::kvs;
//! use structured_error::traits::ResultExt;
//!
//! let parsed: Result<u16, _> = "70000".parse::<u16>();
//! let err = parsed.wrap_err("parsing port", kvs!("input" => "70000")).unwrap_err();
//!
//! assert!(err.to_string().starts_with("parsing port: "));
//! ```

pub mod result_ext;
pub mod structured;

pub use result_ext::{ResultExt, StructuredResultExt};
pub use structured::{AsDynError, Structured};
