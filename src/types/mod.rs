//! Error types and utilities.
//!
//! This module provides the structured error itself, the cause and chain
//! views used to traverse it, and the key/value payload it carries.
//!
//! # Examples
//!
//! ```
//! use structured_error::{kvs, StructuredError};
//!
//! let err = StructuredError::wrap(
//!     StructuredError::new("connection refused").with_kv("host", "db-primary-01"),
//!     "loading user",
//! )
//! .with_kvs(kvs!("user_id" => 42));
//!
//! println!("{}", err);
//! // Output: loading user: connection refused
//! println!("{:#}", err);
//! // Output:
//! // loading user {user_id=42}
//! //   connection refused {host=db-primary-01}
//! ```
use smallvec::SmallVec;

pub mod cause;
pub mod error_formatter;
pub mod error_ref;
pub mod key_value;
pub mod structured_error;

pub use cause::*;
pub use error_ref::*;
pub use key_value::*;
pub use structured_error::*;

/// SmallVec-backed collection used for key/value storage.
///
/// Uses inline storage for up to 2 elements, which covers the common case of
/// a layer attaching one or two pairs.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with [`StructuredError`].
pub type StructuredResult<T> = Result<T, StructuredError>;
