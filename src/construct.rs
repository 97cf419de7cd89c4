//! Free-function constructors.
//!
//! These mirror [`StructuredError::new`] and [`StructuredError::wrap`] but
//! take the layer's pairs up front.

use crate::types::{Cause, KeyValues, StructuredError};

/// Creates an error without a cause.
///
/// # Examples
///
/// ```
/// use structured_error::{kvs, new};
///
/// let err = new("hello", kvs!("a" => 1));
/// assert_eq!(err.to_string(), "hello");
/// assert_eq!(err.kvs().len(), 1);
/// ```
#[inline]
pub fn new<M, K>(message: M, kvs: K) -> StructuredError
where
    M: Into<String>,
    K: Into<KeyValues>,
{
    StructuredError::new(message).with_kvs(kvs)
}

/// Creates an error wrapping `cause`.
///
/// # Examples
///
/// ```
/// use structured_error::{kvs, new, wrap};
///
/// let e1 = new("m1", kvs!("k" => "v"));
/// let e2 = wrap(e1, "m2", kvs!("b" => 2));
/// let e3 = wrap(e2, "m3", kvs!("c" => 3));
///
/// assert_eq!(e3.to_string(), "m3: m2: m1");
/// assert_eq!(e3.kvs().len(), 1);
/// ```
#[inline]
pub fn wrap<C, M, K>(cause: C, message: M, kvs: K) -> StructuredError
where
    C: Into<Cause>,
    M: Into<String>,
    K: Into<KeyValues>,
{
    StructuredError::wrap(cause, message).with_kvs(kvs)
}

/// Creates an error wrapping `cause` when present, or a cause-less error
/// otherwise.
#[inline]
pub fn wrap_optional<C, M, K>(cause: Option<C>, message: M, kvs: K) -> StructuredError
where
    C: Into<Cause>,
    M: Into<String>,
    K: Into<KeyValues>,
{
    StructuredError::wrap_optional(cause, message).with_kvs(kvs)
}
