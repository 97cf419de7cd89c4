//! Traversal of error chains.
//!
//! Key features:
//! - [`collect_kvs`] gathers the pairs of every structured layer, outermost
//!   first, stopping at the first opaque link.
//! - [`root_cause`] returns the deepest *structured* layer.
//! - [`unwrap`] walks every link, structured or not, down to the last one;
//!   [`is`] and [`is_same`] compare that last link against a sentinel.
//!
//! `root_cause` and `unwrap` intentionally differ: the former keeps the last
//! structured wrapper (and its pairs) for reporting, the latter reaches the
//! sentinel underneath it.

use std::error::Error;

use crate::types::{Cause, ErrorRef, KeyValues};

/// Collects the pairs of every structured layer, outermost first.
///
/// Returns an empty list for `None`. Traversal stops at the first opaque
/// link or absent cause. Duplicate keys are kept: the earlier (outer) entry
/// takes precedence, see [`KeyValues::fold_outer_wins`].
///
/// # Examples
///
/// ```
/// use structured_error::{collect_kvs, StructuredError, Value};
///
/// let e1 = StructuredError::new("e1").with_kv("name", "cats");
/// let e2 = StructuredError::wrap(e1, "e2").with_kv("name", "dogs");
///
/// let kvs = collect_kvs(Some(&e2));
/// assert_eq!(kvs.len(), 2);
/// assert_eq!(kvs.get("name"), Some(&Value::from("dogs")));
///
/// assert!(collect_kvs::<&StructuredError>(None).is_empty());
/// ```
pub fn collect_kvs<'a, E>(error: Option<E>) -> KeyValues
where
    E: Into<ErrorRef<'a>>,
{
    let mut kvs = KeyValues::new();
    let mut current = error.map(Into::into);

    while let Some(ErrorRef::Structured(s)) = current {
        kvs.extend(s.kvs().iter().cloned());
        current = s.cause_ref().map(Cause::as_error_ref);
    }
    kvs
}

/// Returns the deepest structured layer of the chain.
///
/// Descends while the current layer is structured and its cause is
/// structured too. An opaque input is returned unchanged, and a structured
/// layer whose cause is opaque or absent is returned itself.
///
/// # Examples
///
/// ```
/// use structured_error::{root_cause, StructuredError};
///
/// let inner = StructuredError::wrap_opaque(std::fmt::Error, "format");
/// let outer = StructuredError::wrap(inner, "render");
///
/// let root = root_cause(&outer);
/// assert_eq!(root.as_structured().unwrap().message(), "format");
/// ```
pub fn root_cause<'a, E>(error: E) -> ErrorRef<'a>
where
    E: Into<ErrorRef<'a>>,
{
    let mut current = error.into();

    while let ErrorRef::Structured(s) = current {
        match s.cause_ref() {
            Some(Cause::Structured(inner)) => current = ErrorRef::Structured(&**inner),
            _ => break,
        }
    }
    current
}

/// Returns the last link of the chain, descending through structured causes
/// and through [`Error::source`] of opaque errors.
///
/// The chain must be finite. Chains built from structured errors always are;
/// a third-party `source()` implementation that loops would not terminate.
///
/// # Examples
///
/// ```
/// use structured_error::{unwrap, StructuredError};
///
/// let err = StructuredError::wrap(
///     StructuredError::wrap_opaque(std::fmt::Error, "format"),
///     "render",
/// );
///
/// assert!(unwrap(&err).downcast_ref::<std::fmt::Error>().is_some());
/// ```
pub fn unwrap<'a, E>(error: E) -> ErrorRef<'a>
where
    E: Into<ErrorRef<'a>>,
{
    let mut current = error.into();

    while let Some(next) = current.cause() {
        current = next;
    }
    current
}

/// Reports whether the last link of the chain equals `target`.
///
/// # Examples
///
/// ```
/// use structured_error::{is, StructuredError};
///
/// let err = StructuredError::wrap(StructuredError::wrap_opaque(std::fmt::Error, "a"), "b");
/// assert!(is(&err, &std::fmt::Error));
/// ```
pub fn is<'a, E, T>(error: E, target: &T) -> bool
where
    E: Into<ErrorRef<'a>>,
    T: Error + PartialEq + 'static,
{
    unwrap(error).downcast_ref::<T>().is_some_and(|root| root == target)
}

/// Reports whether the last link of the chain is the very same value as
/// `target`, compared by address.
///
/// Useful for sentinels shared through an `Arc` that do not implement
/// `PartialEq`.
pub fn is_same<'a, E>(error: E, target: &(dyn Error + 'static)) -> bool
where
    E: Into<ErrorRef<'a>>,
{
    let root: *const dyn Error = unwrap(error).as_error();
    core::ptr::addr_eq(root, target as *const dyn Error)
}
