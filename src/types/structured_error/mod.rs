//! Structured error with a message, an optional cause and key/value pairs.
//!
//! This module provides [`StructuredError`]:
//! - a message describing what happened at this layer
//! - an optional [`Cause`], structured or opaque
//! - [`KeyValues`] attached to this layer for structured logging
//!
//! Wrapping never merges pairs; each layer keeps its own and
//! [`collect_kvs`](crate::collect_kvs) gathers them outermost first.

use std::error::Error;

use crate::chain;
use crate::traits::Structured;
use crate::types::error_formatter::ErrorFormatBuilder;
use crate::types::{Cause, Chain, ErrorRef, Key, KeyValues, Value};

mod traits;

/// Error carrying a message, an optional cause and its own key/value pairs.
///
/// # Examples
///
/// ```
/// use structured_error::{kvs, StructuredError};
///
/// let e1 = StructuredError::new("e1").with_kv("name", "cats");
/// let e2 = StructuredError::wrap(e1, "e2").with_kvs(kvs!("name" => "dogs"));
///
/// assert_eq!(e2.to_string(), "e2: e1");
/// assert_eq!(e2.collect_kvs().get("name").unwrap().as_str(), Some("dogs"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub(crate) message: String,
    pub(crate) cause: Option<Cause>,
    pub(crate) kvs: KeyValues,
}

impl StructuredError {
    /// Creates an error without a cause.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None, kvs: KeyValues::new() }
    }

    /// Creates an error wrapping `cause`.
    ///
    /// A [`StructuredError`] cause keeps key/value traversal going; an opaque
    /// cause (see [`Cause::opaque`]) ends it.
    #[inline]
    pub fn wrap<C>(cause: C, message: impl Into<String>) -> Self
    where
        C: Into<Cause>,
    {
        Self { message: message.into(), cause: Some(cause.into()), kvs: KeyValues::new() }
    }

    /// Creates an error wrapping any error, see [`Cause::opaque`].
    ///
    /// A [`StructuredError`] passed here keeps its pairs in the chain.
    #[inline]
    pub fn wrap_opaque<E>(error: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap(Cause::opaque(error), message)
    }

    /// Creates an error wrapping `cause` if present; otherwise equivalent to
    /// [`StructuredError::new`].
    #[inline]
    pub fn wrap_optional<C>(cause: Option<C>, message: impl Into<String>) -> Self
    where
        C: Into<Cause>,
    {
        Self { message: message.into(), cause: cause.map(Into::into), kvs: KeyValues::new() }
    }

    /// Adds one key/value pair to this layer.
    #[inline]
    pub fn with_kv<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.kvs.push(key, value);
        self
    }

    /// Adds several key/value pairs to this layer, keeping their order.
    #[inline]
    pub fn with_kvs<I>(mut self, kvs: I) -> Self
    where
        I: Into<KeyValues>,
    {
        self.kvs.extend(kvs.into());
        self
    }

    /// The message of this layer alone.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The immediate cause.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The pairs supplied to this layer; the cause's pairs are not included.
    #[inline]
    pub fn kvs(&self) -> &KeyValues {
        &self.kvs
    }

    /// Views this error as the first link of its chain.
    #[inline]
    pub fn as_error_ref(&self) -> ErrorRef<'_> {
        ErrorRef::Structured(self)
    }

    /// Iterates the chain from this error down to the last cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        self.as_error_ref().chain()
    }

    /// Pairs of every structured layer, outermost first.
    #[inline]
    pub fn collect_kvs(&self) -> KeyValues {
        chain::collect_kvs(Some(self))
    }

    /// The deepest structured layer. See [`chain::root_cause`].
    #[inline]
    pub fn root_cause(&self) -> ErrorRef<'_> {
        chain::root_cause(self)
    }

    /// The last link of the chain. See [`chain::unwrap`].
    #[inline]
    pub fn innermost(&self) -> ErrorRef<'_> {
        chain::unwrap(self)
    }

    /// Returns a builder for customizing the chain rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }
}

impl Structured for StructuredError {
    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn kvs(&self) -> &KeyValues {
        &self.kvs
    }

    #[inline]
    fn cause_ref(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}
