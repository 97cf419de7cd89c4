//! Extension traits for wrapping the error of a `Result`.
//!
//! This module provides [`ResultExt`] for results failing with any
//! third-party error and [`StructuredResultExt`] for results that already
//! fail with a [`StructuredError`].
//!
//! # Examples
//!
//! ```
//! use structured_error::kvs;
//! use structured_error::traits::{ResultExt, StructuredResultExt};
//!
//! fn read_config(path: &'static str) -> structured_error::StructuredResult<String> {
//!     std::fs::read_to_string(path).wrap_err("reading config", kvs!("path" => path))
//! }
//!
//! let err = read_config("/definitely/missing.toml")
//!     .wrap("loading settings", kvs!("profile" => "dev"))
//!     .unwrap_err();
//!
//! assert_eq!(err.collect_kvs().len(), 2);
//! ```

use std::error::Error;

use crate::types::{KeyValues, StructuredError};

/// Wraps a third-party error as the opaque cause of a [`StructuredError`].
pub trait ResultExt<T> {
    /// Wraps the error with a message and this layer's pairs.
    fn wrap_err<M, K>(self, message: M, kvs: K) -> Result<T, StructuredError>
    where
        M: Into<String>,
        K: Into<KeyValues>;

    /// Like [`ResultExt::wrap_err`], but builds the message and pairs only on
    /// the error path.
    fn wrap_err_with<F, M>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> (M, KeyValues),
        M: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn wrap_err<M, K>(self, message: M, kvs: K) -> Result<T, StructuredError>
    where
        M: Into<String>,
        K: Into<KeyValues>,
    {
        self.map_err(|e| StructuredError::wrap_opaque(e, message).with_kvs(kvs))
    }

    #[inline]
    fn wrap_err_with<F, M>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> (M, KeyValues),
        M: Into<String>,
    {
        self.map_err(|e| {
            let (message, kvs) = f();
            StructuredError::wrap_opaque(e, message).with_kvs(kvs)
        })
    }
}

/// Adds a structured layer on top of an existing [`StructuredError`], so its
/// pairs stay reachable by [`collect_kvs`](crate::collect_kvs).
pub trait StructuredResultExt<T> {
    /// Wraps the error with a message and this layer's pairs.
    fn wrap<M, K>(self, message: M, kvs: K) -> Self
    where
        M: Into<String>,
        K: Into<KeyValues>;

    /// Like [`StructuredResultExt::wrap`], but builds the message and pairs
    /// only on the error path.
    fn wrap_with<F, M>(self, f: F) -> Self
    where
        F: FnOnce() -> (M, KeyValues),
        M: Into<String>;
}

impl<T> StructuredResultExt<T> for Result<T, StructuredError> {
    #[inline]
    fn wrap<M, K>(self, message: M, kvs: K) -> Self
    where
        M: Into<String>,
        K: Into<KeyValues>,
    {
        self.map_err(|e| StructuredError::wrap(e, message).with_kvs(kvs))
    }

    #[inline]
    fn wrap_with<F, M>(self, f: F) -> Self
    where
        F: FnOnce() -> (M, KeyValues),
        M: Into<String>,
    {
        self.map_err(|e| {
            let (message, kvs) = f();
            StructuredError::wrap(e, message).with_kvs(kvs)
        })
    }
}
