//! Macros for building key/value pairs and structured errors.
//!
//! - [`macro@crate::kvs`] builds a [`KeyValues`](crate::types::KeyValues) from
//!   `key => value` pairs, so every key always has a value.
//! - [`macro@crate::structured`] creates or wraps a
//!   [`StructuredError`](crate::types::StructuredError) with a formatted
//!   message and optional pairs.
//!
//! # Examples
//!
//! ```
//! use structured_error::{kvs, structured};
//!
//! let shard = 3;
//! let inner = structured!("shard {} unavailable", shard; "shard" => shard);
//! let err = structured!(wrap inner, "query failed"; "table" => "users", "retry" => false);
//!
//! assert_eq!(err.to_string(), "query failed: shard 3 unavailable");
//! assert_eq!(err.collect_kvs(), kvs!("table" => "users", "retry" => false, "shard" => 3));
//! ```

/// Builds a [`KeyValues`](crate::types::KeyValues) from `key => value` pairs.
///
/// Keys convert into [`Key`](crate::types::Key), values into
/// [`Value`](crate::types::Value).
///
/// # Examples
///
/// ```
/// use structured_error::kvs;
///
/// let kvs = kvs!("user_id" => 42, "region" => "eu-west-1");
/// assert_eq!(kvs.len(), 2);
/// assert_eq!(kvs.to_string(), "user_id=42 region=eu-west-1");
///
/// assert!(kvs!().is_empty());
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        $crate::types::KeyValues::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut kvs = $crate::types::KeyValues::new();
        $( kvs.push($key, $value); )+
        kvs
    }};
}

/// Creates a [`StructuredError`](crate::types::StructuredError).
///
/// # Syntax
///
/// - `structured!("fmt", args...)` - new error with a formatted message
/// - `structured!("fmt", args...; k => v, ...)` - same, with pairs
/// - `structured!(wrap cause, "fmt", args...)` - wraps `cause` (anything
///   convertible into [`Cause`](crate::types::Cause))
/// - `structured!(wrap cause, "fmt", args...; k => v, ...)` - same, with pairs
#[macro_export]
macro_rules! structured {
    (wrap $cause:expr, $fmt:literal $(, $arg:expr)* $(; $($key:expr => $value:expr),+ $(,)?)?) => {
        $crate::types::StructuredError::wrap($cause, format!($fmt $(, $arg)*))
            $(.with_kvs($crate::kvs!($($key => $value),+)))?
    };
    ($fmt:literal $(, $arg:expr)* $(; $($key:expr => $value:expr),+ $(,)?)?) => {
        $crate::types::StructuredError::new(format!($fmt $(, $arg)*))
            $(.with_kvs($crate::kvs!($($key => $value),+)))?
    };
}
