//! Key/value pairs attached to structured errors.
//!
//! A [`KeyValues`] is an ordered list of [`KeyValue`] entries. Order is
//! insertion order, and when a chain is collected the outermost layer's
//! entries come first. Consumers folding the list into a map must treat the
//! first occurrence of a key as authoritative, which is what
//! [`KeyValues::fold_outer_wins`] and [`KeyValues::get`] do.

use core::fmt;
use std::borrow::Cow;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::types::ErrorVec;

/// Key of a key/value pair.
pub type Key = Cow<'static, str>;

/// Value of a key/value pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Value {
    Str(Cow<'static, str>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Returns the string slice if this is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&'static str> for Value {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Value {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_value_from!(Int as i64: i8, i16, i32, i64, isize);
impl_value_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_value_from!(Float as f64: f32, f64);

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    key: Key,
    value: Value,
}

impl KeyValue {
    #[inline]
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        Self { key: key.into(), value: value.into() }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Splits the pair into its key and value.
    #[inline]
    pub fn into_parts(self) -> (Key, Value) {
        (self.key, self.value)
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue
where
    K: Into<Key>,
    V: Into<Value>,
{
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Returned by [`KeyValues::from_flat`] when the item count is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KvParityError {
    len: usize,
}

impl KvParityError {
    /// Number of items that were supplied.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.len
    }
}

impl fmt::Display for KvParityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "odd number of key/value items ({}): trailing key has no value", self.len)
    }
}

impl std::error::Error for KvParityError {}

/// Ordered key/value pairs, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValues(ErrorVec<KeyValue>);

impl KeyValues {
    #[inline]
    pub fn new() -> Self {
        Self(ErrorVec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ErrorVec::with_capacity(capacity))
    }

    /// Builds pairs from an alternating `key, value, key, value, ...` list.
    ///
    /// Keys are rendered with their `Display` form. An odd item count is
    /// rejected rather than silently keeping an unpaired trailing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use structured_error::{KeyValues, Value};
    ///
    /// let kvs = KeyValues::from_flat([Value::from("a"), Value::from(1)]).unwrap();
    /// assert_eq!(kvs.get("a"), Some(&Value::Int(1)));
    ///
    /// assert!(KeyValues::from_flat([Value::from("a")]).is_err());
    /// ```
    pub fn from_flat<I>(items: I) -> Result<Self, KvParityError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        if items.len() % 2 != 0 {
            return Err(KvParityError { len: items.len() });
        }

        let mut kvs = Self::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            let key: Key = match key {
                Value::Str(s) => s,
                other => Cow::Owned(other.to_string()),
            };
            kvs.0.push(KeyValue { key, value });
        }
        Ok(kvs)
    }

    /// Appends a pair.
    #[inline]
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.0.push(KeyValue::new(key, value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, KeyValue> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[KeyValue] {
        &self.0
    }

    /// Returns the first value recorded for `key`.
    ///
    /// On a collected chain the first entry belongs to the outermost layer.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|kv| kv.key() == key).map(KeyValue::value)
    }

    /// Drops every pair whose key was already seen earlier in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use structured_error::{kvs, Value};
    ///
    /// let folded = kvs!("name" => "dogs", "name" => "cats", "age" => 3).fold_outer_wins();
    /// assert_eq!(folded.len(), 2);
    /// assert_eq!(folded.get("name"), Some(&Value::from("dogs")));
    /// ```
    pub fn fold_outer_wins(&self) -> KeyValues {
        let mut seen = HashSet::with_capacity(self.len());
        self.0.iter().filter(|kv| seen.insert(kv.key())).cloned().collect()
    }
}

impl core::ops::Deref for KeyValues {
    type Target = [KeyValue];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for KeyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", kv)?;
        }
        Ok(())
    }
}

impl FromIterator<KeyValue> for KeyValues {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<KeyValue> for KeyValues {
    #[inline]
    fn extend<I: IntoIterator<Item = KeyValue>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for KeyValues {
    type Item = KeyValue;
    type IntoIter = smallvec::IntoIter<[KeyValue; 2]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyValues {
    type Item = &'a KeyValue;
    type IntoIter = core::slice::Iter<'a, KeyValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<KeyValue>> for KeyValues {
    #[inline]
    fn from(pairs: Vec<KeyValue>) -> Self {
        Self(ErrorVec::from_vec(pairs))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for KeyValues
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().map(KeyValue::from).collect()
    }
}

#[cfg(feature = "serde")]
impl Serialize for KeyValues {
    /// Serializes as a map, keeping the outermost value of duplicated keys.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let folded = self.fold_outer_wins();
        let mut map = serializer.serialize_map(Some(folded.len()))?;
        for kv in folded.iter() {
            map.serialize_entry(kv.key(), kv.value())?;
        }
        map.end()
    }
}
