//! Shallow recognition of untyped async data.
//!
//! Values that crossed a serialization boundary (IPC to a UI thread, storage,
//! framework state) arrive as plain maps. [`is`] is a cheap guard that says
//! whether such a map is shaped like an [`AsyncData`](crate::AsyncData): it
//! has a `state` key and an `isLoading` key. It does not look at the value
//! of `state` or at any payload field, and extra keys are fine. Callers who
//! need full validation deserialize into `AsyncData<D, E>` instead.
//!
//! [`fork_value`] is the untyped counterpart of
//! [`AsyncData::fork`](crate::AsyncData::fork). Because nothing guarantees the
//! input carries a real tag, it is the one operation that can fail.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use async_data::is;
//!
//! let mut shape: HashMap<String, String> = HashMap::new();
//! shape.insert("state".to_string(), "anything".to_string());
//! assert!(!is(&shape));
//!
//! shape.insert("isLoading".to_string(), "yes".to_string());
//! assert!(is(&shape));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Key holding the variant tag.
pub const STATE_KEY: &str = "state";
/// Key holding the loading flag.
pub const IS_LOADING_KEY: &str = "isLoading";
/// Key holding the payload.
pub const DATA_KEY: &str = "data";
/// Key holding the error of a rejected value.
pub const ERROR_KEY: &str = "error";

/// Untyped, keyed data that [`is`] can probe.
pub trait Structured {
    /// Returns `true` if `key` is present, whatever its value.
    fn has_key(&self, key: &str) -> bool;
}

impl<T: Structured + ?Sized> Structured for &T {
    #[inline]
    fn has_key(&self, key: &str) -> bool {
        (**self).has_key(key)
    }
}

impl<V, S: BuildHasher> Structured for HashMap<String, V, S> {
    #[inline]
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> Structured for BTreeMap<String, V> {
    #[inline]
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

#[cfg(feature = "serde")]
impl Structured for serde_json::Map<String, serde_json::Value> {
    #[inline]
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

#[cfg(feature = "serde")]
impl Structured for serde_json::Value {
    /// Only objects have keys.
    #[inline]
    fn has_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains_key(key))
    }
}

/// Returns `true` if `input` has both a `state` key and an `isLoading` key.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use async_data::is;
///
/// let forged: BTreeMap<String, &str> = [("state", "unknown"), ("isLoading", "no")]
///     .into_iter()
///     .map(|(key, value)| (key.to_string(), value))
///     .collect();
/// assert!(is(&forged));
///
/// let partial: BTreeMap<String, i32> = [("state".to_string(), 1), ("data".to_string(), 1)]
///     .into_iter()
///     .collect();
/// assert!(!is(&partial));
/// ```
#[inline]
pub fn is<S: Structured + ?Sized>(input: &S) -> bool {
    input.has_key(STATE_KEY) && input.has_key(IS_LOADING_KEY)
}

/// Replaces the `data` key of an untyped async data object.
///
/// Every other key of `source` (including unknown ones) is copied as is and
/// `data` is set to `new_data`, whatever its type.
///
/// # Errors
///
/// Returns [`UnknownStateError`](crate::UnknownStateError) if `state` is
/// missing, is not a string, or is not one of the three recognized tags.
///
/// # Examples
///
/// ```rust
/// use async_data::fork_value;
/// use serde_json::json;
///
/// let source = json!({ "state": "rejected", "isLoading": true, "error": "boom" });
/// let forked = fork_value(&source, json!([1, 2])).unwrap();
/// assert_eq!(
///     forked,
///     json!({ "state": "rejected", "isLoading": true, "error": "boom", "data": [1, 2] })
/// );
///
/// let forged = json!({ "state": "unknown", "isLoading": false });
/// assert!(fork_value(&forged, json!("x")).is_err());
/// ```
#[cfg(feature = "serde")]
pub fn fork_value(
    source: &serde_json::Value,
    new_data: serde_json::Value,
) -> Result<serde_json::Value, crate::UnknownStateError> {
    let object = source
        .as_object()
        .ok_or_else(crate::UnknownStateError::missing)?;

    let tag = object
        .get(STATE_KEY)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(crate::UnknownStateError::missing)?;
    tag.parse::<crate::AsyncState>()?;

    let mut forked = object.clone();
    forked.insert(DATA_KEY.to_string(), new_data);
    Ok(serde_json::Value::Object(forked))
}
