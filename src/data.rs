//! `AsyncData` type - the lifecycle of an asynchronous value.
//!
//! This module provides [`AsyncData<D, E>`], a closed tagged union over three
//! variants:
//!
//! - [`Pending`]: the operation has not settled, optionally holding stale data
//! - [`Fulfilled`]: the operation settled successfully, data is mandatory
//! - [`Rejected`]: the operation failed, error is mandatory and stale data may
//!   be retained
//!
//! Every variant also carries an `is_loading` flag. The flag is independent of
//! the variant: an idle value is pending and not loading, and a retry after a
//! failure is rejected and loading.
//!
//! Values are never transitioned in place. The caller builds a new value on
//! every settlement and replaces the old one wholesale.
//!
//! # Examples
//!
//! ```rust
//! use async_data::AsyncData;
//!
//! let mut slot: AsyncData<Vec<String>, String> = AsyncData::create(None, true);
//! assert!(slot.is_pending());
//! assert!(slot.is_loading());
//!
//! slot = AsyncData::resolve(vec!["alice".to_string()]);
//!
//! match &slot {
//!     AsyncData::Pending(_) => println!("loading..."),
//!     AsyncData::Fulfilled(fulfilled) => println!("{} users", fulfilled.data.len()),
//!     AsyncData::Rejected(rejected) => println!("failed: {}", rejected.error),
//! }
//! ```

use crate::defined::Defined;
use crate::state::AsyncState;

/// The pending variant: the operation has not produced a result yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Pending<D> {
    /// Data from a previous cycle, if any.
    #[cfg_attr(
        feature = "serde",
        serde(
            default = "absent",
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_present",
            bound(deserialize = "D: serde::Deserialize<'de>")
        )
    )]
    pub data: Option<D>,
    /// Whether an operation is currently in flight.
    pub is_loading: bool,
}

/// The fulfilled variant: the operation completed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Fulfilled<D> {
    /// The result of the operation.
    pub data: D,
    /// Whether a refresh is currently in flight.
    pub is_loading: bool,
}

/// The rejected variant: the operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Rejected<D, E> {
    /// Data retained from before the failure, if any.
    #[cfg_attr(
        feature = "serde",
        serde(
            default = "absent",
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_present",
            bound(deserialize = "D: serde::Deserialize<'de>")
        )
    )]
    pub data: Option<D>,
    /// The failure, opaque to this crate.
    pub error: E,
    /// Whether a retry is currently in flight.
    pub is_loading: bool,
}

// A missing `data` key is the only way to get `None`. A present key, even
// `null`, is the payload itself, so `Some(None)` and `Some(Value::Null)`
// survive a round trip.
#[cfg(feature = "serde")]
const fn absent<D>() -> Option<D> {
    None
}

#[cfg(feature = "serde")]
fn deserialize_present<'de, De, D>(deserializer: De) -> Result<Option<D>, De::Error>
where
    De: serde::Deserializer<'de>,
    D: serde::Deserialize<'de>,
{
    D::deserialize(deserializer).map(Some)
}

/// The state of an asynchronous value.
///
/// # Type Parameters
///
/// * `D` - The payload produced by the operation
/// * `E` - The error produced when the operation fails
///
/// # Narrowing
///
/// The predicates ([`is_pending`](Self::is_pending) and friends) only answer
/// yes or no. To get at the fields of a particular variant, match on the enum
/// or use the `as_*`/`into_*` accessors, which return the variant struct only
/// when the value holds it:
///
/// ```rust
/// use async_data::AsyncData;
///
/// let value: AsyncData<i32, String> = AsyncData::reject(Some(1), "boom".to_string());
///
/// if let Some(rejected) = value.as_rejected() {
///     assert_eq!(rejected.error, "boom");
///     assert_eq!(rejected.data, Some(1));
/// }
/// assert!(value.as_fulfilled().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "state", rename_all = "lowercase")
)]
pub enum AsyncData<D, E> {
    /// Not settled yet.
    Pending(Pending<D>),
    /// Settled successfully.
    Fulfilled(Fulfilled<D>),
    /// Settled with an error.
    Rejected(Rejected<D, E>),
}

impl<D, E> AsyncData<D, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a pending value.
    ///
    /// `data` is whatever the caller already has (stale data from a previous
    /// cycle, or `None`). Pass `is_loading = false` for an idle value that has
    /// not requested anything yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, String> = AsyncData::create(None, true);
    /// assert!(value.is_pending());
    /// assert!(value.is_loading());
    /// assert_eq!(value.data(), None);
    /// ```
    #[inline]
    pub const fn create(data: Option<D>, is_loading: bool) -> Self {
        Self::Pending(Pending { data, is_loading })
    }

    /// Creates a fulfilled value that is not loading.
    ///
    /// The payload is required:
    ///
    /// ```compile_fail
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, String> = AsyncData::resolve();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, String> = AsyncData::resolve(1);
    /// assert!(value.is_fulfilled());
    /// assert!(!value.is_loading());
    /// assert_eq!(value.data(), Some(&1));
    /// ```
    #[inline]
    pub const fn resolve(data: D) -> Self {
        Self::Fulfilled(Fulfilled {
            data,
            is_loading: false,
        })
    }

    /// Creates a rejected value that is not loading.
    ///
    /// `data` may keep the last good payload alongside the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, &str> = AsyncData::reject(Some(7), "timeout");
    /// assert!(value.is_rejected());
    /// assert_eq!(value.error(), Some(&"timeout"));
    /// assert_eq!(value.data(), Some(&7));
    /// ```
    #[inline]
    pub const fn reject(data: Option<D>, error: E) -> Self {
        Self::Rejected(Rejected {
            data,
            error,
            is_loading: false,
        })
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a pending value.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns `true` if this is a fulfilled value.
    #[inline]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    /// Returns `true` if this is a rejected value.
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns `true` if this is a fulfilled value whose payload is not the
    /// absent sentinel.
    ///
    /// "Defined" is the literal notion of [`Defined`]: `None`, `()` and JSON
    /// `null` are undefined, while empty strings, zero and empty collections
    /// are defined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let loaded_nothing: AsyncData<Option<Vec<i32>>, String> = AsyncData::resolve(None);
    /// assert!(loaded_nothing.is_fulfilled());
    /// assert!(!loaded_nothing.is_fulfilled_and_defined());
    ///
    /// let loaded_empty: AsyncData<Option<Vec<i32>>, String> = AsyncData::resolve(Some(vec![]));
    /// assert!(loaded_empty.is_fulfilled_and_defined());
    /// ```
    #[inline]
    pub fn is_fulfilled_and_defined(&self) -> bool
    where
        D: Defined,
    {
        match self {
            Self::Fulfilled(fulfilled) => fulfilled.data.is_defined(),
            Self::Pending(_) | Self::Rejected(_) => false,
        }
    }

    // =========================================================================
    // Common Fields
    // =========================================================================

    /// Returns the discriminant of this value.
    #[inline]
    pub const fn state(&self) -> AsyncState {
        match self {
            Self::Pending(_) => AsyncState::Pending,
            Self::Fulfilled(_) => AsyncState::Fulfilled,
            Self::Rejected(_) => AsyncState::Rejected,
        }
    }

    /// Returns whether an operation is in flight, whatever the variant.
    #[inline]
    pub const fn is_loading(&self) -> bool {
        match self {
            Self::Pending(pending) => pending.is_loading,
            Self::Fulfilled(fulfilled) => fulfilled.is_loading,
            Self::Rejected(rejected) => rejected.is_loading,
        }
    }

    /// Returns a reference to the payload, if the value holds one.
    #[inline]
    pub const fn data(&self) -> Option<&D> {
        match self {
            Self::Pending(Pending { data, .. }) | Self::Rejected(Rejected { data, .. }) => {
                data.as_ref()
            }
            Self::Fulfilled(fulfilled) => Some(&fulfilled.data),
        }
    }

    /// Returns a reference to the error if this is a rejected value.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Rejected(rejected) => Some(&rejected.error),
            Self::Pending(_) | Self::Fulfilled(_) => None,
        }
    }

    /// Consumes the value and returns its payload, if any.
    #[inline]
    pub fn into_data(self) -> Option<D> {
        match self {
            Self::Pending(Pending { data, .. }) | Self::Rejected(Rejected { data, .. }) => data,
            Self::Fulfilled(fulfilled) => Some(fulfilled.data),
        }
    }

    // =========================================================================
    // Narrowing (Non-consuming)
    // =========================================================================

    /// Returns the pending variant, if this is one.
    #[inline]
    pub const fn as_pending(&self) -> Option<&Pending<D>> {
        match self {
            Self::Pending(pending) => Some(pending),
            Self::Fulfilled(_) | Self::Rejected(_) => None,
        }
    }

    /// Returns the fulfilled variant, if this is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<&str, ()> = AsyncData::resolve("done");
    /// let fulfilled = value.as_fulfilled().unwrap();
    /// assert_eq!(fulfilled.data, "done");
    /// ```
    #[inline]
    pub const fn as_fulfilled(&self) -> Option<&Fulfilled<D>> {
        match self {
            Self::Fulfilled(fulfilled) => Some(fulfilled),
            Self::Pending(_) | Self::Rejected(_) => None,
        }
    }

    /// Returns the rejected variant, if this is one.
    #[inline]
    pub const fn as_rejected(&self) -> Option<&Rejected<D, E>> {
        match self {
            Self::Rejected(rejected) => Some(rejected),
            Self::Pending(_) | Self::Fulfilled(_) => None,
        }
    }

    /// Returns the pending variant mutably, if this is one.
    #[inline]
    pub const fn as_pending_mut(&mut self) -> Option<&mut Pending<D>> {
        match self {
            Self::Pending(pending) => Some(pending),
            Self::Fulfilled(_) | Self::Rejected(_) => None,
        }
    }

    /// Returns the fulfilled variant mutably, if this is one.
    #[inline]
    pub const fn as_fulfilled_mut(&mut self) -> Option<&mut Fulfilled<D>> {
        match self {
            Self::Fulfilled(fulfilled) => Some(fulfilled),
            Self::Pending(_) | Self::Rejected(_) => None,
        }
    }

    /// Returns the rejected variant mutably, if this is one.
    #[inline]
    pub const fn as_rejected_mut(&mut self) -> Option<&mut Rejected<D, E>> {
        match self {
            Self::Rejected(rejected) => Some(rejected),
            Self::Pending(_) | Self::Fulfilled(_) => None,
        }
    }

    // =========================================================================
    // Narrowing (Consuming)
    // =========================================================================

    /// Converts into the pending variant, or gives the value back.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if this is not a pending value.
    #[inline]
    pub fn into_pending(self) -> Result<Pending<D>, Self> {
        match self {
            Self::Pending(pending) => Ok(pending),
            other => Err(other),
        }
    }

    /// Converts into the fulfilled variant, or gives the value back.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if this is not a fulfilled value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, String> = AsyncData::create(Some(1), true);
    /// let value = value.into_fulfilled().unwrap_err();
    /// assert!(value.is_pending());
    /// ```
    #[inline]
    pub fn into_fulfilled(self) -> Result<Fulfilled<D>, Self> {
        match self {
            Self::Fulfilled(fulfilled) => Ok(fulfilled),
            other => Err(other),
        }
    }

    /// Converts into the rejected variant, or gives the value back.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if this is not a rejected value.
    #[inline]
    pub fn into_rejected(self) -> Result<Rejected<D, E>, Self> {
        match self {
            Self::Rejected(rejected) => Ok(rejected),
            other => Err(other),
        }
    }

    // =========================================================================
    // Fork
    // =========================================================================

    /// Replaces the payload, keeping the variant, `is_loading` and the error.
    ///
    /// The payload is replaced unconditionally. For the variants with optional
    /// data the new payload becomes `Some(new_data)`. The error of a rejected
    /// value is moved into the result as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncData;
    ///
    /// let value: AsyncData<i32, String> = AsyncData::resolve(1);
    /// let forked = value.fork("forked");
    /// assert_eq!(forked, AsyncData::resolve("forked"));
    ///
    /// let failed: AsyncData<i32, &str> = AsyncData::reject(None, "boom");
    /// let forked = failed.fork('x');
    /// assert_eq!(forked.error(), Some(&"boom"));
    /// assert_eq!(forked.data(), Some(&'x'));
    /// ```
    #[inline]
    pub fn fork<T>(self, new_data: T) -> AsyncData<T, E> {
        match self {
            Self::Pending(Pending { is_loading, .. }) => AsyncData::Pending(Pending {
                data: Some(new_data),
                is_loading,
            }),
            Self::Fulfilled(Fulfilled { is_loading, .. }) => AsyncData::Fulfilled(Fulfilled {
                data: new_data,
                is_loading,
            }),
            Self::Rejected(Rejected {
                error, is_loading, ..
            }) => AsyncData::Rejected(Rejected {
                data: Some(new_data),
                error,
                is_loading,
            }),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<D, E> Default for AsyncData<D, E> {
    /// The idle value: pending, no data, not loading.
    #[inline]
    fn default() -> Self {
        Self::create(None, false)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<D, E> From<Pending<D>> for AsyncData<D, E> {
    #[inline]
    fn from(pending: Pending<D>) -> Self {
        Self::Pending(pending)
    }
}

impl<D, E> From<Fulfilled<D>> for AsyncData<D, E> {
    #[inline]
    fn from(fulfilled: Fulfilled<D>) -> Self {
        Self::Fulfilled(fulfilled)
    }
}

impl<D, E> From<Rejected<D, E>> for AsyncData<D, E> {
    /// Builds a rejected value from its fields.
    ///
    /// This is how a retry in flight is expressed:
    ///
    /// ```rust
    /// use async_data::{AsyncData, Rejected};
    ///
    /// let retrying: AsyncData<i32, &str> = Rejected {
    ///     data: None,
    ///     error: "timeout",
    ///     is_loading: true,
    /// }
    /// .into();
    /// assert!(retrying.is_rejected());
    /// assert!(retrying.is_loading());
    /// ```
    #[inline]
    fn from(rejected: Rejected<D, E>) -> Self {
        Self::Rejected(rejected)
    }
}

static_assertions::assert_impl_all!(AsyncData<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(AsyncData<u8, u8>: Copy);
static_assertions::assert_not_impl_any!(AsyncData<std::rc::Rc<i32>, String>: Send, Sync);
