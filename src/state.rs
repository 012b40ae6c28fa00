//! The discriminant of an [`AsyncData`](crate::AsyncData) value.
//!
//! [`AsyncState`] names which of the three variants a value belongs to
//! without carrying any payload. Its string forms (`"pending"`,
//! `"fulfilled"`, `"rejected"`) are the tags written to the `state` key
//! when a value crosses a serialization boundary.
//!
//! # Examples
//!
//! ```rust
//! use async_data::{AsyncData, AsyncState};
//!
//! let value: AsyncData<i32, String> = AsyncData::resolve(1);
//! assert_eq!(value.state(), AsyncState::Fulfilled);
//! assert_eq!(value.state().as_str(), "fulfilled");
//!
//! let parsed: AsyncState = "rejected".parse().unwrap();
//! assert_eq!(parsed, AsyncState::Rejected);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownStateError;

/// Which variant an [`AsyncData`](crate::AsyncData) value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AsyncState {
    /// The operation has not settled yet.
    Pending,
    /// The operation settled successfully.
    Fulfilled,
    /// The operation failed.
    Rejected,
}

impl AsyncState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Fulfilled, Self::Rejected];

    /// Returns the tag written to the `state` key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use async_data::AsyncState;
    ///
    /// assert_eq!(AsyncState::Pending.as_str(), "pending");
    /// ```
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }

    /// Looks up a state by its tag, returning `None` for anything else.
    ///
    /// Matching is exact: `"Pending"` is not a recognized tag.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == tag)
    }
}

impl fmt::Display for AsyncState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AsyncState {
    type Err = UnknownStateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_tag(tag).ok_or_else(|| UnknownStateError::new(tag))
    }
}
