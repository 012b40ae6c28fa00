//! Error types.
//!
//! The crate has a single failure mode: meeting a `state` tag that is not one
//! of `"pending"`, `"fulfilled"` or `"rejected"`. Typed values cannot carry
//! such a tag, so the error only surfaces on untyped input, for example
//! from [`fork_value`](crate::structural::fork_value) or when parsing an
//! [`AsyncState`](crate::AsyncState).

/// A `state` tag that does not name any [`AsyncState`](crate::AsyncState).
///
/// # Examples
///
/// ```rust
/// use async_data::{AsyncState, UnknownStateError};
///
/// let error = "unknown".parse::<AsyncState>().unwrap_err();
/// assert_eq!(error, UnknownStateError::new("unknown"));
/// assert_eq!(format!("{error}"), "unknown async data state: `unknown`");
///
/// let missing = UnknownStateError::missing();
/// assert_eq!(format!("{missing}"), "unknown async data state: <missing>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownStateError {
    /// The offending tag, or `None` when the tag was absent or not a string.
    pub state: Option<String>,
}

impl UnknownStateError {
    /// Creates an error for an unrecognized tag.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
        }
    }

    /// Creates an error for input that has no string tag at all.
    pub const fn missing() -> Self {
        Self { state: None }
    }
}

impl std::fmt::Display for UnknownStateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Some(state) => write!(formatter, "unknown async data state: `{state}`"),
            None => formatter.write_str("unknown async data state: <missing>"),
        }
    }
}

impl std::error::Error for UnknownStateError {}
