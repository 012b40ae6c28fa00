//! Free-function surface over [`AsyncData`].
//!
//! These mirror the inherent methods, for callers that prefer
//! `async_data::resolve(x)` over `AsyncData::resolve(x)` or that probe
//! optional slots. The predicates accept anything convertible into
//! `Option<&AsyncData<D, E>>`, so both `&value` and `slot.as_ref()` work and an
//! empty slot simply answers `false`.
//!
//! # Examples
//!
//! ```rust
//! use async_data::{AsyncData, is_fulfilled, resolve};
//!
//! let mut slot: Option<AsyncData<i32, String>> = None;
//! assert!(!is_fulfilled(slot.as_ref()));
//!
//! slot = Some(resolve(1));
//! assert!(is_fulfilled(slot.as_ref()));
//! assert!(is_fulfilled(&resolve::<i32, String>(2)));
//! ```

use crate::data::AsyncData;
use crate::defined::Defined;

/// Creates a pending value. See [`AsyncData::create`].
#[inline]
pub const fn create<D, E>(data: Option<D>, is_loading: bool) -> AsyncData<D, E> {
    AsyncData::create(data, is_loading)
}

/// Creates a fulfilled value. See [`AsyncData::resolve`].
#[inline]
pub const fn resolve<D, E>(data: D) -> AsyncData<D, E> {
    AsyncData::resolve(data)
}

/// Creates a rejected value. See [`AsyncData::reject`].
#[inline]
pub const fn reject<D, E>(data: Option<D>, error: E) -> AsyncData<D, E> {
    AsyncData::reject(data, error)
}

/// Returns `true` if `value` is present and pending.
#[inline]
pub fn is_pending<'a, D: 'a, E: 'a>(value: impl Into<Option<&'a AsyncData<D, E>>>) -> bool {
    value.into().is_some_and(AsyncData::is_pending)
}

/// Returns `true` if `value` is present and fulfilled.
///
/// # Examples
///
/// ```rust
/// use async_data::{AsyncData, is_fulfilled};
///
/// assert!(!is_fulfilled::<i32, ()>(None));
/// assert!(is_fulfilled(&AsyncData::<i32, ()>::resolve(1)));
/// ```
#[inline]
pub fn is_fulfilled<'a, D: 'a, E: 'a>(value: impl Into<Option<&'a AsyncData<D, E>>>) -> bool {
    value.into().is_some_and(AsyncData::is_fulfilled)
}

/// Returns `true` if `value` is present, fulfilled, and its payload is
/// [`Defined`].
#[inline]
pub fn is_fulfilled_and_defined<'a, D, E>(value: impl Into<Option<&'a AsyncData<D, E>>>) -> bool
where
    D: Defined + 'a,
    E: 'a,
{
    value.into().is_some_and(AsyncData::is_fulfilled_and_defined)
}

/// Returns `true` if `value` is present and rejected.
#[inline]
pub fn is_rejected<'a, D: 'a, E: 'a>(value: impl Into<Option<&'a AsyncData<D, E>>>) -> bool {
    value.into().is_some_and(AsyncData::is_rejected)
}

/// Replaces the payload of `source`. See [`AsyncData::fork`].
#[inline]
pub fn fork<D, E, T>(source: AsyncData<D, E>, new_data: T) -> AsyncData<T, E> {
    source.fork(new_data)
}
