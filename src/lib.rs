//! # async-data
//!
//! A small tagged union describing where an asynchronous operation is right
//! now: not settled yet, settled successfully, or failed.
//!
//! ## Overview
//!
//! UI and state-management layers usually track an async request with a
//! handful of loose fields (`loading: bool`, `data: Option<T>`,
//! `error: Option<E>`) that can drift into impossible combinations.
//! [`AsyncData<D, E>`] replaces them with one value:
//!
//! - [`AsyncData::Pending`]: not settled, maybe holding stale data
//! - [`AsyncData::Fulfilled`]: settled, data is mandatory
//! - [`AsyncData::Rejected`]: failed, error is mandatory, stale data optional
//!
//! Each variant carries an `is_loading` flag that is independent of the
//! variant, so "idle" and "retrying after a failure" are both representable.
//!
//! The crate does not run anything. It has no executor, no I/O and no
//! shared state. The caller drives transitions and stores the value.
//!
//! - **Constructors**: [`create`], [`resolve`], [`reject`]
//! - **Predicates**: [`is_pending`], [`is_fulfilled`],
//!   [`is_fulfilled_and_defined`], [`is_rejected`]
//! - **Structural recognizer**: [`is`] for untyped maps
//! - **Fork**: [`fork`] replaces the payload and keeps everything else
//!
//! ## Feature Flags
//!
//! - `serde` (default): serde support, `serde_json` integration and
//!   [`fork_value`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use async_data::prelude::*;
//!
//! let idle: AsyncData<u32, String> = create(None, false);
//! let loading: AsyncData<u32, String> = create(idle.into_data(), true);
//! assert!(is_pending(&loading) && loading.is_loading());
//!
//! let loaded: AsyncData<u32, String> = resolve(42);
//! assert!(is_fulfilled_and_defined(&loaded));
//!
//! let labelled = fork(loaded, "forty-two");
//! assert_eq!(labelled.data(), Some(&"forty-two"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the free functions and [`Defined`].
///
/// # Usage
///
/// ```rust
/// use async_data::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data::*;
    pub use crate::defined::Defined;
    pub use crate::functions::*;
    pub use crate::state::AsyncState;
    pub use crate::structural::{Structured, is};

    #[cfg(feature = "serde")]
    pub use crate::structural::fork_value;
}

pub mod data;
pub mod defined;
pub mod error;
pub mod functions;
pub mod state;
pub mod structural;

pub use data::{AsyncData, Fulfilled, Pending, Rejected};
pub use defined::Defined;
pub use error::UnknownStateError;
pub use functions::{
    create, fork, is_fulfilled, is_fulfilled_and_defined, is_pending, is_rejected, reject, resolve,
};
pub use state::AsyncState;
pub use structural::{Structured, is};

#[cfg(feature = "serde")]
pub use structural::fork_value;
