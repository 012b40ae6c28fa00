//! The "no value" sentinel behind
//! [`is_fulfilled_and_defined`](crate::AsyncData::is_fulfilled_and_defined).
//!
//! A fulfilled value always carries a payload, but that payload may itself be
//! the absent sentinel: `None`, `()` or a JSON `null`. [`Defined`] tells the
//! two apart. Only the sentinel counts as undefined; an empty string, zero or
//! an empty collection is a perfectly defined payload, which is what lets a UI
//! distinguish "loaded an empty list" from "loaded nothing".

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Payloads that can be the absent sentinel.
///
/// # Examples
///
/// ```rust
/// use async_data::Defined;
///
/// assert!(Some(0).is_defined());
/// assert!(!None::<i32>.is_defined());
/// assert!(String::new().is_defined());
/// assert!(!().is_defined());
/// ```
pub trait Defined {
    /// Returns `false` only for the absent sentinel.
    fn is_defined(&self) -> bool;
}

impl<T> Defined for Option<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        self.is_some()
    }
}

impl Defined for () {
    #[inline]
    fn is_defined(&self) -> bool {
        false
    }
}

#[cfg(feature = "serde")]
impl Defined for serde_json::Value {
    #[inline]
    fn is_defined(&self) -> bool {
        !self.is_null()
    }
}

impl<T: Defined + ?Sized> Defined for &T {
    #[inline]
    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

impl<T: Defined + ?Sized> Defined for Box<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

impl<T: Defined + ?Sized> Defined for Rc<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

impl<T: Defined + ?Sized> Defined for Arc<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

macro_rules! impl_always_defined {
    ($($type:ty),* $(,)?) => {
        $(
            impl Defined for $type {
                #[inline]
                fn is_defined(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_always_defined!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl Defined for Cow<'_, str> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T> Defined for [T] {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Defined for [T; N] {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T> Defined for Vec<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T> Defined for VecDeque<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T, S> Defined for HashSet<T, S> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<T> Defined for BTreeSet<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<K, V, S> Defined for HashMap<K, V, S> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}

impl<K, V> Defined for BTreeMap<K, V> {
    #[inline]
    fn is_defined(&self) -> bool {
        true
    }
}
