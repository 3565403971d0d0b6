//! Substitution cost policy
//!
//! Binary cost: 0 when two descriptors denote the same logical item, 1
//! otherwise. Sameness is decided by fingerprint equality first; composite
//! values additionally match when both carry equal keys.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use compact_str::CompactString;

use super::descriptor::ElementDescriptor;

/// Cost of a diagonal step between matching elements.
pub const MATCH: usize = 0;

/// Cost of any single edit.
pub const EDIT: usize = 1;

// =============================================================================
// Item classification
// =============================================================================

/// Sequence element classification.
///
/// Only composite (record-like) elements can be matched by key. The default
/// is composite, so a user record type only needs `impl Item for MyRecord {}`.
/// Scalars opt out.
pub trait Item {
    /// Whether this value is composite
    fn is_composite(&self) -> bool {
        true
    }
}

macro_rules! impl_scalar_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Item for $ty {
                #[inline]
                fn is_composite(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_scalar_item!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, CompactString,
);

impl<T> Item for Vec<T> {}

impl<T, const N: usize> Item for [T; N] {}

impl<K, V, S> Item for HashMap<K, V, S> {}

impl<K, V> Item for BTreeMap<K, V> {}

impl<T: Item + ?Sized> Item for &T {
    #[inline]
    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    #[inline]
    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Item + ?Sized> Item for Rc<T> {
    #[inline]
    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Item + ?Sized> Item for Arc<T> {
    #[inline]
    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Item> Item for Option<T> {
    #[inline]
    fn is_composite(&self) -> bool {
        self.as_ref().is_some_and(Item::is_composite)
    }
}

// =============================================================================
// Cost
// =============================================================================

/// Substitution cost between two descriptors: [`MATCH`] or [`EDIT`].
///
/// 1. Equal fingerprints match.
/// 2. Two composite values match when both have keys and the keys are equal.
///    A missing key on either side never matches.
/// 3. Everything else is an edit.
#[inline]
pub fn cost<T, K, H>(old: &ElementDescriptor<'_, T, K, H>, new: &ElementDescriptor<'_, T, K, H>) -> usize
where
    T: Item + PartialEq,
    K: PartialEq,
    H: PartialEq,
{
    if old.hash == new.hash {
        return MATCH;
    }

    if old.value.is_composite() && new.value.is_composite() {
        if let (Some(old_key), Some(new_key)) = (&old.key, &new.key) {
            if old_key == new_key {
                return MATCH;
            }
        }
    }

    EDIT
}

/// Whether two descriptors matched only through their keys.
///
/// Such pairs are the same logical item with updated content.
#[inline]
pub fn is_keyed_update<T, K, H>(
    old: &ElementDescriptor<'_, T, K, H>,
    new: &ElementDescriptor<'_, T, K, H>,
) -> bool
where
    T: PartialEq,
    H: PartialEq,
{
    old.hash != new.hash
}

// =============================================================================
// Tests
// =============================================================================
