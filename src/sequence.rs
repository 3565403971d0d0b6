//! Input sequences for diffing
//!
//! Every diff operates on two ordered slices of one element type. The loose
//! shapes a caller may hold (a borrowed slice, an owned vector, a lone scalar,
//! a piece of text) are resolved into a [`Sequence`] at the API boundary, so
//! the algorithm never sees anything but `&[T]`.
//!
//! | Input | Sequence |
//! |-------|----------|
//! | `&[T]`, `&Vec<T>`, `&[T; N]` | `Borrowed` |
//! | `Vec<T>` | `Owned` |
//! | `&str`, `String` | `Owned` chars |
//! | `Sequence::single(x)` | `Single` |

use std::ops::Deref;

/// An ordered, immutable input sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence<'a, T> {
    /// Borrowed elements, no copy
    Borrowed(&'a [T]),
    /// Owned elements (e.g. characters decoded from text)
    Owned(Vec<T>),
    /// A single scalar treated as a one-element sequence
    Single(T),
}

impl<'a, T> Sequence<'a, T> {
    /// Wrap a single value as a one-element sequence.
    pub fn single(value: T) -> Self {
        Self::Single(value)
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Borrowed(items) => items,
            Self::Owned(items) => items,
            Self::Single(item) => std::slice::from_ref(item),
        }
    }

    /// Convert into an owned vector, cloning borrowed elements.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Self::Borrowed(items) => items.to_vec(),
            Self::Owned(items) => items,
            Self::Single(item) => vec![item],
        }
    }
}

impl<T> Default for Sequence<'_, T> {
    fn default() -> Self {
        Self::Owned(Vec::new())
    }
}

impl<T> Deref for Sequence<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for Sequence<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::Borrowed(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::Borrowed(items.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Sequence<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::Borrowed(items.as_slice())
    }
}

impl<T> From<Vec<T>> for Sequence<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Self::Owned(items)
    }
}

impl From<&str> for Sequence<'_, char> {
    fn from(text: &str) -> Self {
        Self::Owned(text.chars().collect())
    }
}

impl From<String> for Sequence<'_, char> {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl<T> FromIterator<T> for Sequence<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Owned(iter.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
