//! Element descriptors: comparison-ready views of raw sequence elements
//!
//! Each element is normalized once per call into an [`ElementDescriptor`]
//! carrying the value, an optional identity key, and the fingerprint used for
//! equality. Extractors are caller-supplied; when absent the key is `None` and
//! the fingerprint is the value itself.

use std::fmt;

use compact_str::CompactString;

use crate::error::{DiffError, DiffResult};

// =============================================================================
// Field access
// =============================================================================

/// Record-like values that expose named fields.
///
/// Backs the [`KeyExtractor::Field`] shorthand: `key_field("id")` reads the
/// `id` field off every element. A missing field yields no key.
pub trait FieldAccess {
    /// Type of a field value
    type Field;

    /// Read a field by name
    fn field(&self, name: &str) -> Option<Self::Field>;
}

impl<V: Clone, S: std::hash::BuildHasher> FieldAccess for std::collections::HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone> FieldAccess for std::collections::BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

// =============================================================================
// Extractors
// =============================================================================

/// Resolved key extractor: `None` means the element has no key.
pub type KeyFn<'f, T, K> = Box<dyn Fn(&T) -> DiffResult<Option<K>> + Send + Sync + 'f>;

/// Boxed hash extractor.
pub type HashFn<'f, T, H> = Box<dyn Fn(&T) -> DiffResult<H> + Send + Sync + 'f>;

/// Box a fallible extractor.
pub(crate) fn boxed<'f, T, X>(
    f: impl Fn(&T) -> DiffResult<X> + Send + Sync + 'f,
) -> Box<dyn Fn(&T) -> DiffResult<X> + Send + Sync + 'f> {
    Box::new(f)
}

/// How to derive an identity key from an element.
pub enum KeyExtractor<'f, T, K> {
    /// Arbitrary function of the element
    Func(KeyFn<'f, T, K>),
    /// Named field of a record-like element
    Field {
        /// Field name
        name: CompactString,
        /// Accessor captured when the extractor was built
        read: fn(&T, &str) -> Option<K>,
    },
}

impl<'f, T, K> KeyExtractor<'f, T, K> {
    /// Key by a function. Every element gets a key.
    pub fn func(f: impl Fn(&T) -> K + Send + Sync + 'f) -> Self {
        Self::Func(boxed(move |value: &T| Ok(Some(f(value)))))
    }

    /// Key by a function that may report "no key" with `None`.
    pub fn func_opt(f: impl Fn(&T) -> Option<K> + Send + Sync + 'f) -> Self {
        Self::Func(boxed(move |value: &T| Ok(f(value))))
    }

    /// Key by a function that can fail; a failure aborts the diff.
    pub fn try_func<E: fmt::Display>(f: impl Fn(&T) -> Result<Option<K>, E> + Send + Sync + 'f) -> Self {
        Self::Func(boxed(move |value: &T| f(value).map_err(DiffError::extractor)))
    }

    /// Key by a named field.
    pub fn field(name: impl Into<CompactString>) -> Self
    where
        T: FieldAccess<Field = K>,
    {
        Self::Field {
            name: name.into(),
            read: |value, name| value.field(name),
        }
    }

    /// Resolve into one uniform callable for the duration of a call.
    pub fn resolve(&self) -> KeyFn<'_, T, K> {
        match self {
            Self::Func(f) => boxed(move |value: &T| f(value)),
            Self::Field { name, read } => {
                let read = *read;
                boxed(move |value: &T| Ok(read(value, name)))
            }
        }
    }
}

impl<T, K> fmt::Debug for KeyExtractor<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("KeyExtractor::Func(..)"),
            Self::Field { name, .. } => write!(f, "KeyExtractor::Field({name:?})"),
        }
    }
}

// =============================================================================
// Descriptors
// =============================================================================

/// Value used for equality comparison.
///
/// Defaults to the element itself; a hash extractor replaces it with a
/// derived value. Both descriptors of one call always hold the same variant.
#[derive(Debug, Clone, Copy)]
pub enum Fingerprint<'a, T, H> {
    /// The raw element
    Value(&'a T),
    /// Output of the hash extractor
    Derived(H),
}

impl<T: PartialEq, H: PartialEq> PartialEq for Fingerprint<'_, T, H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Derived(a), Self::Derived(b)) => a == b,
            _ => false,
        }
    }
}

/// Normalized per-element record.
#[derive(Debug, Clone)]
pub struct ElementDescriptor<'a, T, K, H> {
    /// The raw element
    pub value: &'a T,
    /// Identity key, if a key extractor produced one
    pub key: Option<K>,
    /// Equality fingerprint
    pub hash: Fingerprint<'a, T, H>,
}

/// Build one descriptor per element, preserving order.
///
/// Stops at the first extractor failure; no partial list is returned.
pub fn build_descriptors<'a, T, K, H>(
    items: &'a [T],
    key: Option<&KeyFn<'_, T, K>>,
    hash: Option<&HashFn<'_, T, H>>,
) -> DiffResult<Vec<ElementDescriptor<'a, T, K, H>>> {
    items
        .iter()
        .map(|value| {
            let key = match key {
                Some(f) => f(value)?,
                None => None,
            };
            let hash = match hash {
                Some(f) => Fingerprint::Derived(f(value)?),
                None => Fingerprint::Value(value),
            };
            Ok(ElementDescriptor { value, key, hash })
        })
        .collect()
}

/// Descriptors without extractors: no keys, each element is its own
/// fingerprint.
pub fn plain_descriptors<T>(items: &[T]) -> Vec<ElementDescriptor<'_, T, (), ()>> {
    items
        .iter()
        .map(|value| ElementDescriptor {
            value,
            key: None,
            hash: Fingerprint::Value(value),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
