//! Deterministic content fingerprints
//!
//! Provides cross-process deterministic hashing using blake3. Useful as a
//! hash extractor when elements are large: comparing two `u64` fingerprints
//! is cheaper than comparing the records they stand for.
//!
//! ```
//! use list_diff::{DiffOptions, Value};
//! use list_diff::hash::ContentHash;
//!
//! let old = vec![Value::record([("id", 1), ("n", 2)])];
//! let new = vec![Value::record([("id", 1), ("n", 3)])];
//!
//! let patches = DiffOptions::new()
//!     .hash_by(|v: &Value| v.content_hash())
//!     .diff(&old, &new)
//!     .unwrap();
//! assert_eq!(patches.len(), 1);
//! ```

use crate::value::Value;

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string, length-prefixed so adjacent strings cannot merge
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_usize(s.len()).update(s.as_bytes())
    }

    /// Update with a one-byte type tag
    #[inline]
    pub fn update_tag(self, tag: u8) -> Self {
        self.update(&[tag])
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with a usize value (as little-endian u64)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update_u64(v as u64)
    }

    /// Finish and return the hash as u64
    ///
    /// Takes the first 8 bytes of blake3 output as little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ContentHash
// =============================================================================

/// Values with a deterministic content fingerprint.
pub trait ContentHash {
    /// Feed this value into a hasher
    fn hash_into(&self, hasher: StableHasher) -> StableHasher;

    /// Fingerprint of this value alone
    fn content_hash(&self) -> u64 {
        self.hash_into(StableHasher::new()).finish()
    }
}

impl ContentHash for str {
    fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        hasher.update_str(self)
    }
}

impl ContentHash for String {
    fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        hasher.update_str(self)
    }
}

impl ContentHash for Value {
    fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        match self {
            Value::Null => hasher.update_tag(0),
            Value::Bool(b) => hasher.update_tag(1).update_tag(u8::from(*b)),
            Value::Int(n) => hasher.update_tag(2).update(&n.to_le_bytes()),
            Value::Float(f) => hasher.update_tag(3).update_u64(f.to_bits()),
            Value::Str(s) => hasher.update_tag(4).update_str(s),
            Value::List(items) => items
                .iter()
                .fold(hasher.update_tag(5).update_usize(items.len()), |h, item| item.hash_into(h)),
            Value::Record(fields) => fields
                .iter()
                .fold(hasher.update_tag(6).update_usize(fields.len()), |h, (name, value)| {
                    value.hash_into(h.update_str(name))
                }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
