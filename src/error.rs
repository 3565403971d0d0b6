//! Error types for list-diff.
//!
//! The diff computation itself is total; errors only come from the optional
//! size guard, from fallible extractors, and from applying or decoding
//! patches.

use std::fmt;

use thiserror::Error;

use crate::algo::PatchKind;

/// Errors that can occur while diffing or applying patches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Input exceeds the configured distance-matrix budget
    #[error("diff too large: {old_len}x{new_len} sequences exceed the {limit}-cell limit")]
    TooLarge {
        /// Length of the old sequence
        old_len: usize,
        /// Length of the new sequence
        new_len: usize,
        /// Configured maximum number of matrix cells
        limit: usize,
    },

    /// A patch index does not fit the sequence it is applied to
    #[error("{kind:?} patch at index {index} is out of range for length {len}")]
    PatchOutOfRange {
        /// Kind of the offending patch
        kind: PatchKind,
        /// Index carried by the patch
        index: usize,
        /// Length of the sequence at the time of application
        len: usize,
    },

    /// Numeric patch tag outside `0..=2`
    #[error("unknown patch kind tag: {0}")]
    UnknownPatchKind(u8),

    /// A key or hash extractor failed on an element
    #[error("extractor failed: {0}")]
    Extractor(String),
}

/// Result type alias for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    /// Create a size-guard error.
    pub fn too_large(old_len: usize, new_len: usize, limit: usize) -> Self {
        Self::TooLarge {
            old_len,
            new_len,
            limit,
        }
    }

    /// Create an extractor error from any displayable failure.
    pub fn extractor(err: impl fmt::Display) -> Self {
        Self::Extractor(err.to_string())
    }

    /// Check if this error was raised by the size guard.
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLarge { .. })
    }
}
