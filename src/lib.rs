//! list-diff - Minimal edit scripts between ordered sequences
//!
//! ## Core Concepts
//!
//! **Wagner–Fischer edit distance**: a full `(m + 1) x (n + 1)` distance
//! matrix is computed and backtracked into a patch list of Deletions,
//! Insertions and Substitutions.
//!
//! **Pluggable equality**: elements compare by value by default. A hash
//! extractor swaps in a derived comparison value; a key extractor lets
//! composite records match by identity even when their content changed.
//!
//! ## Modules
//! - `algo`: descriptors, cost policy, distance matrix, patch builder, facade
//! - `sequence`: input variants (slices, owned vectors, scalars, text)
//! - `value`: dynamic record-like values
//! - `hash`: deterministic content fingerprints
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use list_diff::{apply_patches, diff, Patch};
//!
//! let old = [1, 2, 3];
//! let new = [1, 3, 4];
//!
//! let patches = diff(&old, &new);
//! assert_eq!(
//!     patches,
//!     vec![
//!         Patch::Insertion { index: 3, item: 4 },
//!         Patch::Deletion { index: 1 },
//!     ]
//! );
//! assert_eq!(apply_patches(&old, &patches).unwrap(), new);
//! ```
//!
//! Patches run from the tail toward the head and index into the old
//! sequence; apply them in the order given.

// =============================================================================
// Core modules
// =============================================================================

/// Algorithms: descriptors, cost, matrix, patches, facade
pub mod algo;

/// Input sequences
pub mod sequence;

/// Dynamic values
pub mod value;

/// Deterministic content hashing
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Facade
pub use algo::{diff, distance, DiffConfig, DiffOptions};

// Patches
pub use algo::{apply_in_place, apply_patches, Patch, PatchKind, PatchList, PatchStats};

// Equality policy
pub use algo::{DistanceMatrix, FieldAccess, Item, KeyExtractor};

// Inputs
pub use sequence::Sequence;
pub use value::Value;

// Hashing
pub use hash::{ContentHash, StableHasher};

// Error types
pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================
