//! Prelude module for common imports.
//!
//! ```
//! use list_diff::prelude::*;
//!
//! assert_eq!(distance("flaw", "lawn"), 2);
//! ```

// Facade
pub use crate::algo::{diff, distance, DiffConfig, DiffOptions};

// Patches
pub use crate::algo::{apply_in_place, apply_patches, Patch, PatchKind, PatchList, PatchStats};

// Equality policy
pub use crate::algo::{FieldAccess, Item, KeyExtractor};

// Inputs
pub use crate::sequence::Sequence;
pub use crate::value::Value;

// Hashing
pub use crate::hash::ContentHash;

// Error
pub use crate::error::{DiffError, DiffResult};
