//! Algorithm implementations for sequence diffing.
//!
//! - `descriptor`: element normalization (key + hash extraction)
//! - `cost`: binary substitution cost policy
//! - `matrix`: Wagner–Fischer distance matrix
//! - `patch`: backtracking patch builder and patch application
//! - `diff`: facade composing the above per call

mod cost;
mod descriptor;
mod diff;
mod matrix;
mod patch;

pub use cost::{cost, is_keyed_update, Item, EDIT, MATCH};
pub use descriptor::{
    build_descriptors, plain_descriptors, ElementDescriptor, FieldAccess, Fingerprint, HashFn, KeyExtractor, KeyFn,
};
pub use diff::{diff, distance, DiffConfig, DiffOptions};
pub use matrix::DistanceMatrix;
pub use patch::{apply_in_place, apply_patches, build_patches, Patch, PatchKind, PatchList, PatchStats};
