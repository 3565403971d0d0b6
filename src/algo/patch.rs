//! Patches: the diff output and how to replay it
//!
//! # Ordering
//!
//! A patch list runs from the tail of both sequences toward the head. Every
//! `index` lives in the old sequence's index space, so applying the patches
//! in the order given onto a copy of the old sequence keeps all pending
//! indices valid:
//!
//! ```text
//! old = [a, b, c]   new = [a, x, c, d]
//! patches = [Insertion { index: 3, item: d }, Substitution { index: 1, item: x }]
//! ```
//!
//! Consumers must not reorder the list.

use crate::error::{DiffError, DiffResult};

use super::cost::is_keyed_update;
use super::descriptor::ElementDescriptor;
use super::matrix::DistanceMatrix;

// =============================================================================
// Public Types
// =============================================================================

/// Patch type tag with a stable numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PatchKind {
    /// Remove an element
    Deletion = 0,
    /// Insert a new element
    Insertion = 1,
    /// Replace an element
    Substitution = 2,
}

impl PatchKind {
    /// All kinds, in code order
    pub const ALL: [PatchKind; 3] = [Self::Deletion, Self::Insertion, Self::Substitution];

    /// Numeric tag
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PatchKind {
    type Error = DiffError;

    fn try_from(code: u8) -> DiffResult<Self> {
        match code {
            0 => Ok(Self::Deletion),
            1 => Ok(Self::Insertion),
            2 => Ok(Self::Substitution),
            other => Err(DiffError::UnknownPatchKind(other)),
        }
    }
}

/// One edit operation against the old sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Patch<T> {
    /// Remove the element at `index`
    Deletion { index: usize },
    /// Insert `item` before position `index`
    Insertion { index: usize, item: T },
    /// Replace the element at `index` with `item`
    Substitution { index: usize, item: T },
}

/// Ordered patch list (tail first).
pub type PatchList<T> = Vec<Patch<T>>;

impl<T> Patch<T> {
    /// Position in the old sequence's index space
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Deletion { index } | Self::Insertion { index, .. } | Self::Substitution { index, .. } => *index,
        }
    }

    /// Patch type tag
    #[inline]
    pub fn kind(&self) -> PatchKind {
        match self {
            Self::Deletion { .. } => PatchKind::Deletion,
            Self::Insertion { .. } => PatchKind::Insertion,
            Self::Substitution { .. } => PatchKind::Substitution,
        }
    }

    /// New value carried by insertions and substitutions
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Deletion { .. } => None,
            Self::Insertion { item, .. } | Self::Substitution { item, .. } => Some(item),
        }
    }

    /// Take the carried value
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Deletion { .. } => None,
            Self::Insertion { item, .. } | Self::Substitution { item, .. } => Some(item),
        }
    }

    /// Convert the carried value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Self::Deletion { index } => Patch::Deletion { index },
            Self::Insertion { index, item } => Patch::Insertion { index, item: f(item) },
            Self::Substitution { index, item } => Patch::Substitution { index, item: f(item) },
        }
    }
}

/// Counts per patch kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchStats {
    pub deletions: usize,
    pub insertions: usize,
    pub substitutions: usize,
}

impl PatchStats {
    /// Tally a patch list
    pub fn from_patches<T>(patches: &[Patch<T>]) -> Self {
        let mut stats = Self::default();
        for patch in patches {
            match patch.kind() {
                PatchKind::Deletion => stats.deletions += 1,
                PatchKind::Insertion => stats.insertions += 1,
                PatchKind::Substitution => stats.substitutions += 1,
            }
        }
        stats
    }

    /// Total number of patches
    pub fn total(&self) -> usize {
        self.deletions + self.insertions + self.substitutions
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// =============================================================================
// Backtracking
// =============================================================================

/// Walk the filled matrix from `(m, n)` back to `(0, 0)` and emit patches.
///
/// Tie-break at every step: Deletion, then Insertion, then Substitution,
/// then a free diagonal move. With `keyed_updates`, a free diagonal move
/// between elements that matched only by key emits a Substitution carrying
/// the new value.
pub fn build_patches<T, K, H>(
    matrix: &DistanceMatrix,
    old: &[ElementDescriptor<'_, T, K, H>],
    new: &[ElementDescriptor<'_, T, K, H>],
    keyed_updates: bool,
) -> PatchList<T>
where
    T: Clone + PartialEq,
    H: PartialEq,
{
    debug_assert_eq!(matrix.rows(), old.len() + 1);
    debug_assert_eq!(matrix.cols(), new.len() + 1);

    let mut patches = Vec::with_capacity(matrix.distance());
    let mut i = old.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        let d = matrix.get(i, j);

        if i > 0 && d == matrix.get(i - 1, j) + 1 {
            patches.push(Patch::Deletion { index: i - 1 });
            i -= 1;
            continue;
        }

        if j > 0 && d == matrix.get(i, j - 1) + 1 {
            patches.push(Patch::Insertion {
                index: i,
                item: new[j - 1].value.clone(),
            });
            j -= 1;
            continue;
        }

        // Both are positive here: an edge cell always takes one of the
        // branches above
        if d == matrix.get(i - 1, j - 1) + 1 {
            patches.push(Patch::Substitution {
                index: i - 1,
                item: new[j - 1].value.clone(),
            });
        } else if keyed_updates && is_keyed_update(&old[i - 1], &new[j - 1]) {
            patches.push(Patch::Substitution {
                index: i - 1,
                item: new[j - 1].value.clone(),
            });
        }
        i -= 1;
        j -= 1;
    }

    patches
}

// =============================================================================
// Application
// =============================================================================

/// Apply patches in order to a mutable sequence.
///
/// Fails on the first patch whose index does not fit; earlier patches stay
/// applied.
pub fn apply_in_place<T: Clone>(target: &mut Vec<T>, patches: &[Patch<T>]) -> DiffResult<()> {
    for patch in patches {
        let len = target.len();
        let out_of_range = |kind, index| DiffError::PatchOutOfRange { kind, index, len };

        match patch {
            Patch::Deletion { index } => {
                if *index >= len {
                    return Err(out_of_range(PatchKind::Deletion, *index));
                }
                target.remove(*index);
            }
            Patch::Insertion { index, item } => {
                if *index > len {
                    return Err(out_of_range(PatchKind::Insertion, *index));
                }
                target.insert(*index, item.clone());
            }
            Patch::Substitution { index, item } => {
                let slot = target
                    .get_mut(*index)
                    .ok_or_else(|| out_of_range(PatchKind::Substitution, *index))?;
                *slot = item.clone();
            }
        }
    }
    Ok(())
}

/// Apply patches to a copy of `base`.
pub fn apply_patches<T: Clone>(base: &[T], patches: &[Patch<T>]) -> DiffResult<Vec<T>> {
    let mut out = base.to_vec();
    apply_in_place(&mut out, patches)?;
    Ok(out)
}

// =============================================================================
// Tests
// =============================================================================
