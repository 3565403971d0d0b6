//! Sequence Diff Facade
//!
//! Composes the pipeline for one call:
//!
//! ```text
//! old/new: Sequence<T>
//!       |  build_descriptors (key + hash extractors)
//!       v
//! ElementDescriptor[]  --cost-->  DistanceMatrix::compute
//!       |
//!       v
//! build_patches (backtrack)  ->  PatchList<T>
//! ```
//!
//! All intermediate data lives in a `DiffContext` owned by the call, so
//! concurrent calls and calls made from inside an extractor never interfere.
//!
//! # Complexity
//!
//! - Time: O(m * n)
//! - Space: O(m * n) for the matrix, O(m + n) for descriptors

use compact_str::CompactString;
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult};
use crate::sequence::Sequence;

use super::cost::{cost, Item};
use super::descriptor::{boxed, build_descriptors, plain_descriptors, ElementDescriptor, FieldAccess, HashFn, KeyExtractor};
use super::matrix::DistanceMatrix;
use super::patch::{build_patches, PatchList};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for diff limits and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Maximum number of matrix cells, `(old_len + 1) * (new_len + 1)`.
    /// Default: unbounded
    pub max_cells: Option<usize>,
    /// Emit a Substitution for elements that matched by key but whose
    /// content changed.
    /// Default: true
    pub keyed_updates: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_cells: None,
            keyed_updates: true,
        }
    }
}

impl DiffConfig {
    /// Create config with custom settings.
    pub fn new(max_cells: Option<usize>, keyed_updates: bool) -> Self {
        Self {
            max_cells,
            keyed_updates,
        }
    }

    /// Create config that rejects inputs above `max_cells` matrix cells.
    pub fn bounded(max_cells: usize) -> Self {
        Self {
            max_cells: Some(max_cells),
            ..Self::default()
        }
    }

    /// Create config that reproduces the bare algorithm: no size guard and no
    /// patch for key-matched elements.
    pub fn reference() -> Self {
        Self {
            max_cells: None,
            keyed_updates: false,
        }
    }

    /// Check input lengths against the size guard.
    pub fn check(&self, old_len: usize, new_len: usize) -> DiffResult<()> {
        let Some(limit) = self.max_cells else {
            return Ok(());
        };

        let cells = old_len
            .checked_add(1)
            .zip(new_len.checked_add(1))
            .and_then(|(rows, cols)| rows.checked_mul(cols));
        match cells {
            Some(cells) if cells <= limit => Ok(()),
            _ => {
                debug!(old_len, new_len, limit, "diff rejected by size guard");
                Err(DiffError::too_large(old_len, new_len, limit))
            }
        }
    }
}

// =============================================================================
// Per-call context
// =============================================================================

/// Everything one diff call computes, owned by that call.
struct DiffContext<'a, T, K, H> {
    old: Vec<ElementDescriptor<'a, T, K, H>>,
    new: Vec<ElementDescriptor<'a, T, K, H>>,
    matrix: DistanceMatrix,
}

impl<'a, T, K, H> DiffContext<'a, T, K, H>
where
    T: Item + PartialEq,
    K: PartialEq,
    H: PartialEq,
{
    fn new(options: &DiffOptions<'_, T, K, H>, old: &'a [T], new: &'a [T]) -> DiffResult<Self> {
        // Resolve the key extractor once; every element goes through it
        let key = options.key.as_ref().map(KeyExtractor::resolve);

        let old = build_descriptors(old, key.as_ref(), options.hash.as_ref())?;
        let new = build_descriptors(new, key.as_ref(), options.hash.as_ref())?;
        Ok(Self::from_descriptors(old, new))
    }

    fn from_descriptors(old: Vec<ElementDescriptor<'a, T, K, H>>, new: Vec<ElementDescriptor<'a, T, K, H>>) -> Self {
        let matrix = DistanceMatrix::compute(old.len(), new.len(), |i, j| cost(&old[i], &new[j]));
        Self { old, new, matrix }
    }

    fn into_patches(self, keyed_updates: bool) -> PatchList<T>
    where
        T: Clone,
    {
        let patches = build_patches(&self.matrix, &self.old, &self.new, keyed_updates);
        debug!(
            old_len = self.old.len(),
            new_len = self.new.len(),
            distance = self.matrix.distance(),
            patches = patches.len(),
            "sequence diff computed"
        );
        patches
    }
}

impl<'a, T> DiffContext<'a, T, (), ()>
where
    T: Item + PartialEq,
{
    /// Context without extractors; cannot fail.
    fn plain(old: &'a [T], new: &'a [T]) -> Self {
        Self::from_descriptors(plain_descriptors(old), plain_descriptors(new))
    }
}

// =============================================================================
// Options
// =============================================================================

/// Equality policy and limits for a diff.
///
/// `K` is the key type, `H` the hash type; both are `()` until an extractor
/// is set.
///
/// ```
/// use list_diff::{DiffOptions, Patch, Value};
///
/// let old = vec![Value::record([("id", 1), ("n", 1)])];
/// let new = vec![Value::record([("id", 1), ("n", 2)])];
///
/// let patches = DiffOptions::<Value>::new().key_field("id").diff(&old, &new).unwrap();
/// assert_eq!(patches, vec![Patch::Substitution { index: 0, item: new[0].clone() }]);
/// ```
pub struct DiffOptions<'f, T, K = (), H = ()> {
    key: Option<KeyExtractor<'f, T, K>>,
    hash: Option<HashFn<'f, T, H>>,
    config: DiffConfig,
}

impl<T> DiffOptions<'_, T> {
    /// Options without extractors and with the default config.
    pub fn new() -> Self {
        Self {
            key: None,
            hash: None,
            config: DiffConfig::default(),
        }
    }
}

impl<T> Default for DiffOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, H> std::fmt::Debug for DiffOptions<'_, T, K, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffOptions")
            .field("key", &self.key)
            .field("hash", &self.hash.as_ref().map(|_| ".."))
            .field("config", &self.config)
            .finish()
    }
}

impl<'f, T, K, H> DiffOptions<'f, T, K, H> {
    /// Set the key extractor.
    pub fn key<K2>(self, key: KeyExtractor<'f, T, K2>) -> DiffOptions<'f, T, K2, H> {
        DiffOptions {
            key: Some(key),
            hash: self.hash,
            config: self.config,
        }
    }

    /// Key elements by a function. Every element gets a key, so two
    /// elements whose function returns the same value always correspond;
    /// use [`key_by_opt`](Self::key_by_opt) when some elements have none.
    pub fn key_by<K2>(self, f: impl Fn(&T) -> K2 + Send + Sync + 'f) -> DiffOptions<'f, T, K2, H> {
        self.key(KeyExtractor::func(f))
    }

    /// Key elements by a function returning `None` for elements without a
    /// key. A keyless element never matches by key.
    pub fn key_by_opt<K2>(self, f: impl Fn(&T) -> Option<K2> + Send + Sync + 'f) -> DiffOptions<'f, T, K2, H> {
        self.key(KeyExtractor::func_opt(f))
    }

    /// Key elements by a fallible function. The first failure aborts the
    /// diff with [`DiffError::Extractor`].
    pub fn try_key_by<K2, E: std::fmt::Display>(
        self,
        f: impl Fn(&T) -> Result<Option<K2>, E> + Send + Sync + 'f,
    ) -> DiffOptions<'f, T, K2, H> {
        self.key(KeyExtractor::try_func(f))
    }

    /// Key record-like elements by a named field.
    pub fn key_field(self, name: impl Into<CompactString>) -> DiffOptions<'f, T, T::Field, H>
    where
        T: FieldAccess,
    {
        self.key(KeyExtractor::field(name))
    }

    /// Compare elements by a derived value instead of the element itself.
    pub fn hash_by<H2>(self, f: impl Fn(&T) -> H2 + Send + Sync + 'f) -> DiffOptions<'f, T, K, H2> {
        self.with_hash(boxed(move |value: &T| Ok(f(value))))
    }

    /// Compare elements by a derived value that can fail to compute. The
    /// first failure aborts the diff with [`DiffError::Extractor`].
    pub fn try_hash_by<H2, E: std::fmt::Display>(
        self,
        f: impl Fn(&T) -> Result<H2, E> + Send + Sync + 'f,
    ) -> DiffOptions<'f, T, K, H2> {
        self.with_hash(boxed(move |value: &T| f(value).map_err(DiffError::extractor)))
    }

    fn with_hash<H2>(self, hash: HashFn<'f, T, H2>) -> DiffOptions<'f, T, K, H2> {
        DiffOptions {
            key: self.key,
            hash: Some(hash),
            config: self.config,
        }
    }

    /// Replace the config.
    pub fn config(mut self, config: DiffConfig) -> Self {
        self.config = config;
        self
    }

    /// Current config.
    pub fn diff_config(&self) -> &DiffConfig {
        &self.config
    }
}

impl<T, K, H> DiffOptions<'_, T, K, H>
where
    T: Item + PartialEq,
    K: PartialEq,
    H: PartialEq,
{
    /// Compute the patch list turning `old` into `new`.
    pub fn diff<'a>(
        &self,
        old: impl Into<Sequence<'a, T>>,
        new: impl Into<Sequence<'a, T>>,
    ) -> DiffResult<PatchList<T>>
    where
        T: Clone + 'a,
    {
        let old = old.into();
        let new = new.into();
        self.diff_slices(&old, &new)
    }

    /// [`diff`](Self::diff) on plain slices.
    pub fn diff_slices(&self, old: &[T], new: &[T]) -> DiffResult<PatchList<T>>
    where
        T: Clone,
    {
        self.config.check(old.len(), new.len())?;
        Ok(DiffContext::new(self, old, new)?.into_patches(self.config.keyed_updates))
    }

    /// Edit distance between `old` and `new` under these options.
    pub fn distance<'a>(&self, old: impl Into<Sequence<'a, T>>, new: impl Into<Sequence<'a, T>>) -> DiffResult<usize>
    where
        T: 'a,
    {
        Ok(self.matrix(old, new)?.distance())
    }

    /// The filled distance matrix, for inspection.
    pub fn matrix<'a>(
        &self,
        old: impl Into<Sequence<'a, T>>,
        new: impl Into<Sequence<'a, T>>,
    ) -> DiffResult<DistanceMatrix>
    where
        T: 'a,
    {
        let old = old.into();
        let new = new.into();
        self.config.check(old.len(), new.len())?;
        Ok(DiffContext::new(self, &old, &new)?.matrix)
    }

    /// Diff many independent pairs with the same options.
    ///
    /// Runs on the rayon pool with the `parallel` feature, sequentially
    /// otherwise. Results keep the order of `pairs`.
    pub fn diff_all<S>(&self, pairs: &[(S, S)]) -> Vec<DiffResult<PatchList<T>>>
    where
        S: AsRef<[T]> + Sync,
        T: Clone + Send + Sync,
    {
        trace!(pairs = pairs.len(), "batch diff");

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(old, new)| self.diff_slices(old.as_ref(), new.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(old, new)| self.diff_slices(old.as_ref(), new.as_ref()))
                .collect()
        }
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the patch list turning `old` into `new`, comparing elements by
/// value.
///
/// Equality is `PartialEq`, so a value that is not equal to itself (a float
/// NaN) never matches and always costs a Substitution, even against an
/// identical sequence. Compare such values through
/// [`DiffOptions::hash_by`], e.g. `hash_by(|x: &f64| x.to_bits())`.
///
/// ```
/// use list_diff::{apply_patches, diff};
///
/// let patches = diff("kitten", "sitting");
/// assert_eq!(patches.len(), 3);
///
/// let old: Vec<char> = "kitten".chars().collect();
/// let rebuilt: String = apply_patches(&old, &patches).unwrap().into_iter().collect();
/// assert_eq!(rebuilt, "sitting");
/// ```
pub fn diff<'a, T>(old: impl Into<Sequence<'a, T>>, new: impl Into<Sequence<'a, T>>) -> PatchList<T>
where
    T: Item + PartialEq + Clone + 'a,
{
    let old = old.into();
    let new = new.into();
    DiffContext::plain(&old, &new).into_patches(DiffConfig::default().keyed_updates)
}

/// Edit distance between `old` and `new`, comparing elements by value.
pub fn distance<'a, T>(old: impl Into<Sequence<'a, T>>, new: impl Into<Sequence<'a, T>>) -> usize
where
    T: Item + PartialEq + 'a,
{
    let old = old.into();
    let new = new.into();
    DiffContext::plain(&old, &new).matrix.distance()
}

// =============================================================================
// Tests
// =============================================================================
