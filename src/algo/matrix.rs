//! Edit-distance matrix (Wagner–Fischer)
//!
//! Fills the full `(m + 1) x (n + 1)` grid where `cell(i, j)` is the edit
//! distance between the first `i` old elements and the first `j` new ones.
//!
//! # Complexity
//!
//! - Time: O(m * n)
//! - Space: O(m * n), the whole grid is kept for backtracking
//!
//! There is deliberately no prefix/suffix shortcut: every cell is computed,
//! even for identical inputs.

use std::fmt;

/// Fully populated edit-distance grid.
///
/// Stored row-major in a single allocation; row `i` belongs to the `i`-th
/// old element, column `j` to the `j`-th new element.
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    /// Compute the grid for sequences of length `old_len` and `new_len`.
    ///
    /// `cost(i, j)` is the substitution cost between `old[i]` and `new[j]`
    /// (0-based) and must return 0 or 1.
    pub fn compute(old_len: usize, new_len: usize, mut cost: impl FnMut(usize, usize) -> usize) -> Self {
        let rows = old_len + 1;
        let cols = new_len + 1;
        let mut cells = vec![0usize; rows * cols];

        // Row 0: building new[..j] from nothing takes j insertions
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }
        // Column 0: erasing old[..i] takes i deletions
        for i in 1..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            let (done, rest) = cells.split_at_mut(i * cols);
            let prev = &done[(i - 1) * cols..];
            let row = &mut rest[..cols];

            for j in 1..cols {
                let deletion = prev[j] + 1;
                let insertion = row[j - 1] + 1;
                let substitution = prev[j - 1] + cost(i - 1, j - 1);
                row[j] = deletion.min(insertion).min(substitution);
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows (`old_len + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`new_len + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(i, j)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Cell at `(i, j)`, or `None` when out of bounds.
    #[inline]
    pub fn try_get(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    /// One row of the grid.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Edit distance between the full sequences.
    #[inline]
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.rows {
            list.entry(&self.row(i));
        }
        list.finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_matrix(old: &str, new: &str) -> DistanceMatrix {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        DistanceMatrix::compute(old.len(), new.len(), |i, j| usize::from(old[i] != new[j]))
    }

    #[test]
    fn test_empty_grid() {
        let m = DistanceMatrix::compute(0, 0, |_, _| unreachable!());
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.distance(), 0);
    }

    #[test]
    fn test_boundary_rows() {
        let m = chars_matrix("abcd", "xyz");
        for j in 0..m.cols() {
            assert_eq!(m.get(0, j), j);
        }
        for i in 0..m.rows() {
            assert_eq!(m.get(i, 0), i);
        }
    }

    #[test]
    fn test_kitten_sitting() {
        let m = chars_matrix("kitten", "sitting");
        assert_eq!(m.rows(), 7);
        assert_eq!(m.cols(), 8);
        assert_eq!(m.distance(), 3);
    }

    #[test]
    fn test_recurrence_holds() {
        let m = chars_matrix("intention", "execution");
        assert_eq!(m.distance(), 5);
        for i in 1..m.rows() {
            for j in 1..m.cols() {
                let d = m.get(i, j);
                assert!(d <= m.get(i - 1, j) + 1);
                assert!(d <= m.get(i, j - 1) + 1);
                assert!(d <= m.get(i - 1, j - 1) + 1);
            }
        }
    }

    #[test]
    fn test_identical_is_zero() {
        let m = chars_matrix("same", "same");
        assert_eq!(m.distance(), 0);
        assert_eq!(m.row(4), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_try_get_bounds() {
        let m = chars_matrix("ab", "a");
        assert_eq!(m.try_get(2, 1), Some(1));
        assert_eq!(m.try_get(3, 0), None);
        assert_eq!(m.try_get(0, 2), None);
    }

    #[test]
    fn test_debug_shows_rows() {
        let m = chars_matrix("a", "b");
        assert_eq!(format!("{m:?}"), "[[0, 1], [1, 1]]");
    }
}
