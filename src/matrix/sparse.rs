//! Coordinate-keyed sparse matrix storage

use std::collections::{btree_map, BTreeMap};
use std::fmt;

use num_traits::PrimInt;

use crate::error::{Error, Result};

/// Element types a [`SparseMatrix`] can hold: primitive integers that can
/// be printed in the canonical text format.
pub trait Element: PrimInt + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: PrimInt + fmt::Display + fmt::Debug {}

/// A sparse integer matrix storing only its nonzero entries
///
/// Entries live in an ordered map keyed by `(row, col)`:
/// - a value of zero is never stored; absence means implicit zero
/// - iteration is always in ascending `(row, col)` order
///
/// The declared shape is fixed at construction. Coordinates passed to
/// [`get_element`](Self::get_element) and [`set_element`](Self::set_element)
/// are not checked against it.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    /// Declared number of rows
    n_rows: i64,

    /// Declared number of columns
    n_cols: i64,

    /// `entries[(r, c)]` = nonzero value at (`r`, `c`)
    entries: BTreeMap<(i64, i64), T>,
}

/// The matrix type read and written by the command-line driver
pub type IntMatrix = SparseMatrix<i64>;

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given shape
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is negative.
    pub fn new(n_rows: i64, n_cols: i64) -> Result<Self> {
        if n_rows < 0 || n_cols < 0 {
            return Err(Error::InvalidDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        Ok(Self::with_shape(n_rows, n_cols))
    }

    /// Creates an empty matrix without validating the shape.
    pub(crate) fn with_shape(n_rows: i64, n_cols: i64) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: i64) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.set_element(i, i, T::one());
        }
        Ok(matrix)
    }

    /// Builds a matrix from `(row, col, value)` triples
    ///
    /// Zero values are dropped and later duplicates overwrite earlier ones,
    /// exactly as repeated calls to [`set_element`](Self::set_element) would.
    pub fn from_entries<I>(n_rows: i64, n_cols: i64, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols)?;
        for (row, col, value) in entries {
            matrix.set_element(row, col, value);
        }
        Ok(matrix)
    }

    /// Returns the value at (`row`, `col`), or zero if nothing is stored there
    pub fn get_element(&self, row: i64, col: i64) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Stores `value` at (`row`, `col`); a zero value removes the entry
    pub fn set_element(&mut self, row: i64, col: i64, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    pub fn n_rows(&self) -> i64 {
        self.n_rows
    }

    pub fn n_cols(&self) -> i64 {
        self.n_cols
    }

    /// Returns the declared shape as `(n_rows, n_cols)`
    pub fn shape(&self) -> (i64, i64) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are stored, i.e. the matrix is all zeros
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over stored entries in ascending `(row, col)` order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.entries.iter(),
        }
    }

    /// Iterates over every coordinate stored in `self` or `other`, once each,
    /// in ascending order.
    pub(crate) fn union_keys<'a>(
        &'a self,
        other: &'a Self,
    ) -> impl Iterator<Item = (i64, i64)> + 'a {
        let mut left = self.entries.keys().copied().peekable();
        let mut right = other.entries.keys().copied().peekable();
        std::iter::from_fn(move || match (left.peek(), right.peek()) {
            (Some(&l), Some(&r)) if l == r => {
                left.next();
                right.next()
            }
            (Some(&l), Some(&r)) if l < r => left.next(),
            (Some(_), Some(_)) => right.next(),
            (Some(_), None) => left.next(),
            (None, _) => right.next(),
        })
    }
}

/// Iterator over the stored entries of a [`SparseMatrix`]
///
/// Each item is `((row, col), value)`.
pub struct Iter<'a, T> {
    iter: btree_map::Iter<'a, (i64, i64), T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = ((i64, i64), T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&key, &value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Element> IntoIterator for &'a SparseMatrix<T> {
    type Item = ((i64, i64), T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_entries = 10;
        if !self.is_empty() {
            writeln!(f, "  content sample:")?;
            for ((row, col), value) in self.iter().take(max_entries) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, value)?;
            }
            if self.nnz() > max_entries {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = IntMatrix::new(3, 4).unwrap();

        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        assert!(matches!(
            IntMatrix::new(-1, 2),
            Err(Error::InvalidDimension { rows: -1, cols: 2 })
        ));
        assert!(matches!(
            IntMatrix::new(2, -5),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(IntMatrix::identity(-3).is_err());
    }

    #[test]
    fn test_zero_sized_matrix() {
        let matrix = IntMatrix::new(0, 0).unwrap();
        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.get_element(0, 0), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = IntMatrix::new(2, 2).unwrap();
        matrix.set_element(0, 1, 5);
        matrix.set_element(0, 1, -7);

        assert_eq!(matrix.get_element(0, 1), -7);
        assert_eq!(matrix.get_element(1, 0), 0);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = IntMatrix::new(2, 2).unwrap();
        matrix.set_element(1, 1, 9);
        matrix.set_element(1, 1, 0);
        // Removing an absent entry is a no-op
        matrix.set_element(0, 0, 0);

        assert_eq!(matrix.get_element(1, 1), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_out_of_shape_coordinates_are_stored() {
        let mut matrix = IntMatrix::new(1, 1).unwrap();
        matrix.set_element(5, -2, 3);

        assert_eq!(matrix.get_element(5, -2), 3);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let matrix =
            IntMatrix::from_entries(3, 3, vec![(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 0)])
                .unwrap();

        let entries: Vec<_> = matrix.iter().collect();
        assert_eq!(entries, vec![((0, 1), 3), ((0, 2), 2), ((2, 0), 1)]);
    }

    #[test]
    fn test_identity() {
        let identity = SparseMatrix::<i32>::identity(3).unwrap();

        assert_eq!(identity.shape(), (3, 3));
        assert_eq!(identity.nnz(), 3);
        for i in 0..3 {
            assert_eq!(identity.get_element(i, i), 1);
        }
    }

    #[test]
    fn test_union_keys() {
        let a = IntMatrix::from_entries(3, 3, vec![(0, 0, 1), (1, 2, 1), (2, 2, 1)]).unwrap();
        let b = IntMatrix::from_entries(3, 3, vec![(0, 1, 1), (1, 2, 4), (2, 0, 1)]).unwrap();

        let keys: Vec<_> = a.union_keys(&b).collect();
        assert_eq!(keys, vec![(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)]);
    }
}
