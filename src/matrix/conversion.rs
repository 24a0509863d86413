//! Conversion between sparse and dense representations

use ndarray::{Array2, ArrayView2};

use crate::error::{Error, Result};
use crate::matrix::sparse::{Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Expands this matrix into a dense `ndarray` array
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if any stored coordinate lies outside the
    /// declared shape, [`Error::InvalidDimension`] if the shape is negative,
    /// [`Error::ShapeTooLarge`] if the dense buffer cannot be allocated.
    pub fn to_dense(&self) -> Result<Array2<T>> {
        let (n_rows, n_cols) = self.extents()?;
        self.check_bounds()?;

        let too_large = || self.shape_too_large();
        let len = n_rows.checked_mul(n_cols).ok_or_else(too_large)?;
        let data = self.try_filled_vec(len, T::zero())?;
        let mut dense =
            Array2::from_shape_vec((n_rows, n_cols), data).map_err(|_| too_large())?;

        for ((row, col), value) in self.iter() {
            dense[[row as usize, col as usize]] = value;
        }
        Ok(dense)
    }

    /// Builds a sparse matrix from a dense array, dropping zeros
    pub fn from_dense(dense: ArrayView2<'_, T>) -> Result<Self> {
        let (n_rows, n_cols) = dense.dim();
        let mut matrix = Self::new(dimension(n_rows)?, dimension(n_cols)?)?;
        for ((row, col), &value) in dense.indexed_iter() {
            matrix.set_element(row as i64, col as i64, value);
        }
        Ok(matrix)
    }

    /// Checks that every stored coordinate lies inside the declared shape
    pub fn check_bounds(&self) -> Result<()> {
        let (n_rows, n_cols) = self.shape();
        match self
            .iter()
            .find(|&((row, col), _)| row < 0 || row >= n_rows || col < 0 || col >= n_cols)
        {
            Some(((row, col), _)) => Err(Error::OutOfBounds {
                row,
                col,
                shape: (n_rows, n_cols),
            }),
            None => Ok(()),
        }
    }

    /// Declared shape as `usize` extents, for buffers indexed by row or column
    pub(crate) fn extents(&self) -> Result<(usize, usize)> {
        let (n_rows, n_cols) = self.shape();
        if n_rows < 0 || n_cols < 0 {
            return Err(Error::InvalidDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        match (usize::try_from(n_rows), usize::try_from(n_cols)) {
            (Ok(rows), Ok(cols)) => Ok((rows, cols)),
            _ => Err(self.shape_too_large()),
        }
    }

    /// Allocates `len` copies of `value`, reporting allocation failure as an
    /// error instead of aborting.
    pub(crate) fn try_filled_vec<V: Clone>(&self, len: usize, value: V) -> Result<Vec<V>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| self.shape_too_large())?;
        buf.resize(len, value);
        Ok(buf)
    }

    fn shape_too_large(&self) -> Error {
        let (rows, cols) = self.shape();
        Error::ShapeTooLarge { rows, cols }
    }
}

/// Converts a `usize` extent from an external container into a dimension.
pub(crate) fn dimension(extent: usize) -> Result<i64> {
    i64::try_from(extent).map_err(|_| Error::InvalidDimension {
        rows: i64::MAX,
        cols: i64::MAX,
    })
}
