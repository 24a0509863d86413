//! Conversion between our coordinate matrix and `sprs` CSR matrices

use sprs::CsMat;

use crate::error::{Error, Result};
use crate::matrix::conversion::dimension;
use crate::matrix::{Element, SparseMatrix};

/// Converts a sparse matrix to `sprs` CSR format
///
/// # Errors
///
/// [`Error::InvalidDimension`] for a negative shape,
/// [`Error::OutOfBounds`] for entries outside it (CSR storage can only
/// index cells inside the declared shape) and [`Error::ShapeTooLarge`] when
/// the row pointer array cannot be allocated.
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> Result<CsMat<T>>
where
    T: Element + Default,
{
    let (n_rows, n_cols) = matrix.extents()?;
    matrix.check_bounds()?;

    // Row pointers: count non-zeros per row, then prefix-sum in place
    let mut indptr = matrix.try_filled_vec(n_rows + 1, 0usize)?;
    for ((row, _), _) in matrix.iter() {
        indptr[row as usize + 1] += 1;
    }
    for row in 0..n_rows {
        indptr[row + 1] += indptr[row];
    }

    // Entries iterate row-major with ascending columns, which is CSR order
    let (col_idx, values): (Vec<usize>, Vec<T>) = matrix
        .iter()
        .map(|((_, col), value)| (col as usize, value))
        .unzip();

    Ok(CsMat::new(
        (n_rows, n_cols),
        indptr,
        col_idx,
        values,
    ))
}

/// Converts a `sprs` matrix (CSR or CSC) back to a coordinate matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: Element + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrix::new(dimension(n_rows)?, dimension(n_cols)?)?;

    for (row, row_vec) in matrix.outer_iterator().enumerate() {
        for (col, &value) in row_vec.iter() {
            result.set_element(row as i64, col as i64, value);
        }
    }

    Ok(result)
}
