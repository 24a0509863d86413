//! Addition, subtraction and multiplication of sparse matrices
//!
//! Every operation borrows its operands and returns a freshly allocated
//! result. Integer arithmetic is exact: a result that does not fit the
//! element type is reported as [`Error::ArithmeticOverflow`].

use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::sparse::{Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns `self + other`
    ///
    /// Only coordinates stored in either operand are visited. A sum of zero
    /// leaves no entry in the result.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, "addition", T::checked_add)
    }

    /// Returns `self - other`
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, "subtraction", T::checked_sub)
    }

    /// Returns the matrix product `self × other`
    ///
    /// Every cell of the `self.n_rows × other.n_cols` result is computed as a
    /// dot product over the shared dimension, reading operands through
    /// [`get_element`](Self::get_element). The cost is
    /// `n_rows × other.n_cols × n_cols` lookups whatever the sparsity.
    ///
    /// Each dot product is accumulated in `i128`, so intermediate sums may
    /// exceed `T` as long as the final value fits.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `self.n_cols != other.n_rows`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(Error::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        debug!(
            left = ?self.shape(),
            right = ?other.shape(),
            "multiplying sparse matrices"
        );

        let mut result = Self::with_shape(self.n_rows(), other.n_cols());

        for i in 0..self.n_rows() {
            for j in 0..other.n_cols() {
                let overflow = || Error::ArithmeticOverflow { row: i, col: j };
                // Partial sums may leave T's range; only the final value must fit
                let mut dot_product: i128 = 0;
                for k in 0..self.n_cols() {
                    let left = self.get_element(i, k).to_i128().ok_or_else(overflow)?;
                    let right = other.get_element(k, j).to_i128().ok_or_else(overflow)?;
                    dot_product = left
                        .checked_mul(right)
                        .and_then(|product| dot_product.checked_add(product))
                        .ok_or_else(overflow)?;
                }
                let dot_product: T = num_traits::cast(dot_product).ok_or_else(overflow)?;
                result.set_element(i, j, dot_product);
            }
        }

        Ok(result)
    }

    fn elementwise<F>(&self, other: &Self, op: &'static str, combine: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> Option<T>,
    {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }

        debug!(shape = ?self.shape(), op, "elementwise sparse operation");

        let mut result = Self::with_shape(self.n_rows(), self.n_cols());
        for (row, col) in self.union_keys(other) {
            let value = combine(&self.get_element(row, col), &other.get_element(row, col))
                .ok_or(Error::ArithmeticOverflow { row, col })?;
            result.set_element(row, col, value);
        }

        Ok(result)
    }
}
