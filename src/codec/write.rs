//! Canonical serialization

use std::fmt;

use crate::matrix::{Element, SparseMatrix};

/// Renders a matrix in the canonical text format
///
/// ```text
/// rows=<n_rows>
/// cols=<n_cols>
/// (<row>, <col>, <value>)
/// ```
///
/// Entries appear in ascending `(row, col)` order.
pub fn serialize<T: Element>(matrix: &SparseMatrix<T>) -> String {
    // Header plus roughly 16 bytes per entry
    let mut out = String::with_capacity(32 + 16 * matrix.nnz());
    // Writing into a String cannot fail
    let _ = write_canonical(&mut out, matrix);
    out
}

fn write_canonical<W: fmt::Write, T: Element>(out: &mut W, matrix: &SparseMatrix<T>) -> fmt::Result {
    writeln!(out, "rows={}", matrix.n_rows())?;
    writeln!(out, "cols={}", matrix.n_cols())?;
    for ((row, col), value) in matrix.iter() {
        writeln!(out, "({}, {}, {})", row, col, value)?;
    }
    Ok(())
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, self)
    }
}
