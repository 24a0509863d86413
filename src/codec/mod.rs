//! Text codec for sparse matrices
//!
//! The on-disk format is line oriented:
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 1, 3)
//! (1, 0, 7)
//! ```
//!
//! Whole files are read into memory and written in a single call.

pub mod parse;
pub mod write;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

pub use parse::parse;
pub use write::serialize;

/// Reads and parses a matrix file
pub fn read_matrix<T: Element>(path: impl AsRef<Path>) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let matrix = parse(&text)?;
    debug!(
        path = %path.display(),
        shape = ?matrix.shape(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Serializes `matrix` to `path`, creating missing parent directories first
pub fn write_matrix<T: Element>(path: impl AsRef<Path>, matrix: &SparseMatrix<T>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(path, serialize(matrix)).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix");
    Ok(())
}
