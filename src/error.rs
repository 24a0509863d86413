//! Error types for sparse matrix construction, arithmetic and I/O

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by matrix construction, arithmetic and the text codec
#[derive(Debug, Error)]
pub enum Error {
    /// A negative row or column count was passed to a constructor
    #[error("invalid matrix dimensions {rows}x{cols}: dimensions must be non-negative")]
    InvalidDimension { rows: i64, cols: i64 },

    /// The `rows=` / `cols=` header is missing or not an integer
    #[error("Input file has wrong header (line {line}): {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// An entry line is not of the form `(int, int, int)`
    #[error("Input file has wrong format (line {line})")]
    MalformedEntry { line: usize },

    /// Operand shapes are incompatible for the requested operation
    #[error("Matrices dimensions are not compatible for {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (i64, i64),
        right: (i64, i64),
    },

    /// The exact result at a coordinate does not fit the element type
    #[error("arithmetic overflow computing entry ({row}, {col})")]
    ArithmeticOverflow { row: i64, col: i64 },

    /// A stored coordinate lies outside the declared shape
    #[error("entry ({row}, {col}) lies outside the declared shape {shape:?}")]
    OutOfBounds {
        row: i64,
        col: i64,
        shape: (i64, i64),
    },

    /// A dense or CSR buffer for this shape cannot be allocated
    #[error("matrix shape {rows}x{cols} is too large to convert")]
    ShapeTooLarge { rows: i64, cols: i64 },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
