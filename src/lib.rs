//! # spmat: integer sparse matrices
//!
//! `spmat` stores large, mostly-zero integer matrices by their nonzero
//! entries only, and provides addition, subtraction and multiplication over
//! that representation together with a canonical text format.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] keeps a `(row, col) → value` map plus a declared shape.
//!   Zero is never stored; reading an absent coordinate yields zero.
//! - [`codec`] parses and serializes the line-oriented text format:
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 1, 3)
//! (1, 0, 7)
//! ```
//!
//! ## Usage
//!
//! ```
//! use spmat::{IntMatrix, codec};
//!
//! let a: IntMatrix = "rows=1\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n".parse().unwrap();
//! let b = IntMatrix::from_entries(2, 1, vec![(0, 0, 5), (1, 0, 6)]).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(codec::serialize(&c), "rows=1\ncols=1\n(0, 0, 39)\n");
//! ```
//!
//! Arithmetic never mutates its operands and fails with
//! [`Error::DimensionMismatch`] when the shapes are incompatible.

pub mod codec;
pub mod config;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use codec::{parse, read_matrix, serialize, write_matrix};
pub use config::{Operation, RunConfig, UnknownOperation, DEFAULT_OUTPUT_DIR};
pub use error::{Error, Result};
pub use matrix::{Element, IntMatrix, SparseMatrix};
pub use utils::{from_sprs_csr, to_sprs_csr};

/// Version information for the spmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
