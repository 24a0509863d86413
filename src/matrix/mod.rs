// Matrix data structures and operations

pub mod arithmetic;
pub mod conversion;
pub mod sparse;

pub use sparse::{Element, IntMatrix, Iter, SparseMatrix};
