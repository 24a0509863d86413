//! Run configuration for the command-line driver

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::matrix::{Element, SparseMatrix};

/// Directory results are written under unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// The binary operation to apply to the two input matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Elementwise sum
    Add,
    /// Elementwise difference, left minus right
    Sub,
    /// Matrix product
    Mul,
}

impl Operation {
    /// The command-line spelling of this operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    pub fn apply<T: Element>(
        &self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Sub => lhs.subtract(rhs),
            Operation::Mul => lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation name is not one of `add`, `sub`, `mul`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid operation. Use 'add', 'sub', or 'mul'.")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            "mul" => Ok(Operation::Mul),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Everything needed to run one operation end to end
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Operation name as given on the command line; validated after the
    /// inputs have been read
    pub operation: String,
    /// Left operand file
    pub lhs: PathBuf,
    /// Right operand file
    pub rhs: PathBuf,
    /// Directory the result is written under
    pub output_dir: PathBuf,
    /// File name of the result inside `output_dir`
    pub output_name: PathBuf,
}

impl RunConfig {
    pub fn new(
        operation: impl Into<String>,
        lhs: impl Into<PathBuf>,
        rhs: impl Into<PathBuf>,
        output_name: impl Into<PathBuf>,
    ) -> Self {
        Self {
            operation: operation.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_name: output_name.into(),
        }
    }

    /// Overrides the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Full path of the result file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}
