//! Errors raised by the matrix operations.

use thiserror::Error;

/// Errors that can occur in block assembly, normal-form based solving and
/// base change.
///
/// Every failure is deterministic: retrying the same call with the same
/// inputs fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand dimensions are incompatible.
    #[error("shape mismatch in {operation}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// The operation that rejected its operands.
        operation: &'static str,
        /// The dimension the operation required.
        expected: usize,
        /// The dimension it was given.
        found: usize,
    },

    /// A row or column index lies outside the matrix.
    #[error("index {index} out of bounds for dimension {bound}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of rows or columns available.
        bound: usize,
    },

    /// The linear system has no exact solution over the ring.
    #[error("linear system has no solution over the coefficient ring")]
    Unsolvable,

    /// The system may be solvable but its solution is not unique.
    #[error("solution is not unique: coefficient matrix is rank deficient")]
    NotUnique,

    /// An entry has no image in the target ring.
    #[error("cannot change base ring of entry ({row}, {col}): {reason}")]
    BaseChange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// Why the conversion failed.
        reason: String,
    },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Checks that a dimension matches what an operation requires.
pub(crate) fn expect_dim(operation: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(LinalgError::ShapeMismatch {
            operation,
            expected,
            found,
        })
    }
}
