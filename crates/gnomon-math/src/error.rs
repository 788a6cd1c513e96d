use thiserror::Error;

use crate::mat::MatrixKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A flat coefficient list was shorter than the matrix needs.
    #[error("{kind} needs {expected} coefficients, got {got}")]
    InvalidInput { kind: MatrixKind, expected: usize, got: usize },

    /// `inverse()` on a matrix whose determinant is exactly zero.
    #[error("{kind} is singular (not invertible)")]
    NotInvertible { kind: MatrixKind },
}
