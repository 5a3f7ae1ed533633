// src/numerics/error.rs

/// Errors raised by the fallible numerics operations.
///
/// The minor and cofactor routines themselves are total and never return
/// one of these; only inversion, normalization, slice conversion and
/// configuration parsing can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Singular matrix: determinant {determinant} is too close to zero to invert")]
    SingularMatrix { determinant: f64 },

    #[error("Invalid length: expected {expected} elements, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}
