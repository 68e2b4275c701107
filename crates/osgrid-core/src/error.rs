//! Error types for osgrid

use crate::datum::Datum;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OsgridError {
    // Grid-reference text errors
    #[error("Invalid grid reference: {reason}")]
    Parse { reason: String },

    // Formatting / precision errors
    #[error("Out of range: {reason}")]
    Range { reason: String },

    // Iterative solves that fail to settle
    #[error("{operation} did not converge within {iterations} iterations")]
    Convergence {
        operation: String,
        iterations: u32,
    },

    #[error("Datum mismatch: expected {expected}, got {actual}")]
    DatumMismatch { expected: Datum, actual: Datum },

    #[error("Division of a vector by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, OsgridError>;
