//! Error types for the simulator crate.

use alsvid_ir::IrError;
use thiserror::Error;

/// Errors produced while executing a circuit symbolically.
///
/// All of these are deterministic structural errors: they abort the
/// current circuit, surface as that circuit's ERROR result, and are never
/// retried. Sibling circuits in a batch are unaffected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The operation cannot be executed by this backend: conditioned
    /// operations, measure/reset, names outside the closed table, or gates
    /// outside the backend's supported set.
    #[error("{backend} does not support operation '{operation}'")]
    UnsupportedOperation {
        /// Name of the offending operation.
        operation: String,
        /// Identifier of the backend that rejected it.
        backend: String,
    },

    /// A U/CU gate carried a parameter list that is not of length 1–3.
    #[error("U gate must carry 1, 2 or 3 parameters, got {got}")]
    InvalidParameterCount {
        /// The actual parameter count.
        got: usize,
    },

    /// A precondition of the two-qubit embedding was violated.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),

    /// Structural circuit error surfaced during parsing.
    #[error("circuit error: {0}")]
    Ir(IrError),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
