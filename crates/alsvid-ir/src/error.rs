//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur while building or parsing circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operation name is outside the closed gate table.
    #[error("unrecognized operation '{0}'")]
    UnsupportedOperation(String),

    /// An operand refers to a qubit the circuit does not have.
    #[error("operation '{gate_name}' references qubit {qubit} but circuit only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// Name of the offending operation.
        gate_name: String,
        /// The out-of-range qubit index.
        qubit: u32,
        /// Number of qubits in the circuit.
        n_qubits: u32,
    },

    /// Gate requires a different number of operands.
    #[error("gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
