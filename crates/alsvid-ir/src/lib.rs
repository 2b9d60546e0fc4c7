//! Alsvid Circuit Intermediate Representation
//!
//! Data structures for describing quantum circuits to the Alsvid symbolic
//! simulators: the serde-facing boundary description, the closed gate
//! table, and the parsed instruction sequence.
//!
//! # Overview
//!
//! Circuits arrive from the provider layer as [`CircuitDescription`]
//! values — string-named operations over integer qubit indices. Parsing
//! resolves every name through the closed [`StandardGate`] table exactly
//! once, so downstream consumers dispatch exhaustively over enum variants
//! and unsupported names are rejected before execution starts.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.instructions().len(), 2);
//! ```
//!
//! # Supported operations
//!
//! | Name | Qubits | Description |
//! |------|--------|-------------|
//! | `id` | 1 | Identity (ignored with a diagnostic) |
//! | `x`, `y`, `z` | 1 | Pauli gates |
//! | `h` | 1 | Hadamard gate |
//! | `s`, `sdg` | 1 | Phase gate and its inverse |
//! | `t`, `tdg` | 1 | π/8-phase gate and its inverse |
//! | `u`, `u1`, `u2`, `u3` | 1 | General rotation, 1–3 parameters |
//! | `cu`, `cu1`, `cu2`, `cu3` | 2 | Controlled general rotation |
//! | `cx` (`cnot`) | 2 | Controlled-NOT |
//! | `cy`, `cz` | 2 | Controlled-Y / controlled-Z |
//! | `ccx` (`ccnot`, `toffoli`) | 3 | Toffoli |
//! | `barrier` | any | Synchronization point (ignored) |
//! | `measure`, `reset` | 1 | Parsed, but rejected by the engines |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::{Circuit, CircuitDescription, OperationDescription};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::QubitId;
