//! Alsvid Symbolic Simulators
//!
//! Exact symbolic execution of quantum circuits: instead of floating-point
//! amplitudes, every value is an exact symbolic expression (`sqrt(2)/2`,
//! `exp(I*pi/4)`, rationals), so results come out in closed form and
//! algebraic identities hold exactly. Intentionally exponential and slow —
//! the point is a pen-and-paper answer, not throughput.
//!
//! Two execution strategies over the same circuit IR:
//!
//! - [`StatevectorSimulator`] — folds the state vector from |0…0⟩ through
//!   every instruction and returns the final amplitudes
//! - [`UnitarySimulator`] — accumulates the net circuit unitary
//!   `U_total = U_k · … · U_2 · U_1`
//!
//! Both are stateless, synchronous, single-shot engines behind the
//! [`Backend`] trait. Measurement, reset and classically-conditioned
//! operations are structurally unsupported and abort the offending
//! circuit only; batches always produce one result per circuit.
//!
//! # Example: Bell state, exactly
//!
//! ```rust
//! use alsvid_ir::{CircuitDescription, OperationDescription};
//! use alsvid_sim::{Backend, StatevectorSimulator};
//!
//! let bell = CircuitDescription {
//!     name: "bell".into(),
//!     num_qubits: 2,
//!     operations: vec![
//!         OperationDescription::new("h", [0]),
//!         OperationDescription::new("cx", [0, 1]),
//!     ],
//! };
//!
//! let result = StatevectorSimulator::new().run_circuit(&bell, 1);
//! let state = result.statevector().unwrap();
//! assert_eq!(state[0].to_string(), "sqrt(2)/2");
//! assert_eq!(state[3].to_string(), "sqrt(2)/2");
//! ```

pub mod backend;
pub mod catalog;
pub mod enlarge;
pub mod error;
pub mod index;
pub mod matrix;
pub mod result;
pub mod statevector;
pub mod ugate;
pub mod unitary;

pub use backend::Backend;
pub use catalog::{ResolvedGate, cnot_matrix, controlled, resolve};
pub use enlarge::{enlarge_single, enlarge_two};
pub use error::{SimError, SimResult};
pub use index::{insert_one, insert_two};
pub use result::{BatchResult, ExperimentResult, ExperimentStatus, ResultData};
pub use statevector::StatevectorSimulator;
pub use ugate::compute_ugate_matrix;
pub use unitary::UnitarySimulator;
