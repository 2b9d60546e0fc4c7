//! The symbolic unitary execution strategy.

use alsvid_exact::Scalar;
use alsvid_ir::{Circuit, CircuitDescription, InstructionKind, IrError, StandardGate};
use ndarray::Array2;
use tracing::{debug, info, instrument};

use crate::backend::Backend;
use crate::catalog::cnot_matrix;
use crate::enlarge::{enlarge_single, enlarge_two};
use crate::error::{SimError, SimResult};
use crate::matrix::{identity, matmul};
use crate::result::{ExperimentResult, ResultData};
use crate::ugate::compute_ugate_matrix;

/// The symbolic unitary simulator.
///
/// Accumulates the net circuit unitary by left-multiplying each enlarged
/// instruction operator onto a running product, so the first instruction
/// ends as the right-most factor: `U_total = U_k · … · U_2 · U_1`.
///
/// Only the rotation family and the CNOT build operators here; the
/// controlled forms the statevector strategy knows are rejected. Cost is
/// dominated by the two-qubit embedding, O(4^N) per instruction.
#[derive(Debug, Clone)]
pub struct UnitarySimulator {
    /// Backend identifier reported in diagnostics and errors.
    name: String,
}

impl UnitarySimulator {
    /// Create a new unitary simulator.
    pub fn new() -> Self {
        Self {
            name: "symbolic_unitary_simulator".to_string(),
        }
    }

    fn unsupported(&self, operation: impl Into<String>) -> SimError {
        SimError::UnsupportedOperation {
            operation: operation.into(),
            backend: self.name.clone(),
        }
    }

    fn parse(&self, description: &CircuitDescription) -> SimResult<Circuit> {
        Circuit::parse(description).map_err(|e| match e {
            IrError::UnsupportedOperation(operation) => self.unsupported(operation),
            other => SimError::Ir(other),
        })
    }

    /// Fold the instruction sequence into the accumulated unitary.
    fn execute(&self, circuit: &Circuit) -> SimResult<Array2<Scalar>> {
        let n = circuit.num_qubits();
        let mut accumulator = identity(circuit.dim());

        for instruction in circuit.instructions() {
            if instruction.conditional {
                return Err(self.unsupported(format!("conditional {}", instruction.name())));
            }
            match &instruction.kind {
                InstructionKind::Measure | InstructionKind::Reset => {
                    return Err(self.unsupported(instruction.name()));
                }
                InstructionKind::Barrier => {
                    info!("barrier is ignored by the symbolic unitary simulator");
                }
                InstructionKind::Gate(StandardGate::I) => {
                    info!("identity gate is ignored by the symbolic unitary simulator");
                }
                InstructionKind::Gate(StandardGate::U(params)) => {
                    let gate = compute_ugate_matrix(params)?;
                    let qubit = instruction.qubits[0].index();
                    let op = enlarge_single(&gate, qubit, n);
                    accumulator = matmul(&op, &accumulator);
                }
                InstructionKind::Gate(StandardGate::CX) => {
                    let qubit0 = instruction.qubits[0].index();
                    let qubit1 = instruction.qubits[1].index();
                    let op = enlarge_two(&cnot_matrix(), qubit0, qubit1, n)?;
                    accumulator = matmul(&op, &accumulator);
                }
                InstructionKind::Gate(gate) => {
                    return Err(self.unsupported(gate.name()));
                }
            }
        }
        Ok(accumulator)
    }
}

impl Default for UnitarySimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for UnitarySimulator {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, circuit), fields(circuit = %circuit.name))]
    fn run_circuit(&self, circuit: &CircuitDescription, shots: u32) -> ExperimentResult {
        if shots != 1 {
            info!(
                shots,
                "symbolic simulation is deterministic, setting shots=1 for circuit {}",
                circuit.name
            );
        }
        debug!(
            num_qubits = circuit.num_qubits,
            operations = circuit.operations.len(),
            "running unitary simulation"
        );

        let outcome = self
            .parse(circuit)
            .and_then(|parsed| self.execute(&parsed));
        match outcome {
            Ok(unitary) => {
                let rows = unitary.outer_iter().map(|row| row.to_vec()).collect();
                ExperimentResult::done(&circuit.name, ResultData::Unitary(rows))
            }
            Err(e) => ExperimentResult::error(&circuit.name, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::OperationDescription;
    use num_traits::Zero;
    use std::f64::consts::PI;

    fn sqrt2_over_2() -> Scalar {
        Scalar::sqrt2() * Scalar::rational(1, 2)
    }

    #[test]
    fn test_bell_unitary_first_row() {
        let description = CircuitDescription {
            name: "bell".into(),
            num_qubits: 2,
            operations: vec![
                OperationDescription::new("u2", [0]).with_params([0.0, PI]),
                OperationDescription::new("cx", [0, 1]),
            ],
        };
        let sim = UnitarySimulator::new();
        let result = sim.run_circuit(&description, 1);
        assert!(result.is_success());
        let unitary = result.unitary().unwrap();
        assert_eq!(unitary[0][0], sqrt2_over_2());
        assert_eq!(unitary[0][1], sqrt2_over_2());
        assert!(unitary[0][2].is_zero());
        assert!(unitary[0][3].is_zero());
    }

    #[test]
    fn test_fixed_gates_are_rejected() {
        let description = CircuitDescription {
            name: "h".into(),
            num_qubits: 1,
            operations: vec![OperationDescription::new("h", [0])],
        };
        let sim = UnitarySimulator::new();
        let result = sim.run_circuit(&description, 1);
        assert!(!result.is_success());
        assert!(result.error.as_deref().unwrap().contains("'h'"));
        assert!(
            result
                .error
                .as_deref()
                .unwrap()
                .contains("symbolic_unitary_simulator")
        );
    }

    #[test]
    fn test_instructions_compose_right_to_left() {
        // u1(π/2) then X-as-u3(π): the phase must act before the flip.
        let description = CircuitDescription {
            name: "order".into(),
            num_qubits: 1,
            operations: vec![
                OperationDescription::new("u1", [0]).with_params([PI / 2.0]),
                OperationDescription::new("u3", [0]).with_params([PI, 0.0, PI]),
            ],
        };
        let sim = UnitarySimulator::new();
        let result = sim.run_circuit(&description, 1);
        let unitary = result.unitary().unwrap();
        // U = X·diag(1, i) up to X's global layout: column 0 is |0⟩ → |1⟩.
        assert!(unitary[0][0].is_zero());
        assert_eq!(unitary[1][0], Scalar::integer(1));
        // Column 1 picked up the i phase before the flip.
        assert_eq!(unitary[0][1], Scalar::i());
    }
}
