//! The symbolic statevector execution strategy.

use alsvid_exact::Scalar;
use alsvid_ir::{Circuit, CircuitDescription, Instruction, InstructionKind, IrError, StandardGate};
use ndarray::Array2;
use num_traits::{One, Zero};
use tracing::{debug, info, instrument};

use crate::backend::Backend;
use crate::catalog::{cnot_matrix, resolve};
use crate::enlarge::enlarge_two;
use crate::error::{SimError, SimResult};
use crate::matrix::matvec;
use crate::result::{ExperimentResult, ResultData};

/// Apply a 2×2 matrix to one qubit of the state, in place.
///
/// Walks every basis-index pair differing only in the target bit and mixes
/// the two amplitudes through the matrix.
fn apply_single(state: &mut [Scalar], u: &Array2<Scalar>, qubit: usize) {
    let mask = 1usize << qubit;
    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a = state[i].clone();
            let b = state[j].clone();
            state[i] = u[[0, 0]].clone() * a.clone() + u[[0, 1]].clone() * b.clone();
            state[j] = u[[1, 0]].clone() * a + u[[1, 1]].clone() * b;
        }
    }
}

/// Apply a 2×2 matrix to the target qubit wherever every control bit is
/// set, in place. Standard controlled-gate semantics: the controls' |0⟩
/// subspace is untouched.
fn apply_controlled(state: &mut [Scalar], u: &Array2<Scalar>, controls: &[usize], target: usize) {
    let ctrl_mask = controls.iter().fold(0usize, |acc, c| acc | (1 << c));
    let tgt_mask = 1usize << target;
    for i in 0..state.len() {
        if (i & ctrl_mask) == ctrl_mask && (i & tgt_mask) == 0 {
            let j = i | tgt_mask;
            let a = state[i].clone();
            let b = state[j].clone();
            state[i] = u[[0, 0]].clone() * a.clone() + u[[0, 1]].clone() * b.clone();
            state[j] = u[[1, 0]].clone() * a + u[[1, 1]].clone() * b;
        }
    }
}

/// The symbolic statevector simulator.
///
/// Runs a circuit from the all-zero ket to its final amplitude vector in
/// exact arithmetic. Supports the full gate catalog, including the
/// controlled forms. Stateless: every run folds its own state vector.
#[derive(Debug, Clone)]
pub struct StatevectorSimulator {
    /// Backend identifier reported in diagnostics and errors.
    name: String,
}

impl StatevectorSimulator {
    /// Create a new statevector simulator.
    pub fn new() -> Self {
        Self {
            name: "symbolic_statevector_simulator".to_string(),
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

    /// Operand bit positions of an instruction.
    fn operands(instruction: &Instruction) -> Vec<usize> {
        instruction.qubits.iter().map(|q| q.index()).collect()
    }

    /// Controlled application touches each operand as a distinct bit.
    fn ensure_distinct(&self, operands: &[usize]) -> SimResult<()> {
        for (i, a) in operands.iter().enumerate() {
            if operands[i + 1..].contains(a) {
                return Err(SimError::PreconditionViolation(format!(
                    "operands must be distinct qubits, got q{a} twice"
                )));
            }
        }
        Ok(())
    }

    /// Fold the instruction sequence into the final amplitude vector.
    fn execute(&self, circuit: &Circuit) -> SimResult<Vec<Scalar>> {
        let mut state = vec![Scalar::zero(); circuit.dim()];
        state[0] = Scalar::one();

        for instruction in circuit.instructions() {
            if instruction.conditional {
                return Err(self.unsupported(format!("conditional {}", instruction.name())));
            }
            match &instruction.kind {
                InstructionKind::Measure | InstructionKind::Reset => {
                    return Err(self.unsupported(instruction.name()));
                }
                InstructionKind::Barrier => {
                    info!("barrier is ignored by the symbolic statevector simulator");
                }
                InstructionKind::Gate(StandardGate::I) => {
                    info!("identity gate is ignored by the symbolic statevector simulator");
                }
                InstructionKind::Gate(StandardGate::CX) => {
                    // The CNOT takes the fixed matrix through the two-qubit
                    // embedding; everything else applies in place.
                    let q = Self::operands(instruction);
                    let op = enlarge_two(&cnot_matrix(), q[0], q[1], circuit.num_qubits())?;
                    state = matvec(&op, &state);
                }
                InstructionKind::Gate(gate) => {
                    let resolved = resolve(gate)?;
                    let q = Self::operands(instruction);
                    let (controls, target) = q.split_at(resolved.controls);
                    if controls.is_empty() {
                        apply_single(&mut state, &resolved.target, target[0]);
                    } else {
                        self.ensure_distinct(&q)?;
                        apply_controlled(&mut state, &resolved.target, controls, target[0]);
                    }
                }
            }
        }
        Ok(state)
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for StatevectorSimulator {
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
            "running statevector simulation"
        );

        let outcome = self
            .parse(circuit)
            .and_then(|parsed| self.execute(&parsed));
        match outcome {
            Ok(state) => ExperimentResult::done(&circuit.name, ResultData::Statevector(state)),
            Err(e) => ExperimentResult::error(&circuit.name, e.to_string()),
        }
    }
}
