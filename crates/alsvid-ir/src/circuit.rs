//! Circuits: the boundary description and the parsed program.
//!
//! [`CircuitDescription`] is the serde-facing shape exchanged with the
//! provider/job layer: operations are still named by strings. Parsing turns
//! it into a [`Circuit`], an ordered instruction list over the closed gate
//! table — every name is resolved here, once, so unsupported operations are
//! rejected before any simulator runs.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::QubitId;

/// One operation in the boundary circuit description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescription {
    /// Operation name (case-insensitive).
    pub name: String,
    /// Operand qubit indices, controls first.
    #[serde(default)]
    pub qubits: Vec<u32>,
    /// Rotation parameters for the U/CU families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<f64>>,
    /// Classical-condition marker. Its presence, not its value, marks the
    /// operation as conditioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<bool>,
}

impl OperationDescription {
    /// Create a named operation on the given qubits.
    pub fn new(name: impl Into<String>, qubits: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
            params: None,
            conditional: None,
        }
    }

    /// Attach rotation parameters.
    #[must_use]
    pub fn with_params(mut self, params: impl IntoIterator<Item = f64>) -> Self {
        self.params = Some(params.into_iter().collect());
        self
    }

    /// Attach a classical-condition marker.
    #[must_use]
    pub fn with_conditional(mut self, value: bool) -> Self {
        self.conditional = Some(value);
        self
    }
}

/// The boundary circuit description exchanged with the provider layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDescription {
    /// Name of the circuit, echoed back in its result.
    pub name: String,
    /// Number of qubits.
    pub num_qubits: u32,
    /// Ordered list of operations.
    pub operations: Vec<OperationDescription>,
}

/// A parsed quantum circuit: an ordered instruction sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Parse a boundary description into a circuit.
    ///
    /// This is the total name→variant mapping: any operation name outside
    /// the closed table (and not measure/reset/barrier) fails with
    /// [`IrError::UnsupportedOperation`]. Operand counts and qubit bounds
    /// are validated as instructions are appended.
    pub fn parse(description: &CircuitDescription) -> IrResult<Self> {
        let mut circuit = Circuit::new(description.name.clone(), description.num_qubits);
        for op in &description.operations {
            let qubits = op.qubits.iter().map(|q| QubitId(*q));
            let mut instruction = match op.name.to_ascii_lowercase().as_str() {
                "measure" => Instruction::measure(QubitId(*op.qubits.first().unwrap_or(&0))),
                "reset" => Instruction::reset(QubitId(*op.qubits.first().unwrap_or(&0))),
                "barrier" => Instruction::barrier(qubits),
                name => {
                    let gate = StandardGate::from_name(name, op.params.as_deref())
                        .ok_or_else(|| IrError::UnsupportedOperation(op.name.clone()))?;
                    Instruction::gate(gate, qubits)
                }
            };
            if op.conditional.is_some() {
                instruction = instruction.with_conditional();
            }
            circuit.apply(instruction)?;
        }
        Ok(circuit)
    }

    /// Append an instruction, validating operand count and qubit bounds.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }
        for qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    gate_name: instruction.name().to_string(),
                    qubit: qubit.0,
                    n_qubits: self.num_qubits,
                });
            }
        }
        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Gate helpers
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::H, [qubit]))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::X, [qubit]))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Y, [qubit]))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Z, [qubit]))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::S, [qubit]))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Sdg, [qubit]))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::T, [qubit]))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Tdg, [qubit]))
    }

    /// Apply a general rotation with 1–3 raw parameters.
    pub fn u(
        &mut self,
        params: impl IntoIterator<Item = f64>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(
            StandardGate::U(params.into_iter().collect()),
            [qubit],
        ))
    }

    /// Apply a controlled general rotation.
    pub fn cu(
        &mut self,
        params: impl IntoIterator<Item = f64>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(
            StandardGate::CU(params.into_iter().collect()),
            [control, target],
        ))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CX, [control, target]))
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CY, [control, target]))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CZ, [control, target]))
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply an identity gate.
    pub fn id(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::I, [qubit]))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Dimension of the circuit's Hilbert space, `2^N`.
    pub fn dim(&self) -> usize {
        1usize << self.num_qubits
    }

    /// Get the instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit (no measurement).
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Circuit::new("bell", 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit (no measurement).
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Circuit::new("ghz", n);
        if n == 0 {
            return Ok(circuit);
        }
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bell_description() {
        let description = CircuitDescription {
            name: "bell".into(),
            num_qubits: 2,
            operations: vec![
                OperationDescription::new("h", [0]),
                OperationDescription::new("CX", [0, 1]),
            ],
        };
        let circuit = Circuit::parse(&description).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.instructions().len(), 2);
        assert_eq!(circuit, Circuit::bell().unwrap());
        assert_eq!(
            circuit.instructions()[0].as_gate(),
            Some(&StandardGate::H)
        );
    }

    #[test]
    fn test_builder_covers_the_catalog() {
        let mut circuit = Circuit::new("all", 3);
        let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
        circuit
            .id(q0)
            .unwrap()
            .x(q0)
            .unwrap()
            .y(q0)
            .unwrap()
            .z(q0)
            .unwrap()
            .h(q0)
            .unwrap()
            .s(q0)
            .unwrap()
            .sdg(q0)
            .unwrap()
            .t(q0)
            .unwrap()
            .tdg(q0)
            .unwrap()
            .u([0.5, 0.5, 0.5], q0)
            .unwrap()
            .cu([0.5], q0, q1)
            .unwrap()
            .cx(q0, q1)
            .unwrap()
            .cy(q0, q1)
            .unwrap()
            .cz(q0, q1)
            .unwrap()
            .ccx(q0, q1, q2)
            .unwrap()
            .barrier_all()
            .unwrap();

        assert_eq!(circuit.instructions().len(), 16);
        assert!(circuit.instructions()[15].is_barrier());
        assert_eq!(circuit.dim(), 8);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let description = CircuitDescription {
            name: "bad".into(),
            num_qubits: 1,
            operations: vec![OperationDescription::new("frobnicate", [0])],
        };
        assert!(matches!(
            Circuit::parse(&description),
            Err(IrError::UnsupportedOperation(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn test_parse_accepts_measure_and_barrier() {
        // measure/reset parse fine; the engines reject them at run time.
        let description = CircuitDescription {
            name: "m".into(),
            num_qubits: 1,
            operations: vec![
                OperationDescription::new("barrier", [0]),
                OperationDescription::new("measure", [0]),
                OperationDescription::new("reset", [0]),
            ],
        };
        let circuit = Circuit::parse(&description).unwrap();
        assert_eq!(circuit.instructions()[1].name(), "measure");
        assert_eq!(circuit.instructions()[2].name(), "reset");
    }

    #[test]
    fn test_conditional_presence_is_what_counts() {
        let description = CircuitDescription {
            name: "c".into(),
            num_qubits: 1,
            operations: vec![OperationDescription::new("x", [0]).with_conditional(false)],
        };
        let circuit = Circuit::parse(&description).unwrap();
        assert!(circuit.instructions()[0].conditional);
    }

    #[test]
    fn test_qubit_bounds_are_checked() {
        let description = CircuitDescription {
            name: "oob".into(),
            num_qubits: 2,
            operations: vec![OperationDescription::new("cx", [0, 2])],
        };
        assert!(matches!(
            Circuit::parse(&description),
            Err(IrError::QubitOutOfRange { qubit: 2, n_qubits: 2, .. })
        ));
    }

    #[test]
    fn test_arity_is_checked() {
        let mut circuit = Circuit::new("t", 3);
        let bad = Instruction::gate(StandardGate::CX, [QubitId(0)]);
        assert!(matches!(
            circuit.apply(bad),
            Err(IrError::QubitCountMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_ghz_structure() {
        let circuit = Circuit::ghz(4).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.instructions().len(), 4); // H + 3 CX
    }

    #[test]
    fn test_description_json_shape() {
        let json = r#"{
            "name": "bell",
            "num_qubits": 2,
            "operations": [
                {"name": "u2", "qubits": [0], "params": [0.0, 3.14159265]},
                {"name": "cx", "qubits": [0, 1]}
            ]
        }"#;
        let description: CircuitDescription = serde_json::from_str(json).unwrap();
        assert_eq!(description.operations[0].params, Some(vec![0.0, 3.14159265]));
        assert!(description.operations[1].params.is_none());
        let circuit = Circuit::parse(&description).unwrap();
        assert_eq!(circuit.instructions().len(), 2);
    }
}
