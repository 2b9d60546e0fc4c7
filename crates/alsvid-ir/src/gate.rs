//! The closed set of gates the symbolic engines understand.
//!
//! Gate names are resolved to variants once, at parse time, so the
//! simulators dispatch exhaustively over this enum and never see a string.

use serde::{Deserialize, Serialize};

/// A gate with known symbolic semantics.
///
/// `U` and `CU` carry their raw parameter list; the list length is
/// validated when the matrix is composed, not here, so that a malformed
/// parameter count surfaces as a parameter error rather than a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// Phase gate S (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// π/8-phase gate T.
    T,
    /// T-dagger gate.
    Tdg,
    /// General single-qubit rotation, 1–3 raw parameters (u, u1, u2, u3).
    U(Vec<f64>),
    /// Controlled general rotation (cu, cu1, cu2, cu3).
    CU(Vec<f64>),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Toffoli gate (controlled-controlled-X).
    CCX,
}

impl StandardGate {
    /// Resolve a boundary operation name to a gate variant.
    ///
    /// The table is closed and case-insensitive; aliases follow the source
    /// system (`cx`/`cnot`, `ccx`/`ccnot`/`toffoli`, numbered `u`/`cu`
    /// forms). Returns `None` for any name outside the table.
    pub fn from_name(name: &str, params: Option<&[f64]>) -> Option<Self> {
        let params = || params.unwrap_or_default().to_vec();
        match name.to_ascii_lowercase().as_str() {
            "id" => Some(StandardGate::I),
            "x" => Some(StandardGate::X),
            "y" => Some(StandardGate::Y),
            "z" => Some(StandardGate::Z),
            "h" => Some(StandardGate::H),
            "s" => Some(StandardGate::S),
            "sdg" => Some(StandardGate::Sdg),
            "t" => Some(StandardGate::T),
            "tdg" => Some(StandardGate::Tdg),
            "u" | "u1" | "u2" | "u3" => Some(StandardGate::U(params())),
            "cu" | "cu1" | "cu2" | "cu3" => Some(StandardGate::CU(params())),
            "cx" | "cnot" => Some(StandardGate::CX),
            "cy" => Some(StandardGate::CY),
            "cz" => Some(StandardGate::CZ),
            "ccx" | "ccnot" | "toffoli" => Some(StandardGate::CCX),
            _ => None,
        }
    }

    /// Get the canonical name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::U(_) => "u",
            StandardGate::CU(_) => "cu",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    ///
    /// Operand order is controls first, target last.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::U(_) => 1,

            StandardGate::CU(_)
            | StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ => 2,

            StandardGate::CCX => 3,
        }
    }

    /// Check if this gate carries rotation parameters.
    pub fn is_parameterized(&self) -> bool {
        matches!(self, StandardGate::U(_) | StandardGate::CU(_))
    }
}
