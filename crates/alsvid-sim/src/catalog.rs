//! The fixed gate catalog.
//!
//! Every supported gate reduces to a 2×2 target matrix plus a number of
//! control qubits: the fixed singles are literal tables, the U/CU families
//! come from the composer, and the controlled gates wrap X/Y/Z/U with one
//! or two controls. Name recognition happened at parse time, so resolution
//! over the closed variant is exhaustive; the only failure mode left is U
//! parameter-count validation.

use alsvid_exact::{Angle, Scalar};
use alsvid_ir::StandardGate;
use ndarray::{Array2, array};
use num_traits::{One, Zero};

use crate::error::SimResult;
use crate::ugate::compute_ugate_matrix;

/// A gate reduced to controlled-matrix form: `controls` control qubits
/// gating a single-qubit `target` unitary.
#[derive(Debug, Clone)]
pub struct ResolvedGate {
    /// Number of leading operand qubits acting as controls.
    pub controls: usize,
    /// The 2×2 target matrix.
    pub target: Array2<Scalar>,
}

fn x_matrix() -> Array2<Scalar> {
    array![
        [Scalar::zero(), Scalar::one()],
        [Scalar::one(), Scalar::zero()]
    ]
}

fn y_matrix() -> Array2<Scalar> {
    array![
        [Scalar::zero(), -Scalar::i()],
        [Scalar::i(), Scalar::zero()]
    ]
}

fn z_matrix() -> Array2<Scalar> {
    array![
        [Scalar::one(), Scalar::zero()],
        [Scalar::zero(), -Scalar::one()]
    ]
}

fn h_matrix() -> Array2<Scalar> {
    let a = Scalar::sqrt2() * Scalar::rational(1, 2);
    array![[a.clone(), a.clone()], [a.clone(), -a]]
}

/// `diag(1, e^{iθ})` — the S/Sdg/T/Tdg family.
fn phase_matrix(theta: Angle) -> Array2<Scalar> {
    array![
        [Scalar::one(), Scalar::zero()],
        [Scalar::zero(), Scalar::cis(theta)]
    ]
}

/// Resolve a gate to its controlled-matrix form.
pub fn resolve(gate: &StandardGate) -> SimResult<ResolvedGate> {
    let plain = |target: Array2<Scalar>| ResolvedGate { controls: 0, target };
    Ok(match gate {
        StandardGate::I => plain(crate::matrix::identity(2)),
        StandardGate::X => plain(x_matrix()),
        StandardGate::Y => plain(y_matrix()),
        StandardGate::Z => plain(z_matrix()),
        StandardGate::H => plain(h_matrix()),
        StandardGate::S => plain(phase_matrix(Angle::pi_times(1, 2))),
        StandardGate::Sdg => plain(phase_matrix(Angle::pi_times(-1, 2))),
        StandardGate::T => plain(phase_matrix(Angle::pi_times(1, 4))),
        StandardGate::Tdg => plain(phase_matrix(Angle::pi_times(-1, 4))),
        StandardGate::U(params) => plain(compute_ugate_matrix(params)?),
        StandardGate::CU(params) => ResolvedGate {
            controls: 1,
            target: compute_ugate_matrix(params)?,
        },
        StandardGate::CX => ResolvedGate {
            controls: 1,
            target: x_matrix(),
        },
        StandardGate::CY => ResolvedGate {
            controls: 1,
            target: y_matrix(),
        },
        StandardGate::CZ => ResolvedGate {
            controls: 1,
            target: z_matrix(),
        },
        StandardGate::CCX => ResolvedGate {
            controls: 2,
            target: x_matrix(),
        },
    })
}

/// Embed a 2×2 target into the fixed 4×4 controlled form.
///
/// Rows and columns are indexed `control + 2·target` (control is the
/// fastest-varying operand): the control's |0⟩ subspace carries the
/// identity, its |1⟩ subspace carries the target unitary.
pub fn controlled(target: &Array2<Scalar>) -> Array2<Scalar> {
    let o = Scalar::one;
    let z = Scalar::zero;
    let u = |i: usize, j: usize| target[[i, j]].clone();
    array![
        [o(), z(), z(), z()],
        [z(), u(0, 0), z(), u(0, 1)],
        [z(), z(), o(), z()],
        [z(), u(1, 0), z(), u(1, 1)]
    ]
}

/// The fixed controlled-NOT matrix used by both execution strategies.
pub fn cnot_matrix() -> Array2<Scalar> {
    controlled(&x_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{identity, matmul};

    #[test]
    fn test_cnot_matrix_literal() {
        let m = cnot_matrix();
        let expected = [
            [1, 0, 0, 0],
            [0, 0, 0, 1],
            [0, 0, 1, 0],
            [0, 1, 0, 0],
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m[[i, j]], Scalar::integer(expected[i][j]));
            }
        }
    }

    #[test]
    fn test_hadamard_entries_are_exact() {
        let h = h_matrix();
        let a = Scalar::sqrt2() * Scalar::rational(1, 2);
        assert_eq!(h[[0, 0]], a);
        assert_eq!(h[[1, 1]], -a);
        // H² = I, exactly.
        assert_eq!(matmul(&h, &h), identity(2));
    }

    #[test]
    fn test_s_squares_to_z() {
        let s = phase_matrix(Angle::pi_times(1, 2));
        assert_eq!(matmul(&s, &s), z_matrix());
    }

    #[test]
    fn test_t_fourth_power_is_z() {
        let t = phase_matrix(Angle::pi_times(1, 4));
        let t2 = matmul(&t, &t);
        assert_eq!(matmul(&t2, &t2), z_matrix());
    }

    #[test]
    fn test_dagger_pairs_cancel() {
        for (gate, dagger) in [
            (StandardGate::S, StandardGate::Sdg),
            (StandardGate::T, StandardGate::Tdg),
        ] {
            let g = resolve(&gate).unwrap().target;
            let d = resolve(&dagger).unwrap().target;
            assert_eq!(matmul(&g, &d), identity(2));
        }
    }

    #[test]
    fn test_resolve_control_counts() {
        assert_eq!(resolve(&StandardGate::H).unwrap().controls, 0);
        assert_eq!(resolve(&StandardGate::CX).unwrap().controls, 1);
        assert_eq!(resolve(&StandardGate::CU(vec![0.5])).unwrap().controls, 1);
        assert_eq!(resolve(&StandardGate::CCX).unwrap().controls, 2);
    }

    #[test]
    fn test_resolve_u_validates_parameter_count() {
        assert!(resolve(&StandardGate::U(vec![])).is_err());
        assert!(resolve(&StandardGate::CU(vec![0.1, 0.2, 0.3, 0.4])).is_err());
    }

    #[test]
    fn test_u2_resolves_to_hadamard() {
        use std::f64::consts::PI;
        let u = resolve(&StandardGate::U(vec![0.0, PI])).unwrap();
        assert_eq!(u.target, h_matrix());
    }
}
