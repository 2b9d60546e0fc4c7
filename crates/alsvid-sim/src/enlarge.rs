//! Operator enlargement: embedding small gates into the N-qubit space.

use alsvid_exact::Scalar;
use ndarray::Array2;
use num_traits::Zero;

use crate::error::{SimError, SimResult};
use crate::index::insert_two;
use crate::matrix::{identity, kron};

/// Enlarge a single-qubit operator to the full `2^N`-dimensional space.
///
/// The result is `I(2^{N-q-1}) ⊗ gate ⊗ I(2^q)` for target qubit `q`
/// (qubit 0 is the fastest-varying bit). Exponential in `N` by design.
pub fn enlarge_single(gate: &Array2<Scalar>, qubit: usize, num_qubits: usize) -> Array2<Scalar> {
    debug_assert!(qubit < num_qubits, "target qubit out of range");
    let above = identity(1 << (num_qubits - qubit - 1));
    let below = identity(1 << qubit);
    kron(&above, &kron(gate, &below))
}

/// Enlarge a two-qubit operator to the full `2^N`-dimensional space.
///
/// For every pair of bit values at `(qubit0, qubit1)` and every value of
/// the `N-2` spectator bits, the corresponding 4×4 gate entry is copied to
/// the position given by two bit insertions — one for the row, one for the
/// column. Gate rows and columns are indexed `qubit0_bit + 2·qubit1_bit`.
/// For `N = 2` the result is the unmodified gate matrix.
///
/// The two positions must be distinct; a violation is a
/// [`SimError::PreconditionViolation`].
pub fn enlarge_two(
    gate: &Array2<Scalar>,
    qubit0: usize,
    qubit1: usize,
    num_qubits: usize,
) -> SimResult<Array2<Scalar>> {
    if qubit0 == qubit1 {
        return Err(SimError::PreconditionViolation(format!(
            "two-qubit embedding requires distinct positions, got q{qubit0} twice"
        )));
    }
    debug_assert!(qubit0 < num_qubits && qubit1 < num_qubits, "qubit out of range");

    let dim = 1usize << num_qubits;
    let mut enlarged = Array2::from_elem((dim, dim), Scalar::zero());
    for spectator in 0..(1usize << (num_qubits - 2)) {
        for j in 0..2 {
            for k in 0..2 {
                for m in 0..2 {
                    for n in 0..2 {
                        let row = insert_two(j, qubit0, k, qubit1, spectator);
                        let col = insert_two(m, qubit0, n, qubit1, spectator);
                        enlarged[[row, col]] = gate[[j + 2 * k, m + 2 * n]].clone();
                    }
                }
            }
        }
    }
    Ok(enlarged)
}
