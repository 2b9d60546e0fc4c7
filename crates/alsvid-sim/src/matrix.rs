//! Dense symbolic linear algebra.
//!
//! Operators are `Array2<Scalar>` with exact entries, so the generic
//! ndarray dot products (which need machine scalars) do not apply; the
//! products here are written out explicitly. Everything is O(dim³) or
//! worse and intentionally so — exactness, not speed, is the point.

use alsvid_exact::Scalar;
use ndarray::Array2;
use num_traits::Zero;

/// The identity operator of the given dimension.
pub fn identity(dim: usize) -> Array2<Scalar> {
    Array2::eye(dim)
}

/// Kronecker product `a ⊗ b` (`b` varies fastest).
pub fn kron(a: &Array2<Scalar>, b: &Array2<Scalar>) -> Array2<Scalar> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    Array2::from_shape_fn((ar * br, ac * bc), |(i, j)| {
        a[[i / br, j / bc]].clone() * b[[i % br, j % bc]].clone()
    })
}

/// Matrix product `a · b`.
pub fn matmul(a: &Array2<Scalar>, b: &Array2<Scalar>) -> Array2<Scalar> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    debug_assert_eq!(ac, br, "dimension mismatch in matmul");
    Array2::from_shape_fn((ar, bc), |(i, j)| {
        (0..ac).fold(Scalar::zero(), |acc, k| {
            acc + a[[i, k]].clone() * b[[k, j]].clone()
        })
    })
}

/// Matrix-vector product `m · v` (operator acting on the left of a ket).
pub fn matvec(m: &Array2<Scalar>, v: &[Scalar]) -> Vec<Scalar> {
    let (rows, cols) = m.dim();
    debug_assert_eq!(cols, v.len(), "dimension mismatch in matvec");
    (0..rows)
        .map(|i| {
            (0..cols).fold(Scalar::zero(), |acc, k| {
                acc + m[[i, k]].clone() * v[k].clone()
            })
        })
        .collect()
}
