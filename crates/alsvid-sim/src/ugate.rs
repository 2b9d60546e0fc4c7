//! The general single-qubit rotation matrix.

use alsvid_exact::{Angle, Scalar, regulate};
use ndarray::{Array2, array};

use crate::error::{SimError, SimResult};

/// Normalize a 1–3 element parameter list to [θ, φ, λ].
///
/// The shorter forms front-pad with fixed angles: one parameter is a pure
/// phase (θ = 0, φ = 0), two parameters set θ = π/2 exactly. Anything else
/// is an [`SimError::InvalidParameterCount`].
fn pad_parameters(params: &[f64]) -> SimResult<[Angle; 3]> {
    match params {
        [lambda] => Ok([Angle::zero(), Angle::zero(), regulate(*lambda)]),
        [phi, lambda] => Ok([Angle::pi_times(1, 2), regulate(*phi), regulate(*lambda)]),
        [theta, phi, lambda] => Ok([regulate(*theta), regulate(*phi), regulate(*lambda)]),
        _ => Err(SimError::InvalidParameterCount { got: params.len() }),
    }
}

/// Compute the exact matrix of a parameterized U gate.
///
/// Each raw parameter is regulated onto the canonical π-fractions first,
/// then the matrix is
///
/// ```text
/// [[cos(θ/2),        -e^{iλ}·sin(θ/2)      ],
///  [e^{iφ}·sin(θ/2),  e^{i(φ+λ)}·cos(θ/2)  ]]
/// ```
///
/// with every entry in exact symbolic form.
pub fn compute_ugate_matrix(params: &[f64]) -> SimResult<Array2<Scalar>> {
    let [theta, phi, lambda] = pad_parameters(params)?;

    let cos = Scalar::cos(theta.half());
    let sin = Scalar::sin(theta.half());

    Ok(array![
        [
            cos.clone(),
            -(Scalar::cis(lambda) * sin.clone())
        ],
        [
            Scalar::cis(phi) * sin,
            Scalar::cis(phi + lambda) * cos
        ]
    ])
}
