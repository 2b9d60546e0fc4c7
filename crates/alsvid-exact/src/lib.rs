//! Alsvid exact symbolic arithmetic
//!
//! The exact-arithmetic layer underneath the Alsvid symbolic simulators.
//! Amplitudes and operator entries are values of [`Scalar`]: exact elements
//! of power-of-two cyclotomic fields (rational combinations of `e^{iπq}`
//! with dyadic `q`) whenever they derive from recognized π-fractions, and
//! complex floats otherwise.
//!
//! # Components
//!
//! - **Angles**: [`Angle`] and [`regulate`], which canonicalizes a float
//!   rotation angle onto {π, π/2, 2π, π/4} within a 0.01 margin
//! - **Exact values**: [`Cyclotomic`], a canonical normal form with
//!   decidable equality — `(√2/2)² = 1/2` holds structurally, not just
//!   numerically
//! - **Scalars**: [`Scalar`], the exact/numeric sum type with ring
//!   operations, `cos`/`sin`/`cis` over angles, and human-readable display
//!   (`sqrt(2)/2`, `I`, `exp(I*pi*1/8)`)
//!
//! # Example
//!
//! ```rust
//! use alsvid_exact::{regulate, Angle, Scalar};
//!
//! // 1.5707 is close enough to π/2 to be canonicalized.
//! let theta = regulate(1.5707);
//! assert_eq!(theta, Angle::pi_times(1, 2));
//!
//! // cos(π/4) is exactly √2/2, and (√2/2)² is exactly 1/2.
//! let c = Scalar::cos(theta.half());
//! assert_eq!(c.clone() * c, Scalar::rational(1, 2));
//! ```

pub mod angle;
pub mod cyclotomic;
pub mod scalar;

pub use angle::{Angle, regulate};
pub use cyclotomic::Cyclotomic;
pub use scalar::Scalar;
