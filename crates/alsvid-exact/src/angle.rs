//! Rotation angles as exact fractions of π.
//!
//! Gate parameters arrive from the boundary as floats, but floats produced
//! by upstream compilers are almost always approximations of a handful of
//! π-fractions. [`regulate`] snaps a float onto the canonical set
//! {π, π/2, 2π, π/4} so that everything downstream can stay in exact
//! arithmetic; any other value is kept as the float it was.

use num_rational::Rational64;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Margin within which a float angle is identified with a π-fraction.
const ERROR_MARGIN: f64 = 0.01;

/// A rotation angle, exact where possible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// An exact rational multiple of π.
    PiRational(Rational64),
    /// Any other value, kept unchanged.
    Float(f64),
}

impl Angle {
    /// The zero angle.
    pub fn zero() -> Self {
        Angle::PiRational(Rational64::from_integer(0))
    }

    /// The angle π.
    pub fn pi() -> Self {
        Angle::PiRational(Rational64::from_integer(1))
    }

    /// The angle π · numer/denom.
    pub fn pi_times(numer: i64, denom: i64) -> Self {
        Angle::PiRational(Rational64::new(numer, denom))
    }

    /// Check whether this angle is an exact π-fraction.
    pub fn is_exact(&self) -> bool {
        matches!(self, Angle::PiRational(_))
    }

    /// Numeric value in radians.
    pub fn as_f64(&self) -> f64 {
        match self {
            Angle::PiRational(r) => r.to_f64().unwrap_or(f64::NAN) * PI,
            Angle::Float(v) => *v,
        }
    }

    /// Half of this angle. Exactness is preserved.
    pub fn half(&self) -> Self {
        match self {
            Angle::PiRational(r) => Angle::PiRational(r / Rational64::from_integer(2)),
            Angle::Float(v) => Angle::Float(v / 2.0),
        }
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        match (self, rhs) {
            (Angle::PiRational(a), Angle::PiRational(b)) => Angle::PiRational(a + b),
            (a, b) => Angle::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        match self {
            Angle::PiRational(r) => Angle::PiRational(-r),
            Angle::Float(v) => Angle::Float(-v),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::PiRational(r) if r.is_integer() => match r.to_integer() {
                0 => write!(f, "0"),
                1 => write!(f, "pi"),
                -1 => write!(f, "-pi"),
                n => write!(f, "{n}*pi"),
            },
            Angle::PiRational(r) => {
                let (n, d) = (*r.numer(), *r.denom());
                match n {
                    1 => write!(f, "pi/{d}"),
                    -1 => write!(f, "-pi/{d}"),
                    _ => write!(f, "{n}*pi/{d}"),
                }
            }
            Angle::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Canonicalize `theta` to a recognizable exact fraction of π.
///
/// Compares `theta` numerically (tolerance 0.01) against π, π/2, 2π and
/// π/4, in that order; on a match the exact fraction is substituted,
/// otherwise the raw value is kept unchanged. Pure, infallible.
pub fn regulate(theta: f64) -> Angle {
    let targets = [
        (PI, Rational64::from_integer(1)),
        (PI / 2.0, Rational64::new(1, 2)),
        (PI * 2.0, Rational64::from_integer(2)),
        (PI / 4.0, Rational64::new(1, 4)),
    ];

    for (value, fraction) in targets {
        if (theta - value).abs() < ERROR_MARGIN {
            return Angle::PiRational(fraction);
        }
    }

    Angle::Float(theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulate_pi_targets() {
        assert_eq!(regulate(3.14159265), Angle::pi());
        assert_eq!(regulate(PI), Angle::pi());
        assert_eq!(regulate(1.5707), Angle::pi_times(1, 2));
        assert_eq!(regulate(6.2832), Angle::pi_times(2, 1));
        assert_eq!(regulate(0.7854), Angle::pi_times(1, 4));
    }

    #[test]
    fn test_regulate_keeps_other_floats() {
        assert_eq!(regulate(0.3), Angle::Float(0.3));
        // Just outside the margin of π/4.
        assert_eq!(regulate(0.8), Angle::Float(0.8));
        // Negative angles never snap.
        assert_eq!(regulate(-PI), Angle::Float(-PI));
    }

    #[test]
    fn test_half_is_exact() {
        assert_eq!(Angle::pi().half(), Angle::pi_times(1, 2));
        assert_eq!(Angle::pi_times(1, 4).half(), Angle::pi_times(1, 8));
        assert_eq!(Angle::Float(0.3).half(), Angle::Float(0.15));
    }

    #[test]
    fn test_addition() {
        assert_eq!(
            Angle::pi_times(1, 2) + Angle::pi_times(1, 4),
            Angle::pi_times(3, 4)
        );
        match Angle::pi() + Angle::Float(0.5) {
            Angle::Float(v) => assert!((v - (PI + 0.5)).abs() < 1e-12),
            Angle::PiRational(_) => panic!("mixed sum must fall back to float"),
        }
    }

    #[test]
    fn test_negation_and_exactness() {
        assert_eq!(-Angle::pi_times(1, 4), Angle::pi_times(-1, 4));
        assert_eq!(-Angle::Float(0.3), Angle::Float(-0.3));
        assert!(Angle::pi().is_exact());
        assert!(!Angle::Float(0.3).is_exact());
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::pi().to_string(), "pi");
        assert_eq!(Angle::pi_times(1, 2).to_string(), "pi/2");
        assert_eq!(Angle::pi_times(-3, 4).to_string(), "-3*pi/4");
        assert_eq!(Angle::zero().to_string(), "0");
    }
}
