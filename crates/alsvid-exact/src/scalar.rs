//! The scalar type carried by every amplitude and operator entry.
//!
//! A [`Scalar`] is exact whenever it can be: values reachable from
//! regulated π-fraction angles stay in the cyclotomic normal form and
//! compare exactly. Trigonometry of an unregulated float angle evaluates
//! numerically instead, and any arithmetic that touches a numeric value
//! stays numeric.

use num_complex::Complex64;
use num_rational::Rational64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::cyclotomic::Cyclotomic;

/// An exact-where-possible complex scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    /// Exact symbolic value.
    Exact(Cyclotomic),
    /// Numeric fallback for values derived from unregulated angles.
    Approx(Complex64),
}

impl Scalar {
    /// The imaginary unit.
    pub fn i() -> Self {
        Scalar::Exact(Cyclotomic::i())
    }

    /// An exact rational `numer/denom`.
    pub fn rational(numer: i64, denom: i64) -> Self {
        Scalar::Exact(Cyclotomic::from_rational(Rational64::new(numer, denom)))
    }

    /// An exact integer.
    pub fn integer(value: i64) -> Self {
        Scalar::Exact(Cyclotomic::from_integer(value))
    }

    /// `√2`, exact.
    pub fn sqrt2() -> Self {
        Scalar::Exact(Cyclotomic::sqrt2())
    }

    /// `e^{iθ}`.
    pub fn cis(angle: Angle) -> Self {
        match angle {
            Angle::PiRational(r) => Scalar::Exact(Cyclotomic::root_of_unity(r)),
            Angle::Float(v) => Scalar::Approx(Complex64::from_polar(1.0, v)),
        }
    }

    /// `cos θ`, exact for π-fractions via `(e^{iθ} + e^{-iθ})/2`.
    pub fn cos(angle: Angle) -> Self {
        match angle {
            Angle::PiRational(r) => {
                let sum = Cyclotomic::root_of_unity(r) + Cyclotomic::root_of_unity(-r);
                Scalar::Exact(sum.scale(Rational64::new(1, 2)))
            }
            Angle::Float(v) => Scalar::Approx(Complex64::new(v.cos(), 0.0)),
        }
    }

    /// `sin θ`, exact for π-fractions via `(e^{iθ} - e^{-iθ})/(2i)`.
    pub fn sin(angle: Angle) -> Self {
        match angle {
            Angle::PiRational(r) => {
                let diff = Cyclotomic::root_of_unity(r) - Cyclotomic::root_of_unity(-r);
                // 1/(2i) = -i/2 = e^{i3π/2}/2.
                let inv_2i = Cyclotomic::root_of_unity(Rational64::new(3, 2));
                Scalar::Exact((diff * inv_2i).scale(Rational64::new(1, 2)))
            }
            Angle::Float(v) => Scalar::Approx(Complex64::new(v.sin(), 0.0)),
        }
    }

    /// Check whether the value is still in the exact domain.
    pub fn is_exact(&self) -> bool {
        matches!(self, Scalar::Exact(_))
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        match self {
            Scalar::Exact(c) => Scalar::Exact(c.conjugate()),
            Scalar::Approx(z) => Scalar::Approx(z.conj()),
        }
    }

    /// Numeric value, for rendering and cross-checks only.
    pub fn to_complex64(&self) -> Complex64 {
        match self {
            Scalar::Exact(c) => c.to_complex64(),
            Scalar::Approx(z) => *z,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::zero()
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Exact(a), Scalar::Exact(b)) => Scalar::Exact(a + b),
            (a, b) => Scalar::Approx(a.to_complex64() + b.to_complex64()),
        }
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        self + (-rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Exact(a), Scalar::Exact(b)) => Scalar::Exact(a * b),
            (a, b) => Scalar::Approx(a.to_complex64() * b.to_complex64()),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Exact(c) => Scalar::Exact(-c),
            Scalar::Approx(z) => Scalar::Approx(-z),
        }
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::Exact(Cyclotomic::zero())
    }

    fn is_zero(&self) -> bool {
        match self {
            Scalar::Exact(c) => c.is_zero(),
            Scalar::Approx(z) => z.is_zero(),
        }
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::Exact(Cyclotomic::one())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Exact(c) => write!(f, "{c}"),
            Scalar::Approx(z) => {
                if z.im == 0.0 {
                    write!(f, "{}", z.re)
                } else if z.re == 0.0 {
                    write!(f, "{}*I", z.im)
                } else if z.im < 0.0 {
                    write!(f, "{} - {}*I", z.re, -z.im)
                } else {
                    write!(f, "{} + {}*I", z.re, z.im)
                }
            }
        }
    }
}
