//! Exact complex arithmetic over roots of unity.
//!
//! A [`Cyclotomic`] value is a finite rational linear combination of
//! complex exponentials `e^{iπq}` with dyadic rational exponents
//! `q = k/2^m`. The exponent set `{k/2^m : 0 ≤ k < 2^m}` is a power basis
//! of the cyclotomic field Q(ζ_{2^{m+1}}), so the stored form is canonical:
//! two values are mathematically equal exactly when their term maps are
//! structurally equal, and a value is zero exactly when it has no terms.
//!
//! Every scalar the simulators produce from regulated angles lives in this
//! ring: rationals (`e^{iπ·0}`), `i = e^{iπ/2}`, the T-gate phase
//! `e^{iπ/4}`, and `√2 = e^{iπ/4} + e^{-iπ/4}` with all of their sums and
//! products.
//!
//! Invariants maintained by every constructor and operation:
//! - exponents are reduced into `[0, 1)` using `e^{iπ(q+1)} = -e^{iπq}`,
//! - exponents have power-of-two denominators,
//! - no term has a zero coefficient.

use num_complex::Complex64;
use num_rational::Rational64;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact element of a power-of-two cyclotomic field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<(Rational64, Rational64)>",
    into = "Vec<(Rational64, Rational64)>"
)]
pub struct Cyclotomic {
    /// Exponent `q` of `e^{iπq}` → rational coefficient.
    terms: BTreeMap<Rational64, Rational64>,
}

/// Fold `coeff · e^{iπq}` into `terms`, reducing the exponent into `[0, 1)`.
fn insert_term(terms: &mut BTreeMap<Rational64, Rational64>, q: Rational64, coeff: Rational64) {
    if coeff.is_zero() {
        return;
    }
    let two = Rational64::from_integer(2);
    // Reduce modulo 2π, then fold the upper half with e^{iπ(q+1)} = -e^{iπq}.
    let mut q = q - (q / two).floor() * two;
    let mut coeff = coeff;
    if q >= Rational64::from_integer(1) {
        q -= Rational64::from_integer(1);
        coeff = -coeff;
    }
    debug_assert!((*q.denom() as u64).is_power_of_two(), "non-dyadic exponent");

    let updated = terms.get(&q).copied().unwrap_or_else(Rational64::zero) + coeff;
    if updated.is_zero() {
        terms.remove(&q);
    } else {
        terms.insert(q, updated);
    }
}

impl Cyclotomic {
    /// The additive identity.
    pub fn zero() -> Self {
        Cyclotomic::default()
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Cyclotomic::from_rational(Rational64::one())
    }

    /// The imaginary unit `i = e^{iπ/2}`.
    pub fn i() -> Self {
        Cyclotomic::root_of_unity(Rational64::new(1, 2))
    }

    /// `√2 = e^{iπ/4} + e^{-iπ/4}`.
    pub fn sqrt2() -> Self {
        Cyclotomic::root_of_unity(Rational64::new(1, 4))
            + Cyclotomic::root_of_unity(Rational64::new(-1, 4))
    }

    /// An exact rational value.
    pub fn from_rational(value: Rational64) -> Self {
        let mut terms = BTreeMap::new();
        insert_term(&mut terms, Rational64::zero(), value);
        Cyclotomic { terms }
    }

    /// An exact integer value.
    pub fn from_integer(value: i64) -> Self {
        Cyclotomic::from_rational(Rational64::from_integer(value))
    }

    /// The root of unity `e^{iπq}` for a dyadic rational `q`.
    pub fn root_of_unity(q: Rational64) -> Self {
        let mut terms = BTreeMap::new();
        insert_term(&mut terms, q, Rational64::one());
        Cyclotomic { terms }
    }

    /// Check for the additive identity. Exact: the stored form is canonical.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Return the value as a rational if it has no exponential part.
    pub fn as_rational(&self) -> Option<Rational64> {
        match self.terms.len() {
            0 => Some(Rational64::zero()),
            1 => self.terms.get(&Rational64::zero()).copied(),
            _ => None,
        }
    }

    /// Multiply by an exact rational.
    #[must_use]
    pub fn scale(&self, factor: Rational64) -> Self {
        if factor.is_zero() {
            return Cyclotomic::zero();
        }
        let terms = self.terms.iter().map(|(q, c)| (*q, c * factor)).collect();
        Cyclotomic { terms }
    }

    /// Complex conjugate: negate every exponent.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        let mut terms = BTreeMap::new();
        for (q, c) in &self.terms {
            insert_term(&mut terms, -q, *c);
        }
        Cyclotomic { terms }
    }

    /// Numeric value, for rendering and cross-checks only.
    pub fn to_complex64(&self) -> Complex64 {
        self.terms
            .iter()
            .map(|(q, c)| {
                let coeff = c.to_f64().unwrap_or(f64::NAN);
                coeff * Complex64::from_polar(1.0, PI * q.to_f64().unwrap_or(f64::NAN))
            })
            .sum()
    }
}

impl Add for Cyclotomic {
    type Output = Cyclotomic;

    fn add(self, rhs: Cyclotomic) -> Cyclotomic {
        let mut terms = self.terms;
        for (q, c) in rhs.terms {
            insert_term(&mut terms, q, c);
        }
        Cyclotomic { terms }
    }
}

impl Sub for Cyclotomic {
    type Output = Cyclotomic;

    fn sub(self, rhs: Cyclotomic) -> Cyclotomic {
        self + (-rhs)
    }
}

impl Neg for Cyclotomic {
    type Output = Cyclotomic;

    fn neg(self) -> Cyclotomic {
        let terms = self.terms.into_iter().map(|(q, c)| (q, -c)).collect();
        Cyclotomic { terms }
    }
}

impl Mul for Cyclotomic {
    type Output = Cyclotomic;

    fn mul(self, rhs: Cyclotomic) -> Cyclotomic {
        let mut terms = BTreeMap::new();
        for (qa, ca) in &self.terms {
            for (qb, cb) in &rhs.terms {
                insert_term(&mut terms, qa + qb, ca * cb);
            }
        }
        Cyclotomic { terms }
    }
}

impl From<Vec<(Rational64, Rational64)>> for Cyclotomic {
    fn from(raw: Vec<(Rational64, Rational64)>) -> Self {
        let mut terms = BTreeMap::new();
        for (q, c) in raw {
            insert_term(&mut terms, q, c);
        }
        Cyclotomic { terms }
    }
}

impl From<Cyclotomic> for Vec<(Rational64, Rational64)> {
    fn from(value: Cyclotomic) -> Self {
        value.terms.into_iter().collect()
    }
}

/// Format a rational as `n` or `n/d`.
fn fmt_rational(r: Rational64) -> String {
    if r.is_integer() {
        format!("{}", r.to_integer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/// Format `|coeff| · body` where `body` is `sqrt(2)`, `I` or `sqrt(2)*I`.
fn fmt_scaled(coeff: Rational64, body: &str) -> String {
    let (n, d) = (coeff.numer().abs(), *coeff.denom());
    match (n, d) {
        (1, 1) => body.to_string(),
        (_, 1) => format!("{n}*{body}"),
        (1, _) => format!("{body}/{d}"),
        _ => format!("{n}*{body}/{d}"),
    }
}

/// Append a signed part to a sum under construction.
fn push_part(out: &mut String, positive: bool, body: &str) {
    if out.is_empty() {
        if !positive {
            out.push('-');
        }
    } else {
        out.push_str(if positive { " + " } else { " - " });
    }
    out.push_str(body);
}

impl fmt::Display for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        // Values over {1, i, e^{iπ/4}, e^{i3π/4}} decompose into the familiar
        // basis {1, √2, i, i√2}; everything the fixed catalog produces prints
        // this way.
        let simple = [
            Rational64::zero(),
            Rational64::new(1, 2),
            Rational64::new(1, 4),
            Rational64::new(3, 4),
        ];
        if self.terms.keys().all(|q| simple.contains(q)) {
            let get = |q: Rational64| self.terms.get(&q).copied().unwrap_or_else(Rational64::zero);
            let re = get(simple[0]);
            let im = get(simple[1]);
            let p = get(simple[2]);
            let q34 = get(simple[3]);
            let half = Rational64::new(1, 2);
            // e^{iπ/4} = √2/2 + i√2/2, e^{i3π/4} = -√2/2 + i√2/2.
            let re_rad = (p - q34) * half;
            let im_rad = (p + q34) * half;

            let mut out = String::new();
            if !re.is_zero() {
                push_part(&mut out, re > Rational64::zero(), &fmt_rational(re.abs()));
            }
            if !re_rad.is_zero() {
                push_part(
                    &mut out,
                    re_rad > Rational64::zero(),
                    &fmt_scaled(re_rad, "sqrt(2)"),
                );
            }
            if !im.is_zero() {
                push_part(&mut out, im > Rational64::zero(), &fmt_scaled(im, "I"));
            }
            if !im_rad.is_zero() {
                push_part(
                    &mut out,
                    im_rad > Rational64::zero(),
                    &fmt_scaled(im_rad, "sqrt(2)*I"),
                );
            }
            return write!(f, "{out}");
        }

        // General dyadic exponents print as explicit exponentials.
        let mut out = String::new();
        for (q, c) in &self.terms {
            let body = if q.is_zero() {
                fmt_rational(c.abs())
            } else {
                fmt_scaled(*c, &format!("exp(I*pi*{})", fmt_rational(*q)))
            };
            push_part(&mut out, *c > Rational64::zero(), &body);
        }
        write!(f, "{out}")
    }
}
