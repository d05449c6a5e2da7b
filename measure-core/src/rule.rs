//! Conversion rules between a unit and the base unit of its dimension.
//!
//! A rule is an affine map written in shift-then-scale form:
//!
//! ```text
//! base  = (value + shift) * numer / denom
//! value = base * denom / numer - shift
//! ```
//!
//! which is the usual `base = scale * value + offset` with `scale = numer / denom` and `offset = shift * scale`.
//! Keeping the shift and the two halves of the scale apart means every SI-prefix rule is a plain multiplication by a
//! power of ten, and the only division ever performed is Fahrenheit's `/ 9` (and `/ 5` on the way back, which always
//! terminates).

use crate::config::ConversionConfig;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, One, Zero};

/// An exact multiplicative factor `numer / denom`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    numer: BigDecimal,
    denom: BigDecimal,
}

impl Factor {
    /// The factor `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero; rules are built from constants, never from user input.
    pub(crate) fn new(numer: BigDecimal, denom: BigDecimal) -> Self {
        assert!(
            !numer.is_zero() && !denom.is_zero(),
            "conversion factor must be non-zero"
        );
        Self { numer, denom }
    }

    /// The factor `1`.
    pub fn one() -> Self {
        Self {
            numer: BigDecimal::one(),
            denom: BigDecimal::one(),
        }
    }

    /// The exact factor `10^exponent`.
    ///
    /// ```rust
    /// use measure_core::Factor;
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Factor::power_of_ten(-18).numer(), &BigDecimal::from_str("1e-18").unwrap());
    /// ```
    pub fn power_of_ten(exponent: i64) -> Self {
        Self {
            numer: BigDecimal::new(1.into(), -exponent),
            denom: BigDecimal::one(),
        }
    }

    /// Numerator.
    pub fn numer(&self) -> &BigDecimal {
        &self.numer
    }

    /// Denominator.
    pub fn denom(&self) -> &BigDecimal {
        &self.denom
    }

    /// The reciprocal factor. Powers of ten stay pure multiplications.
    pub fn inverse(&self) -> Self {
        match power_of_ten_exponent(&self.numer) {
            Some(exponent) if self.denom.is_one() => Self::power_of_ten(-exponent),
            _ => Self {
                numer: self.denom.clone(),
                denom: self.numer.clone(),
            },
        }
    }

    /// Whether this is the factor `1`.
    pub fn is_one(&self) -> bool {
        self.numer == self.denom
    }

    pub(crate) fn apply(&self, value: BigDecimal, config: &ConversionConfig) -> BigDecimal {
        let scaled = if self.numer.is_one() {
            value
        } else {
            value * &self.numer
        };
        if self.denom.is_one() {
            scaled
        } else {
            divide(&scaled, &self.denom, config.division_precision())
        }
    }
}

/// `numer / denom`, exact when the quotient terminates, otherwise correctly rounded to `precision` significant
/// digits.
fn divide(numer: &BigDecimal, denom: &BigDecimal, precision: u64) -> BigDecimal {
    let (n, n_scale) = numer.as_bigint_and_exponent();
    let (d, d_scale) = denom.as_bigint_and_exponent();
    if n.is_zero() {
        return numer.clone();
    }
    let negative = (n.sign() == Sign::Minus) != (d.sign() == Sign::Minus);

    // Enough extra digits that the integer quotient carries more than `precision` significant digits.
    let extra = precision + decimal_digits(&d) + 2;
    let shifted = n * BigInt::from(10u8).pow(extra as u32);
    let mut quotient = &shifted / &d;
    let remainder = &shifted % &d;
    let mut scale = n_scale - d_scale + extra as i64;

    if remainder.is_zero() {
        // Terminating: drop only the zeros introduced by the shift.
        let ten = BigInt::from(10u8);
        while scale > n_scale - d_scale && (&quotient % &ten).is_zero() {
            quotient /= &ten;
            scale -= 1;
        }
        return BigDecimal::new(quotient, scale);
    }

    // Sticky digit: the truncated tail is non-zero, so a trailing 5 must never read as an exact tie.
    let sticky = if negative { -BigInt::one() } else { BigInt::one() };
    quotient = quotient * 10 + sticky;
    scale += 1;
    BigDecimal::new(quotient, scale).with_prec(precision)
}

fn decimal_digits(value: &BigInt) -> u64 {
    value.magnitude().to_string().len() as u64
}

/// Returns `n` when `value == 10^n`.
fn power_of_ten_exponent(value: &BigDecimal) -> Option<i64> {
    let (digits, scale) = value.as_bigint_and_exponent();
    let text = digits.to_string();
    let (head, tail) = text.split_at(1);
    if head != "1" || tail.bytes().any(|b| b != b'0') {
        return None;
    }
    // value == 1 followed by `tail.len()` zeros, times 10^-scale
    Some(tail.len() as i64 - scale)
}

/// How a unit relates to the base unit of its dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRule {
    shift: BigDecimal,
    to_base: Factor,
    from_base: Factor,
}

impl ConversionRule {
    /// The rule of the base unit itself.
    pub fn identity() -> Self {
        Self::scale(Factor::one())
    }

    /// A purely multiplicative rule: `base = value * factor`.
    pub fn scale(factor: Factor) -> Self {
        Self::affine(BigDecimal::zero(), factor)
    }

    /// An affine rule: `base = (value + shift) * factor`.
    pub fn affine(shift: BigDecimal, factor: Factor) -> Self {
        let from_base = factor.inverse();
        Self {
            shift,
            to_base: factor,
            from_base,
        }
    }

    /// Whether this rule leaves values untouched.
    pub fn is_identity(&self) -> bool {
        self.shift.is_zero() && self.to_base.is_one()
    }

    /// Whether this rule only scales (no zero-point shift).
    pub fn is_multiplicative(&self) -> bool {
        self.shift.is_zero()
    }

    /// Value added before scaling into the base unit.
    pub fn shift(&self) -> &BigDecimal {
        &self.shift
    }

    /// Factor applied into the base unit.
    pub fn factor(&self) -> &Factor {
        &self.to_base
    }

    /// Converts `value` (in this rule's unit) into the base unit.
    pub fn to_base(&self, value: &BigDecimal, config: &ConversionConfig) -> BigDecimal {
        let shifted = if self.shift.is_zero() {
            value.clone()
        } else {
            value + &self.shift
        };
        self.to_base.apply(shifted, config)
    }

    /// Converts `base` (in the base unit) into this rule's unit.
    pub fn from_base(&self, base: BigDecimal, config: &ConversionConfig) -> BigDecimal {
        let scaled = self.from_base.apply(base, config);
        if self.shift.is_zero() {
            scaled
        } else {
            scaled - &self.shift
        }
    }
}
