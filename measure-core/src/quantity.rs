//! Quantity type and its implementations.

use crate::config::ConversionConfig;
use crate::dimension::{Dimension, DimensionKind};
use crate::error::QuantityResult;
use crate::magnitude::decimal_from_f64;
use crate::table::Unit;
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;

/// A magnitude together with a unit of dimension `D`.
///
/// The magnitude is an arbitrary-precision decimal and is stored exactly as given; nothing is converted until asked
/// for. Quantities of different dimensions are different types, so comparing a mass with a length does not compile.
///
/// # Examples
///
/// ```rust
/// use measure_core::length::Lengths;
/// use bigdecimal::BigDecimal;
///
/// let d = Lengths::new(1, "km").unwrap();
/// assert_eq!(d.convert("m").unwrap(), BigDecimal::from(1000));
/// assert!(d > Lengths::new(999, "m").unwrap());
/// ```
///
/// ```compile_fail
/// use measure_core::length::Lengths;
/// use measure_core::mass::Masses;
///
/// let _ = Masses::new(1, "g").unwrap() == Lengths::new(1, "m").unwrap();
/// ```
pub struct Quantity<D: Dimension> {
    magnitude: BigDecimal,
    unit: &'static Unit,
    _dim: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Creates a quantity of `magnitude` in the unit written `unit`.
    ///
    /// Fails with [`crate::QuantityError::UnknownUnit`] if `unit` is not a symbol of this dimension.
    ///
    /// ```rust
    /// use measure_core::mass::Masses;
    ///
    /// let m = Masses::new(250, "mg").unwrap();
    /// assert_eq!(m.symbol(), "mg");
    /// assert!(Masses::new(1, "lb").is_err());
    /// ```
    pub fn new(magnitude: impl Into<BigDecimal>, unit: &str) -> QuantityResult<Self> {
        let unit = D::table().resolve(unit)?;
        Ok(Self::from_parts(magnitude.into(), unit))
    }

    /// Creates a quantity from a binary float, keeping the float's shortest decimal text (`0.1` is exactly `0.1`).
    ///
    /// Fails with [`crate::QuantityError::InvalidMagnitude`] for NaN and infinities.
    pub fn from_f64(magnitude: f64, unit: &str) -> QuantityResult<Self> {
        let unit = D::table().resolve(unit)?;
        Ok(Self::from_parts(decimal_from_f64(magnitude)?, unit))
    }

    pub(crate) fn from_parts(magnitude: BigDecimal, unit: &'static Unit) -> Self {
        Self {
            magnitude,
            unit,
            _dim: PhantomData,
        }
    }

    /// The magnitude, in [`Quantity::unit`].
    pub fn magnitude(&self) -> &BigDecimal {
        &self.magnitude
    }

    /// Consumes the quantity, returning its magnitude.
    pub fn into_magnitude(self) -> BigDecimal {
        self.magnitude
    }

    /// The unit the magnitude is expressed in.
    pub fn unit(&self) -> &'static Unit {
        self.unit
    }

    /// Canonical symbol of [`Quantity::unit`].
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    /// Dimension of this quantity.
    pub fn dimension(&self) -> DimensionKind {
        D::KIND
    }

    /// Returns the magnitude expressed in `target`.
    ///
    /// Converting to the quantity's own unit returns the magnitude untouched.
    ///
    /// ```rust
    /// use measure_core::time::Times;
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    ///
    /// let t = Times::new(1, "s").unwrap();
    /// assert_eq!(t.convert("as").unwrap(), BigDecimal::from_str("1e18").unwrap());
    /// assert!(t.convert("xyz").is_err());
    /// ```
    pub fn convert(&self, target: &str) -> QuantityResult<BigDecimal> {
        self.convert_with(target, ConversionConfig::global())
    }

    /// [`Quantity::convert`] under an explicit configuration.
    pub fn convert_with(&self, target: &str, config: &ConversionConfig) -> QuantityResult<BigDecimal> {
        let table = D::table();
        let target = table.resolve(target)?;
        Ok(table.convert(&self.magnitude, self.unit, target, config))
    }

    /// Returns an equal quantity expressed in `target`.
    pub fn to(&self, target: &str) -> QuantityResult<Self> {
        let table = D::table();
        let target = table.resolve(target)?;
        Ok(Self::from_parts(self.in_unit(target), target))
    }

    /// The magnitude expressed in the base unit of the dimension.
    pub fn to_base(&self) -> BigDecimal {
        D::table().to_base(&self.magnitude, self.unit, ConversionConfig::global())
    }

    /// Returns the absolute value, in the same unit.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.magnitude.abs(), self.unit)
    }

    fn in_unit(&self, target: &Unit) -> BigDecimal {
        D::table().convert(&self.magnitude, self.unit, target, ConversionConfig::global())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        Self::from_parts(self.magnitude.clone(), self.unit)
    }
}

impl<D: Dimension> Debug for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quantity")
            .field("dimension", &D::KIND)
            .field("magnitude", &self.magnitude)
            .field("unit", &self.unit.symbol())
            .finish()
    }
}

impl<D: Dimension> Display for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (through the base unit)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<D: Dimension> Eq for Quantity<D> {}

impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Dimension> Ord for Quantity<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        D::table().compare(
            (&self.magnitude, self.unit),
            (&other.magnitude, other.unit),
            ConversionConfig::global(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    /// Sum in the unit of the left operand. Temperatures are added as absolute kelvin values.
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<D: Dimension> Add for &Quantity<D> {
    type Output = Quantity<D>;

    fn add(self, rhs: Self) -> Quantity<D> {
        let magnitude = D::table().sum(
            (&self.magnitude, self.unit),
            (&rhs.magnitude, rhs.unit),
            ConversionConfig::global(),
        );
        Quantity::from_parts(magnitude, self.unit)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;

    /// Difference in the unit of the left operand. Temperatures are subtracted as absolute kelvin values.
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<D: Dimension> Sub for &Quantity<D> {
    type Output = Quantity<D>;

    fn sub(self, rhs: Self) -> Quantity<D> {
        let magnitude = D::table().difference(
            (&self.magnitude, self.unit),
            (&rhs.magnitude, rhs.unit),
            ConversionConfig::global(),
        );
        Quantity::from_parts(magnitude, self.unit)
    }
}

impl<D: Dimension> Mul<BigDecimal> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: BigDecimal) -> Self {
        Self::from_parts(self.magnitude * rhs, self.unit)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.magnitude, self.unit)
    }
}
