//! Quantities whose dimension is only known at runtime.
//!
//! [`AnyQuantity`] is the tagged form of [`Quantity`]: it carries its [`DimensionKind`] as data, so values of
//! different dimensions can live in the same collection or come from the same lookup. Every operation that combines
//! two of them checks the tags first and fails with [`QuantityError::IncompatibleDimension`] on a mismatch.
//!
//! ```rust
//! use measure_core::{AnyQuantity, DimensionKind, QuantityError};
//!
//! let g = AnyQuantity::new(DimensionKind::Mass, 1, "g").unwrap();
//! let m = AnyQuantity::new(DimensionKind::Length, 1, "m").unwrap();
//! assert!(matches!(g.try_eq(&m), Err(QuantityError::IncompatibleDimension { .. })));
//! ```

use crate::config::ConversionConfig;
use crate::dimension::{Dimension, DimensionKind};
use crate::error::{QuantityError, QuantityResult};
use crate::magnitude::decimal_from_f64;
use crate::quantity::Quantity;
use crate::table::{Unit, UnitTable};
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A quantity tagged with its dimension at runtime.
#[derive(Clone, Debug)]
pub struct AnyQuantity {
    dimension: DimensionKind,
    magnitude: BigDecimal,
    unit: &'static Unit,
}

impl AnyQuantity {
    /// Creates a quantity of `dimension`.
    ///
    /// Fails with [`QuantityError::UnknownUnit`] if `unit` is not a symbol of `dimension`.
    pub fn new(
        dimension: DimensionKind,
        magnitude: impl Into<BigDecimal>,
        unit: &str,
    ) -> QuantityResult<Self> {
        let unit = dimension.table().resolve(unit)?;
        Ok(Self {
            dimension,
            magnitude: magnitude.into(),
            unit,
        })
    }

    /// Creates a quantity from a binary float; see [`Quantity::from_f64`].
    pub fn from_f64(dimension: DimensionKind, magnitude: f64, unit: &str) -> QuantityResult<Self> {
        let unit = dimension.table().resolve(unit)?;
        Ok(Self {
            dimension,
            magnitude: decimal_from_f64(magnitude)?,
            unit,
        })
    }

    /// Dimension tag.
    pub fn dimension(&self) -> DimensionKind {
        self.dimension
    }

    /// The magnitude, in [`AnyQuantity::unit`].
    pub fn magnitude(&self) -> &BigDecimal {
        &self.magnitude
    }

    /// The unit the magnitude is expressed in.
    pub fn unit(&self) -> &'static Unit {
        self.unit
    }

    /// Canonical symbol of [`AnyQuantity::unit`].
    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    fn table(&self) -> &'static UnitTable {
        self.dimension.table()
    }

    /// Returns the magnitude expressed in `target`.
    pub fn convert(&self, target: &str) -> QuantityResult<BigDecimal> {
        self.convert_with(target, ConversionConfig::global())
    }

    /// [`AnyQuantity::convert`] under an explicit configuration.
    pub fn convert_with(&self, target: &str, config: &ConversionConfig) -> QuantityResult<BigDecimal> {
        let table = self.table();
        let target = table.resolve(target)?;
        Ok(table.convert(&self.magnitude, self.unit, target, config))
    }

    /// Returns an equal quantity expressed in `target`.
    pub fn to(&self, target: &str) -> QuantityResult<Self> {
        let table = self.table();
        let target = table.resolve(target)?;
        Ok(Self {
            dimension: self.dimension,
            magnitude: table.convert(&self.magnitude, self.unit, target, ConversionConfig::global()),
            unit: target,
        })
    }

    /// The magnitude expressed in the base unit of the dimension.
    pub fn to_base(&self) -> BigDecimal {
        self.table()
            .to_base(&self.magnitude, self.unit, ConversionConfig::global())
    }

    fn ensure_same_dimension(&self, other: &AnyQuantity) -> QuantityResult<()> {
        if self.dimension == other.dimension {
            Ok(())
        } else {
            Err(QuantityError::incompatible(self.dimension, other.dimension))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fallible comparison
    // ─────────────────────────────────────────────────────────────────────────

    /// Orders two quantities of the same dimension.
    pub fn try_cmp(&self, other: &AnyQuantity) -> QuantityResult<Ordering> {
        self.ensure_same_dimension(other)?;
        Ok(self.table().compare(
            (&self.magnitude, self.unit),
            (&other.magnitude, other.unit),
            ConversionConfig::global(),
        ))
    }

    /// `self == other`.
    pub fn try_eq(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// `self != other`.
    pub fn try_ne(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Equal)
    }

    /// `self < other`.
    pub fn try_lt(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// `self <= other`.
    pub fn try_le(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    /// `self > other`.
    pub fn try_gt(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// `self >= other`.
    pub fn try_ge(&self, other: &AnyQuantity) -> QuantityResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fallible arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum in the unit of `self`; see [`UnitTable::sum`] for temperatures.
    pub fn checked_add(&self, other: &AnyQuantity) -> QuantityResult<AnyQuantity> {
        self.ensure_same_dimension(other)?;
        let magnitude = self.table().sum(
            (&self.magnitude, self.unit),
            (&other.magnitude, other.unit),
            ConversionConfig::global(),
        );
        Ok(self.with_magnitude(magnitude))
    }

    /// Difference in the unit of `self`; see [`UnitTable::difference`] for temperatures.
    pub fn checked_sub(&self, other: &AnyQuantity) -> QuantityResult<AnyQuantity> {
        self.ensure_same_dimension(other)?;
        let magnitude = self.table().difference(
            (&self.magnitude, self.unit),
            (&other.magnitude, other.unit),
            ConversionConfig::global(),
        );
        Ok(self.with_magnitude(magnitude))
    }

    fn with_magnitude(&self, magnitude: BigDecimal) -> AnyQuantity {
        AnyQuantity {
            dimension: self.dimension,
            magnitude,
            unit: self.unit,
        }
    }
}

impl Display for AnyQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol())
    }
}

impl<D: Dimension> From<Quantity<D>> for AnyQuantity {
    fn from(quantity: Quantity<D>) -> Self {
        let unit = quantity.unit();
        AnyQuantity {
            dimension: D::KIND,
            magnitude: quantity.into_magnitude(),
            unit,
        }
    }
}

impl<D: Dimension> TryFrom<AnyQuantity> for Quantity<D> {
    type Error = QuantityError;

    fn try_from(value: AnyQuantity) -> Result<Self, Self::Error> {
        if value.dimension != D::KIND {
            return Err(QuantityError::incompatible(D::KIND, value.dimension));
        }
        Ok(Quantity::from_parts(value.magnitude, value.unit))
    }
}
