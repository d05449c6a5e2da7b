//! Core type system for physical quantities with exact decimal magnitudes.
//!
//! `measure-core` provides a small units model built around unit tables:
//!
//! - A *dimension* is an uninhabited marker type implementing [`Dimension`], mirrored at runtime by [`DimensionKind`].
//! - Every dimension owns one immutable [`UnitTable`] mapping unit symbols to [`ConversionRule`]s.
//! - A value is a [`Quantity<D>`]: a [`BigDecimal`] magnitude plus a unit of that table.
//! - Conversion always goes through the base unit of the dimension: `m`, `g`, `s`, `mol` and `K`.
//!
//! Most users should depend on `measure` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Exact conversion between SI-prefixed units (`Em` down to `am`) without floating-point drift.
//! - Affine temperature scales (`K`, `°C`, `°F`) that never lose their zero point.
//! - Compile-time separation of dimensions for typed quantities, and checked errors for runtime-tagged ones
//!   ([`AnyQuantity`]).
//!
//! # What this crate does not try to solve
//!
//! - Derived units (`m/s`, `kg·m²`) and dimensional algebra.
//! - Parsing of free-form quantity strings such as `"3 km"`.
//! - Serialization.
//!
//! # Quick start
//!
//! ```rust
//! use measure_core::mass::Masses;
//! use bigdecimal::BigDecimal;
//!
//! let kg = Masses::new(1, "kg").unwrap();
//! assert_eq!(kg.convert("g").unwrap(), BigDecimal::from(1000));
//! assert_eq!(kg, Masses::new(1000, "g").unwrap());
//! ```
//!
//! # Precision
//!
//! Prefix and Celsius conversions are exact. Only the Fahrenheit rule divides, and non-terminating quotients are
//! rounded to [`ConversionConfig::division_precision`] significant digits (100 by default, overridable through the
//! `MEASURE_DIVISION_PRECISION` environment variable or per call with [`Quantity::convert_with`]).
//!
//! # Panics and errors
//!
//! Fallible operations return [`QuantityResult`]. Unit lookups fail with [`QuantityError::UnknownUnit`], mixing
//! dimensions at runtime fails with [`QuantityError::IncompatibleDimension`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod config;
mod dimension;
mod dynamic;
mod error;
mod magnitude;
mod prefix;
mod quantity;
mod rule;
mod table;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{
    ConversionConfig, DEFAULT_DIVISION_PRECISION, DIVISION_PRECISION_ENV, MAX_DIVISION_PRECISION,
};
pub use dimension::{Dimension, DimensionKind};
pub use dynamic::AnyQuantity;
pub use error::{QuantityError, QuantityResult};
pub use magnitude::decimal_from_f64;
pub use prefix::Prefix;
pub use quantity::Quantity;
pub use rule::{ConversionRule, Factor};
pub use table::{Unit, UnitTable};

pub use bigdecimal::BigDecimal;

// ─────────────────────────────────────────────────────────────────────────────
// Unit tables (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::amount;
pub use units::length;
pub use units::mass;
pub use units::temperature;
pub use units::time;

/// Looks `symbol` up in every dimension's table.
///
/// Symbols never collide across dimensions, so at most one unit matches.
///
/// ```rust
/// use measure_core::{find_unit, DimensionKind};
///
/// assert_eq!(find_unit("mmol").unwrap().dimension(), DimensionKind::AmountOfSubstance);
/// assert!(find_unit("furlong").is_none());
/// ```
pub fn find_unit(symbol: &str) -> Option<&'static Unit> {
    DimensionKind::ALL
        .into_iter()
        .find_map(|kind| kind.table().get(symbol))
}
