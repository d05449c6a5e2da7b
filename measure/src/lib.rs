//! Length, mass, time, amount of substance and temperature quantities with exact unit conversion.
//!
//! `measure` is the user-facing crate in this workspace. It re-exports the full API from `measure-core` plus the
//! quantity aliases and unit symbol constants of every dimension.
//!
//! A value is always a `Quantity<D>`, where `D` is an uninhabited type naming the dimension. The unit is data: a
//! symbol such as `"km"` resolved once against the dimension's unit table, so unknown symbols are reported when the
//! quantity is built or converted rather than silently accepted.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't compare grams to metres).
//! - Exact conversions between SI-prefixed units, from exa down to atto, backed by [`BigDecimal`].
//! - Kelvin, Celsius and Fahrenheit conversions that respect each scale's zero point.
//!
//! # What this crate does not try to solve
//!
//! - Derived units and dimensional algebra.
//! - Parsing quantity strings; only unit symbols are looked up.
//! - Serialization and locale-aware formatting.
//!
//! # Quick start
//!
//! ```rust
//! use measure::prelude::*;
//!
//! let d = Lengths::new(1000, "mm").unwrap();
//! assert_eq!(d, Lengths::new(1, "m").unwrap());
//! assert_eq!(d.convert("km").unwrap(), BigDecimal::new(1.into(), 3));
//!
//! let t = Temperatures::new(0, KELVIN).unwrap();
//! assert_eq!(t.convert(CELSIUS).unwrap(), BigDecimal::new((-27315).into(), 2));
//! ```
//!
//! Dimensions only known at runtime go through [`AnyQuantity`]:
//!
//! ```rust
//! use measure::{AnyQuantity, DimensionKind, QuantityError};
//!
//! let g = AnyQuantity::new(DimensionKind::Mass, 1, "g").unwrap();
//! let m = AnyQuantity::new(DimensionKind::Length, 1, "m").unwrap();
//! assert!(matches!(g.try_lt(&m), Err(QuantityError::IncompatibleDimension { .. })));
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measure::{Lengths, Masses};
//!
//! let g = Masses::new(1, "g").unwrap();
//! let m = Lengths::new(1, "m").unwrap();
//! let _ = g < m; // cannot compare different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `measure::length` (metre and its prefixes)
//! - `measure::mass` (gram and its prefixes, including `kg`)
//! - `measure::time` (second and its prefixes)
//! - `measure::amount` (mole and its prefixes)
//! - `measure::temperature` (`K`, `°C`, `°F`)
//!
//! # Configuration
//!
//! The only Fahrenheit rule divides; its non-terminating results are rounded to 100 significant digits unless
//! `MEASURE_DIVISION_PRECISION` says otherwise. See [`ConversionConfig`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use measure_core::*;

pub use measure_core::units::amount;
pub use measure_core::units::length;
pub use measure_core::units::mass;
pub use measure_core::units::temperature;
pub use measure_core::units::time;

pub use measure_core::units::amount::*;
pub use measure_core::units::length::*;
pub use measure_core::units::mass::*;
pub use measure_core::units::temperature::*;
pub use measure_core::units::time::*;

/// The types needed by most users, in one import.
pub mod prelude {
    pub use crate::{
        AnyQuantity, BigDecimal, ConversionConfig, Dimension, DimensionKind, Quantity, QuantityError,
        QuantityResult,
    };
    pub use crate::{Amounts, Lengths, Masses, Temperatures, Times};
    pub use crate::{CELSIUS, FAHRENHEIT, GRAM, KELVIN, METRE, MOLE, SECOND};
}
