//! Unit tables grouped by dimension.
//!
//! Each module defines a dimension tag (an uninhabited enum implementing [`crate::Dimension`]), the quantity alias
//! for that dimension and the lazily built, immutable unit table.
//!
//! ## Modules
//!
//! - [`length`]: metre and its SI prefixes (metre is the base unit).
//! - [`mass`]: gram and its SI prefixes (gram is the base unit, `kg` is the kilo-prefixed gram).
//! - [`time`]: second and its SI prefixes.
//! - [`amount`]: mole and its SI prefixes.
//! - [`temperature`]: kelvin, degree Celsius and degree Fahrenheit.

pub mod amount;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
