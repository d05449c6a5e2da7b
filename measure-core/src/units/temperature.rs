//! Temperature units.
//!
//! The base unit of this dimension is the kelvin (`K`). Only three units exist and none of them is prefixable:
//!
//! | symbol | rule into kelvin            |
//! |--------|-----------------------------|
//! | `K`    | identity                    |
//! | `°C`   | `K = C + 273.15`            |
//! | `°F`   | `K = (F + 459.67) * 5 / 9`  |
//!
//! Celsius and Fahrenheit do not share the kelvin zero point, so every conversion between them goes through kelvin.
//!
//! ```rust
//! use measure_core::temperature::Temperatures;
//! use bigdecimal::BigDecimal;
//!
//! let t = Temperatures::new(0, "K").unwrap();
//! assert_eq!(t.convert("°C").unwrap(), BigDecimal::new((-27315).into(), 2));
//! ```

use crate::rule::{ConversionRule, Factor};
use crate::table::{Unit, UnitTable};
use crate::{Dimension, DimensionKind, Quantity};
use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;

/// Dimension tag for thermodynamic temperature.
#[derive(Debug)]
pub enum Temperature {}
impl Dimension for Temperature {
    const KIND: DimensionKind = DimensionKind::Temperature;
}

/// A temperature quantity.
pub type Temperatures = Quantity<Temperature>;

/// Symbol of the base unit.
pub const KELVIN: &str = "K";
/// Symbol of the degree Celsius.
pub const CELSIUS: &str = "°C";
/// Symbol of the degree Fahrenheit.
pub const FAHRENHEIT: &str = "°F";

pub(crate) static TABLE: Lazy<UnitTable> = Lazy::new(|| {
    let kind = DimensionKind::Temperature;
    UnitTable::from_units(
        kind,
        vec![
            Unit::new(KELVIN, kind, ConversionRule::identity()),
            Unit::new(
                CELSIUS,
                kind,
                ConversionRule::affine(celsius_zero(), Factor::one()),
            ),
            Unit::new(
                FAHRENHEIT,
                kind,
                ConversionRule::affine(
                    fahrenheit_zero(),
                    Factor::new(BigDecimal::from(5), BigDecimal::from(9)),
                ),
            ),
        ],
    )
});

/// 273.15, the kelvin value of 0 °C.
fn celsius_zero() -> BigDecimal {
    BigDecimal::new(27315.into(), 2)
}

/// 459.67, the Fahrenheit degrees between absolute zero and 0 °F.
fn fahrenheit_zero() -> BigDecimal {
    BigDecimal::new(45967.into(), 2)
}
