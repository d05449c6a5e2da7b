//! Mass units.
//!
//! The base unit of this dimension is the **gram** (`g`), not the SI base unit kilogram: prefixes attach to the gram,
//! so `kg` is simply the kilo-prefixed gram (`1 kg = 10^3 g`) and `1 kg` is `10^-15 Eg` or `10^21 ag`.
//!
//! ```rust
//! use measure_core::mass::Masses;
//!
//! let a = Masses::new(100, "dag").unwrap();
//! let b = Masses::new(1, "kg").unwrap();
//! assert_eq!(a, b);
//! ```

use crate::table::UnitTable;
use crate::{Dimension, DimensionKind, Quantity};
use once_cell::sync::Lazy;

/// Dimension tag for mass.
#[derive(Debug)]
pub enum Mass {}
impl Dimension for Mass {
    const KIND: DimensionKind = DimensionKind::Mass;
}

/// A mass quantity.
pub type Masses = Quantity<Mass>;

/// Symbol of the base unit.
pub const GRAM: &str = "g";

pub(crate) static TABLE: Lazy<UnitTable> =
    Lazy::new(|| UnitTable::prefixed(DimensionKind::Mass, GRAM));

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn gram_is_the_base_unit() {
        assert_eq!(TABLE.base_unit().symbol(), "g");
        assert!(!TABLE.resolve("kg").unwrap().is_base());
    }

    #[test]
    fn one_kilogram_in_every_prefix() {
        let m = Masses::new(1, "kg").unwrap();
        let expected = [
            ("Eg", "1e-15"),
            ("Pg", "1e-12"),
            ("Tg", "1e-9"),
            ("Gg", "1e-6"),
            ("Mg", "1e-3"),
            ("kg", "1"),
            ("hg", "10"),
            ("dag", "100"),
            ("g", "1000"),
            ("dg", "10000"),
            ("cg", "100000"),
            ("mg", "1000000"),
            ("μg", "1e9"),
            ("ng", "1e12"),
            ("pg", "1e15"),
            ("fg", "1e18"),
            ("ag", "1e21"),
        ];
        for (unit, value) in expected {
            assert_eq!(m.convert(unit).unwrap(), dec(value), "kg -> {unit}");
        }
    }

    #[test]
    fn micro_sign_spelling() {
        let m = Masses::new(1, "µg").unwrap();
        assert_eq!(m.symbol(), "μg");
        assert_eq!(m.convert("ng").unwrap(), dec("1000"));
    }
}
