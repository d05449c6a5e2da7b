//! Conversions into [`BigDecimal`] magnitudes.

use crate::error::{QuantityError, QuantityResult};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Converts a binary float into the decimal it prints as.
///
/// `f64`'s `Display` is the shortest text that parses back to the same float, so `0.1` becomes exactly `0.1` rather
/// than the binary fraction `0.1000000000000000055511151231257827...`.
pub fn decimal_from_f64(value: f64) -> QuantityResult<BigDecimal> {
    if !value.is_finite() {
        return Err(QuantityError::InvalidMagnitude(format!(
            "{value} is not a finite number"
        )));
    }
    BigDecimal::from_str(&value.to_string())
        .map_err(|e| QuantityError::InvalidMagnitude(format!("{value}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_decimals_stay_short() {
        assert_eq!(
            decimal_from_f64(0.1).unwrap(),
            BigDecimal::from_str("0.1").unwrap()
        );
        assert_eq!(
            decimal_from_f64(-273.15).unwrap(),
            BigDecimal::from_str("-273.15").unwrap()
        );
        assert_eq!(decimal_from_f64(1.0).unwrap(), BigDecimal::from(1));
    }

    #[test]
    fn tiny_and_huge_values() {
        assert_eq!(
            decimal_from_f64(1e-18).unwrap(),
            BigDecimal::from_str("1e-18").unwrap()
        );
        assert_eq!(
            decimal_from_f64(1e21).unwrap(),
            BigDecimal::from_str("1e21").unwrap()
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                decimal_from_f64(value),
                Err(QuantityError::InvalidMagnitude(_))
            ));
        }
    }
}
