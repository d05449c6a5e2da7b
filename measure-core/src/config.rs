//! Conversion configuration.
//!
//! Almost every conversion is exact. The exception is a division whose quotient does not terminate in base ten
//! (Fahrenheit's `5/9`); such quotients are rounded to [`ConversionConfig::division_precision`] significant digits.
//!
//! The process-wide default is read once from the environment:
//!
//! | variable                     | meaning                                   | default |
//! |------------------------------|-------------------------------------------|---------|
//! | `MEASURE_DIVISION_PRECISION` | significant digits kept after a division  | `100`   |
//!
//! Precisions above [`MAX_DIVISION_PRECISION`] are clamped.

use log::warn;
use once_cell::sync::Lazy;
use std::num::NonZeroU64;

/// Default number of significant digits kept after a non-terminating division.
pub const DEFAULT_DIVISION_PRECISION: u64 = 100;

/// Largest accepted division precision.
pub const MAX_DIVISION_PRECISION: u64 = 10_000;

/// Environment variable overriding [`DEFAULT_DIVISION_PRECISION`].
pub const DIVISION_PRECISION_ENV: &str = "MEASURE_DIVISION_PRECISION";

static GLOBAL: Lazy<ConversionConfig> = Lazy::new(ConversionConfig::from_env);

/// Settings applied to unit conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionConfig {
    division_precision: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionConfig {
    /// Configuration with default settings.
    pub const fn new() -> Self {
        Self {
            division_precision: DEFAULT_DIVISION_PRECISION,
        }
    }

    /// Returns a copy keeping `digits` significant digits after a division, at most [`MAX_DIVISION_PRECISION`].
    ///
    /// ```rust
    /// use measure_core::ConversionConfig;
    /// use std::num::NonZeroU64;
    ///
    /// let config = ConversionConfig::new().with_division_precision(NonZeroU64::new(28).unwrap());
    /// assert_eq!(config.division_precision(), 28);
    /// ```
    pub const fn with_division_precision(self, digits: NonZeroU64) -> Self {
        Self {
            division_precision: if digits.get() > MAX_DIVISION_PRECISION {
                MAX_DIVISION_PRECISION
            } else {
                digits.get()
            },
        }
    }

    /// Significant digits kept after a non-terminating division.
    pub const fn division_precision(&self) -> u64 {
        self.division_precision
    }

    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DIVISION_PRECISION_ENV).ok().as_deref())
    }

    /// The process-wide configuration used by [`crate::Quantity::convert`] and friends.
    pub fn global() -> &'static ConversionConfig {
        &GLOBAL
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::new();
        };
        match raw.trim().parse::<NonZeroU64>() {
            Ok(digits) if digits.get() > MAX_DIVISION_PRECISION => {
                warn!(
                    "Clamping {}={} to {} digits",
                    DIVISION_PRECISION_ENV, digits, MAX_DIVISION_PRECISION
                );
                Self::new().with_division_precision(digits)
            }
            Ok(digits) => Self::new().with_division_precision(digits),
            Err(e) => {
                warn!(
                    "Ignoring {}={:?} ({}); using {} digits",
                    DIVISION_PRECISION_ENV, raw, e, DEFAULT_DIVISION_PRECISION
                );
                Self::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision() {
        assert_eq!(
            ConversionConfig::default().division_precision(),
            DEFAULT_DIVISION_PRECISION
        );
    }

    #[test]
    fn missing_variable_uses_default() {
        assert_eq!(ConversionConfig::from_env_value(None), ConversionConfig::new());
    }

    #[test]
    fn valid_variable_overrides_precision() {
        let config = ConversionConfig::from_env_value(Some(" 40 "));
        assert_eq!(config.division_precision(), 40);
    }

    #[test]
    fn oversized_precision_is_clamped() {
        let config = ConversionConfig::from_env_value(Some("1000000000"));
        assert_eq!(config.division_precision(), MAX_DIVISION_PRECISION);
        let config = ConversionConfig::new().with_division_precision(NonZeroU64::MAX);
        assert_eq!(config.division_precision(), MAX_DIVISION_PRECISION);
    }

    #[test]
    fn invalid_variable_falls_back_to_default() {
        for raw in ["", "0", "-3", "many"] {
            assert_eq!(
                ConversionConfig::from_env_value(Some(raw)),
                ConversionConfig::new(),
                "value {raw:?}"
            );
        }
    }
}
