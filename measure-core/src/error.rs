//! Error types for quantity construction, conversion and comparison.

use crate::dimension::DimensionKind;

/// Result type for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The symbol is not registered in the unit table of `dimension`.
    #[error("Unknown unit '{symbol}' for dimension {dimension}")]
    UnknownUnit {
        /// The symbol as given by the caller.
        symbol: String,
        /// Dimension whose table was searched.
        dimension: DimensionKind,
    },

    /// An operation mixed two different dimensions.
    #[error("Incompatible dimensions: expected {expected}, found {found}")]
    IncompatibleDimension {
        /// Dimension of the receiving side.
        expected: DimensionKind,
        /// Dimension of the other operand.
        found: DimensionKind,
    },

    /// A magnitude could not be represented as a finite decimal.
    #[error("Invalid magnitude: {0}")]
    InvalidMagnitude(String),
}

impl QuantityError {
    pub(crate) fn unknown_unit(symbol: &str, dimension: DimensionKind) -> Self {
        QuantityError::UnknownUnit {
            symbol: symbol.to_string(),
            dimension,
        }
    }

    pub(crate) fn incompatible(expected: DimensionKind, found: DimensionKind) -> Self {
        QuantityError::IncompatibleDimension { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_message_names_symbol_and_dimension() {
        let err = QuantityError::unknown_unit("xyz", DimensionKind::Length);
        assert_eq!(err.to_string(), "Unknown unit 'xyz' for dimension Length");
    }

    #[test]
    fn incompatible_message_names_both_sides() {
        let err = QuantityError::incompatible(DimensionKind::Mass, DimensionKind::Length);
        assert_eq!(
            err.to_string(),
            "Incompatible dimensions: expected Mass, found Length"
        );
    }
}
