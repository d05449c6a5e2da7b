//! Dimension types and traits.

use crate::table::UnitTable;
use crate::units;
use core::fmt::{Display, Formatter, Result};
use once_cell::sync::Lazy;

/// Runtime identifier of a physical dimension.
///
/// Every dimension owns exactly one immutable [`UnitTable`], reachable through [`DimensionKind::table`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKind {
    /// Length, base unit metre (`m`).
    Length,
    /// Mass, base unit gram (`g`).
    Mass,
    /// Time, base unit second (`s`).
    Time,
    /// Amount of substance, base unit mole (`mol`).
    AmountOfSubstance,
    /// Thermodynamic temperature, base unit kelvin (`K`).
    Temperature,
}

impl DimensionKind {
    /// All supported dimensions.
    pub const ALL: [DimensionKind; 5] = [
        DimensionKind::Length,
        DimensionKind::Mass,
        DimensionKind::Time,
        DimensionKind::AmountOfSubstance,
        DimensionKind::Temperature,
    ];

    /// Returns the unit table of this dimension.
    ///
    /// ```rust
    /// use measure_core::DimensionKind;
    ///
    /// let table = DimensionKind::Mass.table();
    /// assert_eq!(table.base_unit().symbol(), "g");
    /// assert!(table.contains("kg"));
    /// ```
    pub fn table(self) -> &'static UnitTable {
        match self {
            DimensionKind::Length => Lazy::force(&units::length::TABLE),
            DimensionKind::Mass => Lazy::force(&units::mass::TABLE),
            DimensionKind::Time => Lazy::force(&units::time::TABLE),
            DimensionKind::AmountOfSubstance => Lazy::force(&units::amount::TABLE),
            DimensionKind::Temperature => Lazy::force(&units::temperature::TABLE),
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            DimensionKind::Length => "Length",
            DimensionKind::Mass => "Mass",
            DimensionKind::Time => "Time",
            DimensionKind::AmountOfSubstance => "AmountOfSubstance",
            DimensionKind::Temperature => "Temperature",
        }
    }
}

impl Display for DimensionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// Marker trait for **dimensions** at the type level.
///
/// Each dimension is an uninhabited enum tying a [`crate::Quantity`] to its [`DimensionKind`], so quantities of
/// different dimensions are different types:
///
/// ```rust
/// use measure_core::{Dimension, DimensionKind};
/// use measure_core::length::Length;
///
/// assert_eq!(Length::KIND, DimensionKind::Length);
/// ```
pub trait Dimension: 'static {
    /// Runtime identifier of this dimension.
    const KIND: DimensionKind;

    /// Unit table of this dimension.
    fn table() -> &'static UnitTable {
        Self::KIND.table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_owns_a_table_of_its_own_dimension() {
        for kind in DimensionKind::ALL {
            assert_eq!(kind.table().dimension(), kind);
        }
    }

    #[test]
    fn base_units() {
        let bases: Vec<&str> = DimensionKind::ALL
            .iter()
            .map(|kind| kind.table().base_unit().symbol())
            .collect();
        assert_eq!(bases, vec!["m", "g", "s", "mol", "K"]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(
            DimensionKind::AmountOfSubstance.to_string(),
            "AmountOfSubstance"
        );
    }
}
