//! Amount-of-substance units.
//!
//! The base unit of this dimension is the mole (`mol`).

use crate::table::UnitTable;
use crate::{Dimension, DimensionKind, Quantity};
use once_cell::sync::Lazy;

/// Dimension tag for amount of substance.
#[derive(Debug)]
pub enum AmountOfSubstance {}
impl Dimension for AmountOfSubstance {
    const KIND: DimensionKind = DimensionKind::AmountOfSubstance;
}

/// An amount-of-substance quantity.
pub type Amounts = Quantity<AmountOfSubstance>;

/// Symbol of the base unit.
pub const MOLE: &str = "mol";

pub(crate) static TABLE: Lazy<UnitTable> =
    Lazy::new(|| UnitTable::prefixed(DimensionKind::AmountOfSubstance, MOLE));
