//! Time units.
//!
//! The base unit of this dimension is the second (`s`). Every SI prefix from exa to atto is recognised; civil units
//! (minute, hour, day) are not.

use crate::table::UnitTable;
use crate::{Dimension, DimensionKind, Quantity};
use once_cell::sync::Lazy;

/// Dimension tag for time.
#[derive(Debug)]
pub enum Time {}
impl Dimension for Time {
    const KIND: DimensionKind = DimensionKind::Time;
}

/// A time quantity.
pub type Times = Quantity<Time>;

/// Symbol of the base unit.
pub const SECOND: &str = "s";

pub(crate) static TABLE: Lazy<UnitTable> =
    Lazy::new(|| UnitTable::prefixed(DimensionKind::Time, SECOND));
