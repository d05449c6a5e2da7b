//! Length units.
//!
//! The base unit of this dimension is the metre (`m`). Every SI prefix from exa to atto is recognised.
//!
//! ```rust
//! use measure_core::length::Lengths;
//! use bigdecimal::BigDecimal;
//!
//! let d = Lengths::new(1500, "mm").unwrap();
//! assert_eq!(d.convert("m").unwrap(), BigDecimal::new(15.into(), 1));
//! ```

use crate::table::UnitTable;
use crate::{Dimension, DimensionKind, Quantity};
use once_cell::sync::Lazy;

/// Dimension tag for length.
#[derive(Debug)]
pub enum Length {}
impl Dimension for Length {
    const KIND: DimensionKind = DimensionKind::Length;
}

/// A length quantity.
pub type Lengths = Quantity<Length>;

/// Symbol of the base unit.
pub const METRE: &str = "m";

pub(crate) static TABLE: Lazy<UnitTable> =
    Lazy::new(|| UnitTable::prefixed(DimensionKind::Length, METRE));
