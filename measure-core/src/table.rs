//! Unit tables.
//!
//! A [`UnitTable`] maps the unit symbols recognised by one dimension to their [`ConversionRule`]s. Conversion and
//! comparison are implemented here once, for every dimension: a value goes through the base unit of the table
//! unless source and target are the same unit.

use crate::config::ConversionConfig;
use crate::dimension::DimensionKind;
use crate::error::{QuantityError, QuantityResult};
use crate::prefix::Prefix;
use crate::rule::ConversionRule;
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use log::{debug, trace};
use std::collections::HashMap;

/// A registered unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    symbol: String,
    dimension: DimensionKind,
    prefix: Option<Prefix>,
    rule: ConversionRule,
}

impl Unit {
    /// A unit of `dimension` written `symbol`.
    pub fn new(symbol: impl Into<String>, dimension: DimensionKind, rule: ConversionRule) -> Self {
        Self {
            symbol: symbol.into(),
            dimension,
            prefix: None,
            rule,
        }
    }

    /// The SI-prefixed version of the base unit `base_symbol`.
    pub fn prefixed(prefix: Prefix, base_symbol: &str, dimension: DimensionKind) -> Self {
        Self {
            symbol: format!("{}{}", prefix.symbol(), base_symbol),
            dimension,
            prefix: Some(prefix),
            rule: ConversionRule::scale(prefix.factor()),
        }
    }

    /// Canonical symbol, e.g. `"km"`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Dimension this unit measures.
    pub fn dimension(&self) -> DimensionKind {
        self.dimension
    }

    /// SI prefix, for prefixed units.
    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// Rule relating this unit to the base unit.
    pub fn rule(&self) -> &ConversionRule {
        &self.rule
    }

    /// Whether this is the base unit of its dimension.
    pub fn is_base(&self) -> bool {
        self.rule.is_identity()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// The immutable set of units of one dimension.
#[derive(Clone, Debug)]
pub struct UnitTable {
    dimension: DimensionKind,
    base: usize,
    units: Vec<Unit>,
    index: HashMap<String, usize>,
}

impl UnitTable {
    /// Builds a table from explicit units. Exactly one of them must carry the identity rule.
    ///
    /// # Panics
    ///
    /// Panics if there is no base unit, if a unit belongs to another dimension, or if a symbol repeats. Tables are
    /// built from constants at first use, so these are programming errors.
    pub(crate) fn from_units(dimension: DimensionKind, units: Vec<Unit>) -> Self {
        let mut index = HashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(
                unit.dimension, dimension,
                "unit '{}' does not measure {}",
                unit.symbol, dimension
            );
            let previous = index.insert(unit.symbol.clone(), i);
            assert!(previous.is_none(), "duplicate unit symbol '{}'", unit.symbol);
        }
        let base = units
            .iter()
            .position(Unit::is_base)
            .unwrap_or_else(|| panic!("{} table has no base unit", dimension));

        debug!("Built {} unit table with {} units", dimension, units.len());
        Self {
            dimension,
            base,
            units,
            index,
        }
    }

    /// Builds the table of an SI-prefixable dimension: `base_symbol` with every [`Prefix`] in front of it.
    ///
    /// Units are ordered from the largest prefix to the smallest, the base unit between deca and deci.
    pub(crate) fn prefixed(dimension: DimensionKind, base_symbol: &str) -> Self {
        let (larger, smaller): (Vec<Prefix>, Vec<Prefix>) =
            Prefix::ALL.into_iter().partition(|p| p.exponent() > 0);

        let units = larger
            .into_iter()
            .map(|p| Unit::prefixed(p, base_symbol, dimension))
            .chain(core::iter::once(Unit::new(
                base_symbol,
                dimension,
                ConversionRule::identity(),
            )))
            .chain(
                smaller
                    .into_iter()
                    .map(|p| Unit::prefixed(p, base_symbol, dimension)),
            )
            .collect();

        let mut table = Self::from_units(dimension, units);
        for prefix in Prefix::ALL {
            let canonical = format!("{}{}", prefix.symbol(), base_symbol);
            for alias in prefix.aliases() {
                table.alias(format!("{}{}", alias, base_symbol), &canonical);
            }
        }
        table
    }

    fn alias(&mut self, alias: String, canonical: &str) {
        if let Some(&i) = self.index.get(canonical) {
            self.index.entry(alias).or_insert(i);
        }
    }

    /// Dimension of every unit in this table.
    pub fn dimension(&self) -> DimensionKind {
        self.dimension
    }

    /// The unit whose rule is the identity.
    pub fn base_unit(&self) -> &Unit {
        &self.units[self.base]
    }

    /// Looks a symbol (canonical or alias) up.
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        self.index.get(symbol).map(|&i| &self.units[i])
    }

    /// Whether `symbol` is recognised.
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Looks a symbol up, failing with [`QuantityError::UnknownUnit`].
    pub fn resolve(&self, symbol: &str) -> QuantityResult<&Unit> {
        self.get(symbol)
            .ok_or_else(|| QuantityError::unknown_unit(symbol, self.dimension))
    }

    /// Units in definition order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Canonical symbols in definition order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(Unit::symbol)
    }

    /// Number of units (aliases not counted).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table holds no unit. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Expresses `value`, given in `from`, in the base unit.
    pub fn to_base(&self, value: &BigDecimal, from: &Unit, config: &ConversionConfig) -> BigDecimal {
        debug_assert_eq!(from.dimension, self.dimension);
        from.rule.to_base(value, config)
    }

    /// Expresses `value`, given in `from`, in `to`.
    ///
    /// Same-unit conversion returns `value` untouched; anything else goes through the base unit.
    pub fn convert(
        &self,
        value: &BigDecimal,
        from: &Unit,
        to: &Unit,
        config: &ConversionConfig,
    ) -> BigDecimal {
        debug_assert_eq!(to.dimension, self.dimension);
        if from.symbol == to.symbol {
            return value.clone();
        }
        let base = self.to_base(value, from, config);
        let converted = to.rule.from_base(base, config);
        trace!(
            "{} {} -> {} {} ({})",
            value,
            from.symbol,
            converted,
            to.symbol,
            self.dimension
        );
        converted
    }

    /// Adds two values given in units of this table, expressing the sum in `lhs_unit`.
    ///
    /// Scaled units add after converting `rhs` into `lhs_unit`. When either unit has a shifted zero point (°C, °F)
    /// both values are added as absolute amounts of the base unit, so `a + b` and `b + a` are the same quantity.
    pub fn sum(
        &self,
        lhs: (&BigDecimal, &Unit),
        rhs: (&BigDecimal, &Unit),
        config: &ConversionConfig,
    ) -> BigDecimal {
        self.combine(lhs, rhs, config, |a, b| a + b)
    }

    /// Subtracts `rhs` from `lhs`, expressing the difference in `lhs_unit`. Shifted units follow [`UnitTable::sum`].
    pub fn difference(
        &self,
        lhs: (&BigDecimal, &Unit),
        rhs: (&BigDecimal, &Unit),
        config: &ConversionConfig,
    ) -> BigDecimal {
        self.combine(lhs, rhs, config, |a, b| a - b)
    }

    fn combine(
        &self,
        (lhs, lhs_unit): (&BigDecimal, &Unit),
        (rhs, rhs_unit): (&BigDecimal, &Unit),
        config: &ConversionConfig,
        op: impl Fn(BigDecimal, BigDecimal) -> BigDecimal,
    ) -> BigDecimal {
        if lhs_unit.rule.is_multiplicative() && rhs_unit.rule.is_multiplicative() {
            let rhs = self.convert(rhs, rhs_unit, lhs_unit, config);
            return op(lhs.clone(), rhs);
        }
        let base = op(
            self.to_base(lhs, lhs_unit, config),
            self.to_base(rhs, rhs_unit, config),
        );
        lhs_unit.rule.from_base(base, config)
    }

    /// Orders two values given in (possibly different) units of this table.
    pub fn compare(
        &self,
        (lhs, lhs_unit): (&BigDecimal, &Unit),
        (rhs, rhs_unit): (&BigDecimal, &Unit),
        config: &ConversionConfig,
    ) -> Ordering {
        if lhs_unit.symbol == rhs_unit.symbol {
            return lhs.cmp(rhs);
        }
        let lhs = self.to_base(lhs, lhs_unit, config);
        let rhs = self.to_base(rhs, rhs_unit, config);
        lhs.cmp(&rhs)
    }
}
