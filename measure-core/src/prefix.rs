//! Metric (SI) prefixes.
//!
//! A prefix scales its base unit by an exact power of ten: `1 km = 10^3 m`, `1 μs = 10^-6 s`. The ladder runs from
//! exa (`10^18`) down to atto (`10^-18`); the unprefixed base unit sits between deca and deci.

use crate::rule::Factor;

/// An SI prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `E`, 10^18.
    Exa,
    /// `P`, 10^15.
    Peta,
    /// `T`, 10^12.
    Tera,
    /// `G`, 10^9.
    Giga,
    /// `M`, 10^6.
    Mega,
    /// `k`, 10^3.
    Kilo,
    /// `h`, 10^2.
    Hecto,
    /// `da`, 10^1.
    Deca,
    /// `d`, 10^-1.
    Deci,
    /// `c`, 10^-2.
    Centi,
    /// `m`, 10^-3.
    Milli,
    /// `μ`, 10^-6.
    Micro,
    /// `n`, 10^-9.
    Nano,
    /// `p`, 10^-12.
    Pico,
    /// `f`, 10^-15.
    Femto,
    /// `a`, 10^-18.
    Atto,
}

impl Prefix {
    /// Every prefix, from the largest exponent to the smallest.
    pub const ALL: [Prefix; 16] = [
        Prefix::Exa,
        Prefix::Peta,
        Prefix::Tera,
        Prefix::Giga,
        Prefix::Mega,
        Prefix::Kilo,
        Prefix::Hecto,
        Prefix::Deca,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Pico,
        Prefix::Femto,
        Prefix::Atto,
    ];

    /// Canonical symbol.
    ///
    /// Micro uses GREEK SMALL LETTER MU (U+03BC); see [`Prefix::aliases`] for the MICRO SIGN.
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Exa => "E",
            Prefix::Peta => "P",
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Hecto => "h",
            Prefix::Deca => "da",
            Prefix::Deci => "d",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "\u{3bc}",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::Femto => "f",
            Prefix::Atto => "a",
        }
    }

    /// Alternative spellings accepted on lookup.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            // MICRO SIGN, what most keyboards produce for "µ".
            Prefix::Micro => &["\u{b5}"],
            _ => &[],
        }
    }

    /// Power of ten this prefix stands for.
    pub const fn exponent(self) -> i64 {
        match self {
            Prefix::Exa => 18,
            Prefix::Peta => 15,
            Prefix::Tera => 12,
            Prefix::Giga => 9,
            Prefix::Mega => 6,
            Prefix::Kilo => 3,
            Prefix::Hecto => 2,
            Prefix::Deca => 1,
            Prefix::Deci => -1,
            Prefix::Centi => -2,
            Prefix::Milli => -3,
            Prefix::Micro => -6,
            Prefix::Nano => -9,
            Prefix::Pico => -12,
            Prefix::Femto => -15,
            Prefix::Atto => -18,
        }
    }

    /// Spelled-out name, e.g. `"kilo"`.
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Exa => "exa",
            Prefix::Peta => "peta",
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Hecto => "hecto",
            Prefix::Deca => "deca",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
            Prefix::Femto => "femto",
            Prefix::Atto => "atto",
        }
    }

    /// Exact factor from the prefixed unit to its base unit (`10^exponent`).
    pub fn factor(self) -> Factor {
        Factor::power_of_ten(self.exponent())
    }
}
