//! Integration-level tests for the `measure` facade crate.

use measure::prelude::*;
use measure::Prefix;

use approx::assert_abs_diff_eq;
use bigdecimal::ToPrimitive;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn assert_converts<D: Dimension>(q: &Quantity<D>, expected: &[(&str, &str)]) {
    for (unit, value) in expected {
        assert_eq!(
            q.convert(unit).unwrap(),
            dec(value),
            "{q} expressed in {unit}"
        );
    }
}

/// Checks all six comparison operators against the expected ordering of `a` and `b`.
fn assert_ordering<D: Dimension>(a: &Quantity<D>, b: &Quantity<D>, expected: core::cmp::Ordering) {
    use core::cmp::Ordering::*;
    assert_eq!(a == b, expected == Equal, "{a} == {b}");
    assert_eq!(a != b, expected != Equal, "{a} != {b}");
    assert_eq!(a < b, expected == Less, "{a} < {b}");
    assert_eq!(a <= b, expected != Greater, "{a} <= {b}");
    assert_eq!(a > b, expected == Greater, "{a} > {b}");
    assert_eq!(a >= b, expected != Less, "{a} >= {b}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion to and from the base unit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn length_from_metre() {
    let l = Lengths::from_f64(1.0, "m").unwrap();
    assert_converts(
        &l,
        &[
            ("Em", "1e-18"),
            ("Pm", "1e-15"),
            ("Tm", "1e-12"),
            ("Gm", "1e-9"),
            ("Mm", "1e-6"),
            ("km", "1e-3"),
            ("hm", "1e-2"),
            ("dam", "0.1"),
            ("dm", "10"),
            ("cm", "100"),
            ("mm", "1000"),
            ("μm", "1e6"),
            ("nm", "1e9"),
            ("pm", "1e12"),
            ("fm", "1e15"),
            ("am", "1e18"),
        ],
    );
}

#[test]
fn mass_from_kilogram() {
    let m = Masses::from_f64(1.0, "kg").unwrap();
    assert_converts(
        &m,
        &[
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
        ],
    );
}

#[test]
fn time_from_second() {
    let t = Times::from_f64(1.0, "s").unwrap();
    assert_converts(
        &t,
        &[
            ("s", "1"),
            ("ms", "1000"),
            ("μs", "1e6"),
            ("ns", "1e9"),
            ("ps", "1e12"),
            ("fs", "1e15"),
            ("as", "1e18"),
        ],
    );
}

#[test]
fn amount_from_kilomole() {
    let n = Amounts::from_f64(1.0, "kmol").unwrap();
    assert_eq!(n.convert("mol").unwrap(), dec("1000"));
    assert_abs_diff_eq!(n.convert("mol").unwrap().to_f64().unwrap(), 1000.0);
}

#[test]
fn temperature_from_kelvin() {
    let t = Temperatures::from_f64(0.0, KELVIN).unwrap();
    assert_converts(
        &t,
        &[(KELVIN, "0.0"), (CELSIUS, "-273.15"), (FAHRENHEIT, "-459.67")],
    );
}

#[test]
fn temperature_from_celsius() {
    let t = Temperatures::from_f64(-40.0, CELSIUS).unwrap();
    assert_eq!(t.convert(CELSIUS).unwrap(), dec("-40.0"));
    assert_eq!(t.convert(KELVIN).unwrap(), dec("233.15"));
    assert_abs_diff_eq!(
        t.convert(FAHRENHEIT).unwrap().to_f64().unwrap(),
        -40.0,
        epsilon = 1e-9
    );
}

#[test]
fn temperature_from_fahrenheit() {
    let t = Temperatures::from_f64(-40.0, FAHRENHEIT).unwrap();
    assert_abs_diff_eq!(
        t.convert(KELVIN).unwrap().to_f64().unwrap(),
        233.15,
        epsilon = 1e-9
    );
    assert_eq!(t.convert(CELSIUS).unwrap(), dec("-40.0"));
}

#[test]
fn unknown_unit() {
    let l = Lengths::new(1, "m").unwrap();
    assert_eq!(
        l.convert("xyz").unwrap_err(),
        QuantityError::UnknownUnit {
            symbol: "xyz".into(),
            dimension: DimensionKind::Length
        }
    );
    assert!(matches!(
        Masses::new(1, "lb"),
        Err(QuantityError::UnknownUnit { .. })
    ));
    assert!(matches!(
        Temperatures::new(1, "C"),
        Err(QuantityError::UnknownUnit { .. })
    ));
}

#[test]
fn micro_sign_alias() {
    let a = Times::new(1, "\u{b5}s").unwrap();
    assert_eq!(a.symbol(), "\u{3bc}s");
    assert_eq!(a, Times::new(1000, "ns").unwrap());
    assert_eq!(Prefix::Micro.symbol(), "\u{3bc}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn comparing_base_to_base() {
    use core::cmp::Ordering::*;
    let g = |v: f64| Masses::from_f64(v, GRAM).unwrap();
    assert_ordering(&g(1.0), &g(1.0), Equal);
    assert_ordering(&g(2.0), &g(1.0), Greater);
    assert_ordering(&g(1.0), &g(2.0), Less);
}

#[test]
fn comparing_non_base_to_base() {
    use core::cmp::Ordering::*;
    let metre = Lengths::from_f64(1.0, METRE).unwrap();
    let mm = |v: f64| Lengths::from_f64(v, "mm").unwrap();
    assert_ordering(&mm(1000.0), &metre, Equal);
    assert_ordering(&mm(10000.0), &metre, Greater);
    assert_ordering(&mm(100.0), &metre, Less);
}

#[test]
fn comparing_non_base_to_non_base() {
    let m1 = Masses::from_f64(100.0, "dag").unwrap();
    let m2 = Masses::from_f64(1.0, "kg").unwrap();
    assert_ordering(&m1, &m2, core::cmp::Ordering::Equal);
}

#[test]
fn comparing_temperatures() {
    use core::cmp::Ordering::*;
    let t1 = Temperatures::from_f64(273.15, KELVIN).unwrap();
    let t2 = Temperatures::from_f64(273.15, KELVIN).unwrap();
    assert_ordering(&t1, &t2, Equal);
    assert_ordering(&Temperatures::new(0, CELSIUS).unwrap(), &t1, Equal);
    assert_ordering(&Temperatures::new(32, FAHRENHEIT).unwrap(), &t1, Equal);
    assert_ordering(&Temperatures::new(33, FAHRENHEIT).unwrap(), &t1, Greater);
}

#[test]
fn comparing_across_dimensions_is_an_error() {
    let g = AnyQuantity::from(Masses::new(1, GRAM).unwrap());
    let m = AnyQuantity::from(Lengths::new(1, METRE).unwrap());
    let err = g.try_eq(&m).unwrap_err();
    assert_eq!(
        err,
        QuantityError::IncompatibleDimension {
            expected: DimensionKind::Mass,
            found: DimensionKind::Length
        }
    );
    assert_eq!(
        err.to_string(),
        "Incompatible dimensions: expected Mass, found Length"
    );
    assert!(g.try_ge(&m).is_err());
}

#[test]
fn sorting_mixed_units() {
    let mut times = vec![
        Times::new(1, "ms").unwrap(),
        Times::new(1, "s").unwrap(),
        Times::new(999, "μs").unwrap(),
        Times::new(2, "ns").unwrap(),
    ];
    times.sort();
    let symbols: Vec<&str> = times.iter().map(|t| t.symbol()).collect();
    assert_eq!(symbols, vec!["ns", "μs", "ms", "s"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime-tagged quantities and configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn any_quantity_from_each_dimension() {
    for kind in DimensionKind::ALL {
        let base = kind.table().base_unit().symbol();
        let q = AnyQuantity::new(kind, 1, base).unwrap();
        assert_eq!(q.dimension(), kind);
        assert_eq!(q.to_base(), dec("1"));
    }
}

#[test]
fn explicit_division_precision() {
    let config = ConversionConfig::new().with_division_precision(core::num::NonZeroU64::new(8).unwrap());
    let t = Temperatures::new(1, FAHRENHEIT).unwrap();
    assert_eq!(t.convert_with(KELVIN, &config).unwrap(), dec("255.92778"));
}

#[test]
fn division_precision_above_one_hundred_digits() {
    let config = ConversionConfig::new().with_division_precision(core::num::NonZeroU64::new(150).unwrap());
    let k = Temperatures::new(1, FAHRENHEIT).unwrap().convert_with(KELVIN, &config).unwrap();
    let (digits, scale) = k.as_bigint_and_exponent();
    assert_eq!(digits.to_string(), format!("25592{}8", "7".repeat(144)));
    assert_eq!(scale, 147);
}

#[test]
fn exact_fahrenheit_results_ignore_division_precision() {
    let config = ConversionConfig::new().with_division_precision(core::num::NonZeroU64::new(5).unwrap());
    let t = Temperatures::new(dec("1000.123"), KELVIN).unwrap();
    assert_eq!(t.convert_with(FAHRENHEIT, &config).unwrap(), dec("1340.5514"));
}

#[test]
fn temperature_sums_do_not_depend_on_operand_order() {
    let c = Temperatures::new(10, CELSIUS).unwrap();
    let k = Temperatures::new(dec("283.15"), KELVIN).unwrap();
    assert_eq!(&c + &k, &k + &c);
    assert_eq!((&c + &k).convert(KELVIN).unwrap(), dec("566.30"));
}

#[test]
fn display() {
    assert_eq!(Lengths::new(dec("2.5"), "km").unwrap().to_string(), "2.5 km");
    assert_eq!(Temperatures::new(-40, FAHRENHEIT).unwrap().to_string(), "-40 °F");
}
