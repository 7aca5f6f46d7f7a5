//! Conversion laws: round-trip recovery, base-reduction idempotence, and
//! dimension safety across the registry.
use approx::assert_relative_eq;
use freebody_core::{Error, Quantity};

#[test]
fn test_round_trip_recovers_magnitude_for_equal_dimension_pairs() {
    let pairs = [
        ("g", "kg"),
        ("cm", "m"),
        ("km", "mi"),
        ("min", "s"),
        ("N", "dyn"),
        ("J", "cal"),
        ("Pa", "atm"),
        ("L", "mL"),
    ];
    for (from, to) in pairs {
        let original = Quantity::parse(&format!("12.5 {from}")).unwrap();
        let there = original.convert(to).unwrap();
        let back = there.convert(from).unwrap();
        assert_relative_eq!(back.value, 12.5, max_relative = 1e-12);
    }
}

#[test]
fn test_reduce_to_base_is_idempotent_for_derived_units() {
    for expr in ["3 N", "2 J", "5 W", "1 atm", "9.8 m/s^2", "60 km/h", "7 Hz"] {
        let q = Quantity::parse(expr).unwrap();
        let once = q.reduce_to_base();
        let twice = once.reduce_to_base();
        assert_eq!(once, twice, "reduction not idempotent for {expr}");
        // And the base label parses back to the same dimension
        let reparsed = Quantity::parse(&once.unit.label).unwrap();
        assert_eq!(reparsed.unit.dim, q.unit.dim);
        assert_relative_eq!(reparsed.unit.factor, 1.0);
    }
}

#[test]
fn test_incompatible_conversion_is_a_loud_failure() {
    // Mass to length must fail, never silently return a wrong number
    let q = Quantity::parse("5 kg").unwrap();
    let err = q.convert("m").unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert!(err.to_string().contains("incompatible dimensions"));

    // Same through derived units
    let err = Quantity::parse("3 N").unwrap().convert("J").unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    for text in ["12 blorf", "kg +", "(3 m", "5 ..2 m"] {
        let err = Quantity::parse(text).unwrap_err();
        assert!(
            matches!(err, Error::UnitParse(_)),
            "expected UnitParse for {text:?}, got {err:?}"
        );
    }
}
