//! Conversion between display text and numbers
//!
//! Results are rendered with Rust's `Display` for `f64`, which produces the
//! shortest decimal that round-trips to the same value and never switches
//! to scientific notation. Integer-valued results drop the decimal point.

use crate::core::{CalcError, CalcResult};

/// Formats a calculation result for the display
///
/// `4.0` renders as `"4"`, `-0.0` as `"0"`, and `0.1 + 0.2` as
/// `"0.30000000000000004"`. Callers pass finite values only; the engine
/// turns non-finite results into an error before formatting.
#[must_use]
pub fn format_display(value: f64) -> String {
    if value == value.trunc() {
        // Adding positive zero folds -0.0 into 0.0
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}

/// Parses display text as an operand
///
/// Accepts exactly what the keypad can build: an optional leading `-`,
/// decimal digits and at most one `.`, with at least one digit. Anything
/// else (the error marker, exponents, `inf`, empty text) is a
/// [`CalcError::ParseError`].
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;

    if !well_formed {
        return Err(CalcError::ParseError(text.to_string()));
    }

    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::ParseError(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== format_display =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_display(4.0), "4");
        assert_eq!(format_display(20.0), "20");
    }

    #[test]
    fn test_format_negative_integer() {
        assert_eq!(format_display(-42.0), "-42");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_display(-0.0), "0");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_display(0.5), "0.5");
        assert_eq!(format_display(-2.25), "-2.25");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_display(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_display(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_large_integer_has_no_exponent() {
        assert_eq!(format_display(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_small_fraction_has_no_exponent() {
        assert_eq!(format_display(1e-7), "0.0000001");
    }

    // ===== parse_operand =====

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_operand("42"), Ok(42.0));
        assert_eq!(parse_operand("-7"), Ok(-7.0));
    }

    #[test]
    fn test_parse_trailing_decimal_point() {
        assert_eq!(parse_operand("0."), Ok(0.0));
        assert_eq!(parse_operand("-12."), Ok(-12.0));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_operand("3.25"), Ok(3.25));
    }

    #[test]
    fn test_parse_rejects_marker() {
        assert_eq!(
            parse_operand("Error"),
            Err(CalcError::ParseError("Error".into()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_bare_symbols() {
        for text in ["", "-", ".", "-."] {
            assert!(parse_operand(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        for text in ["1e5", "inf", "NaN", "+5", "1.2.3", "--1", " 1"] {
            assert!(parse_operand(text).is_err(), "accepted {text:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_round_trips(value in -1e15f64..1e15f64) {
            let text = format_display(value);
            prop_assert_eq!(parse_operand(&text), Ok(value + 0.0));
        }

        #[test]
        fn prop_integers_never_show_decimal_point(n in -1_000_000_000i64..1_000_000_000i64) {
            let text = format_display(n as f64);
            prop_assert!(!text.contains('.'));
            prop_assert_eq!(text, n.to_string());
        }
    }
}
