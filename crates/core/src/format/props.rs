//! Property-based tests for amount formatting.
//!
//! - Fraction digit count always equals the configured fraction
//! - Grouping never changes the digits
//! - Negative amounts render as the positive rendering with a `-` prefix

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::formatter::Formatter;

/// Strategy to generate non-negative minor-unit counts.
fn minor_units() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000_000i64
}

/// Strategy to generate fraction digits (0 to 8).
fn fraction_digits() -> impl Strategy<Value = u32> {
    0u32..=8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* `n / 10^f`, the rendering has exactly `f` digits after the
    /// decimal separator and the digits spell `n`.
    #[test]
    fn prop_fraction_digit_count(n in minor_units(), f in fraction_digits()) {
        let formatter = Formatter::new(f, ".", "", "", "1");
        let rendered = formatter.format(Decimal::new(n, f));

        if f == 0 {
            prop_assert!(!rendered.contains('.'));
            prop_assert_eq!(rendered.parse::<i64>().unwrap(), n);
        } else {
            let (int_part, frac_part) = rendered.split_once('.').unwrap();
            prop_assert!(!int_part.is_empty());
            prop_assert_eq!(frac_part.len(), f as usize);
            let joined = format!("{int_part}{frac_part}");
            prop_assert_eq!(joined.parse::<i64>().unwrap(), n);
        }
    }

    /// *For any* amount, formatting twice yields the same string.
    #[test]
    fn prop_format_is_deterministic(n in minor_units(), f in fraction_digits()) {
        let formatter = Formatter::new(f, ",", ".", "\u{20ac}", "1 $");
        let amount = Decimal::new(n, f);
        prop_assert_eq!(formatter.format(amount), formatter.format(amount));
    }

    /// *For any* amount, removing thousand separators gives the ungrouped rendering.
    #[test]
    fn prop_grouping_preserves_digits(n in minor_units(), f in fraction_digits()) {
        let grouped = Formatter::new(f, ".", "'", "", "1").format(Decimal::new(n, f));
        let plain = Formatter::new(f, ".", "", "", "1").format(Decimal::new(n, f));
        prop_assert_eq!(grouped.replace('\'', ""), plain);

        let int_part = grouped.split('.').next().unwrap();
        for group in int_part.split('\'').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// *For any* positive amount, the negated amount renders with a leading `-`.
    #[test]
    fn prop_negative_prefix(n in 1i64..1_000_000_000_000i64, f in fraction_digits()) {
        let formatter = Formatter::new(f, ".", ",", "$", "$1");
        let positive = formatter.format(Decimal::new(n, f));
        let negative = formatter.format(Decimal::new(-n, f));
        prop_assert_eq!(negative, format!("-{positive}"));
    }
}
