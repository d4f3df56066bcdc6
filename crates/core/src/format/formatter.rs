//! Amount formatting.
//!
//! Rendering is bit-exact with the following pipeline:
//! 1. Take the absolute amount and truncate it to `fraction` digits (minor units)
//! 2. Left-pad with zeros so at least one integer digit exists
//! 3. Group the integer digits with the thousand separator
//! 4. Insert the decimal separator before the fraction digits
//! 5. Substitute the number into the template's first `1`, then the grapheme
//!    into the first `$`
//! 6. Prefix `-` when the original amount is strictly negative
//!
//! Sub-minor-unit amounts are truncated toward zero, never rounded.

use moneta_shared::Currency;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Placeholder replaced by the formatted number.
pub const NUMBER_PLACEHOLDER: char = '1';

/// Placeholder replaced by the currency grapheme.
pub const GRAPHEME_PLACEHOLDER: char = '$';

/// Formatting parameters for a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter<'a> {
    /// Digits after the decimal separator.
    pub fraction: u32,
    /// Decimal separator.
    pub decimal: &'a str,
    /// Thousand separator. Empty disables grouping.
    pub thousand: &'a str,
    /// Currency symbol.
    pub grapheme: &'a str,
    /// Display template.
    pub template: &'a str,
}

impl<'a> Formatter<'a> {
    /// Creates a new formatter.
    #[must_use]
    pub const fn new(
        fraction: u32,
        decimal: &'a str,
        thousand: &'a str,
        grapheme: &'a str,
        template: &'a str,
    ) -> Self {
        Self {
            fraction,
            decimal,
            thousand,
            grapheme,
            template,
        }
    }

    /// Formats `amount` for display.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::format::Formatter;
    ///
    /// let usd = Formatter::new(2, ".", ",", "$", "$1");
    /// assert_eq!(usd.format(dec!(-1234567.891)), "-$1,234,567.89");
    /// ```
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let fraction = self.fraction as usize;
        let mut digits = minor_units(amount, self.fraction);

        if digits.len() <= fraction {
            digits.insert_str(0, &"0".repeat(fraction - digits.len() + 1));
        }

        if !self.thousand.is_empty() {
            let mut at = digits.len() - fraction;
            while at > 3 {
                at -= 3;
                digits.insert_str(at, self.thousand);
            }
        }

        if fraction > 0 {
            digits.insert_str(digits.len() - fraction, self.decimal);
        }

        let formatted = self
            .template
            .replacen(NUMBER_PLACEHOLDER, &digits, 1)
            .replacen(GRAPHEME_PLACEHOLDER, self.grapheme, 1);

        if amount < Decimal::ZERO {
            format!("-{formatted}")
        } else {
            formatted
        }
    }
}

impl<'a> From<&'a Currency> for Formatter<'a> {
    fn from(currency: &'a Currency) -> Self {
        Self::new(
            currency.fraction,
            &currency.decimal_separator,
            &currency.thousand_separator,
            &currency.grapheme,
            &currency.template,
        )
    }
}

/// Renders `|amount| * 10^fraction`, truncated, as a bare digit string.
fn minor_units(amount: Decimal, fraction: u32) -> String {
    let truncated = amount
        .abs()
        .round_dp_with_strategy(fraction, RoundingStrategy::ToZero);
    let mantissa = truncated.mantissa().unsigned_abs();
    if mantissa == 0 {
        return "0".to_string();
    }

    let mut digits = mantissa.to_string();
    let missing = fraction.saturating_sub(truncated.scale()) as usize;
    digits.push_str(&"0".repeat(missing));
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const USD: Formatter<'static> = Formatter::new(2, ".", ",", "$", "$1");
    const EUR: Formatter<'static> = Formatter::new(2, ".", ",", "\u{20ac}", "1 $");
    const JPY: Formatter<'static> = Formatter::new(0, ".", ",", "\u{a5}", "$1");

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(0.01), "$0.01")]
    #[case(dec!(0.1), "$0.10")]
    #[case(dec!(1), "$1.00")]
    #[case(dec!(12.3), "$12.30")]
    #[case(dec!(999.99), "$999.99")]
    #[case(dec!(1000), "$1,000.00")]
    #[case(dec!(100000), "$100,000.00")]
    #[case(dec!(1234567.89), "$1,234,567.89")]
    #[case(dec!(-1234.5), "-$1,234.50")]
    fn test_format_usd(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(USD.format(amount), expected);
    }

    #[rstest]
    #[case(dec!(1), "1.00 \u{20ac}")]
    #[case(dec!(-0.5), "-0.50 \u{20ac}")]
    #[case(dec!(1234), "1,234.00 \u{20ac}")]
    fn test_format_suffix_template(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(EUR.format(amount), expected);
    }

    #[rstest]
    #[case(dec!(0), "\u{a5}0")]
    #[case(dec!(5), "\u{a5}5")]
    #[case(dec!(123456), "\u{a5}123,456")]
    #[case(dec!(1234.99), "\u{a5}1,234")]
    fn test_format_zero_fraction(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(JPY.format(amount), expected);
    }

    #[test]
    fn test_sub_minor_unit_truncates() {
        assert_eq!(USD.format(dec!(0.009)), "$0.00");
        assert_eq!(USD.format(dec!(1.999)), "$1.99");
        assert_eq!(USD.format(dec!(-1.999)), "-$1.99");
    }

    #[test]
    fn test_negative_below_minor_unit_keeps_sign() {
        assert_eq!(USD.format(dec!(-0.001)), "-$0.00");
    }

    #[test]
    fn test_empty_thousand_separator_disables_grouping() {
        let f = Formatter::new(2, ".", "", "$", "$1");
        assert_eq!(f.format(dec!(1234567)), "$1234567.00");
    }

    #[test]
    fn test_custom_separators() {
        let f = Formatter::new(2, ",", ".", "kr", "1 $");
        assert_eq!(f.format(dec!(1234567.5)), "1.234.567,50 kr");

        let f = Formatter::new(2, ",", "\u{a0}", "K\u{10d}", "1 $");
        assert_eq!(f.format(dec!(12345)), "12\u{a0}345,00 K\u{10d}");
    }

    #[test]
    fn test_three_digit_fraction() {
        let f = Formatter::new(3, ".", ",", "KD", "1 $");
        assert_eq!(f.format(dec!(1234.5678)), "1,234.567 KD");
        assert_eq!(f.format(dec!(0.001)), "0.001 KD");
    }

    #[test]
    fn test_wide_fraction_pads_leading_zeros() {
        let f = Formatter::new(5, ".", ",", "M$", "1 $");
        assert_eq!(f.format(dec!(1)), "1.00000 M$");
        assert_eq!(f.format(dec!(0.00042)), "0.00042 M$");
    }

    #[test]
    fn test_placeholders_replaced_once() {
        let f = Formatter::new(0, ".", ",", "#", "1 $ 1 $");
        assert_eq!(f.format(dec!(7)), "7 # 1 $");
    }

    #[test]
    fn test_template_without_grapheme() {
        let f = Formatter::new(2, ".", ",", "$", "1");
        assert_eq!(f.format(dec!(42)), "42.00");
    }

    #[test]
    fn test_scale_beyond_fraction_is_ignored() {
        assert_eq!(USD.format(dec!(1.2300000)), "$1.23");
    }

    #[test]
    fn test_from_currency() {
        let currency = Currency::new("CNY", "\u{5143}", "1 $", ".", ",", 2);
        let f = Formatter::from(&currency);
        assert_eq!(f.format(dec!(12.33)), "12.33 \u{5143}");
    }
}
