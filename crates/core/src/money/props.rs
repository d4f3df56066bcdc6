//! Property-based tests for money arithmetic and serialization.
//!
//! - Addition is exact, associative and commutative within a currency
//! - Mixed currencies always fail
//! - Serialization round-trips byte for byte

use proptest::prelude::*;
use rust_decimal::Decimal;

use moneta_shared::MoneyError;

use super::value::Money;

/// Strategy to generate signed amounts (-1,000,000.0000 to 1,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to pick a built-in currency code.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("JPY"), Just("CNY"), Just("KWD")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* three amounts in one currency, `add` equals the exact sum.
    #[test]
    fn prop_add_is_exact(a in amount(), b in amount(), c in amount(), code in currency_code()) {
        let ma = Money::new(a, code).unwrap();
        let mb = Money::new(b, code).unwrap();
        let mc = Money::new(c, code).unwrap();

        let sum = ma.add(&[&mb, &mc]).unwrap();
        prop_assert_eq!(sum.amount(), a + b + c);
        prop_assert_eq!(&sum.currency().code, code);
    }

    /// *For any* operand order, the sum is the same.
    #[test]
    fn prop_add_is_commutative(a in amount(), b in amount(), c in amount()) {
        let ma = Money::new(a, "USD").unwrap();
        let mb = Money::new(b, "USD").unwrap();
        let mc = Money::new(c, "USD").unwrap();

        let left = ma.add(&[&mb, &mc]).unwrap();
        let right = mc.add(&[&ma, &mb]).unwrap();
        let nested = ma.add(&[&mb]).unwrap().add(&[&mc]).unwrap();
        prop_assert_eq!(left.amount(), right.amount());
        prop_assert_eq!(left.amount(), nested.amount());
    }

    /// *For any* operand in a different currency, `add` fails.
    #[test]
    fn prop_add_mismatch_fails(a in amount(), b in amount(), position in 0usize..3) {
        let usd = Money::new(a, "USD").unwrap();
        let eur = Money::new(b, "EUR").unwrap();

        let result = match position {
            0 => eur.add(&[&usd, &usd]),
            1 => usd.add(&[&eur, &usd]),
            _ => usd.add(&[&usd, &eur]),
        };
        let is_mismatch = matches!(result, Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// *For any* value, serialize → deserialize → serialize is byte-identical.
    #[test]
    fn prop_json_round_trip(a in amount(), code in currency_code()) {
        let money = Money::new(a, code).unwrap();
        let first = money.to_json().unwrap();
        let decoded = Money::from_json(&first).unwrap();
        prop_assert_eq!(&decoded, &money);
        prop_assert_eq!(decoded.to_json().unwrap(), first);
    }
}
