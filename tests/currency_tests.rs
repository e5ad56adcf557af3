use finance_core::currency::{self, Currency};

const TOLERANCE: f64 = 1e-9;

#[test]
fn round_trip_is_identity_within_tolerance() {
    for currency in [Currency::Huf, Currency::Eur, Currency::Usd] {
        let amount = 123.45;
        let back = currency::from_base(currency::to_base(amount, currency), currency);
        assert!(
            (back - amount).abs() < TOLERANCE,
            "{:?}: {} != {}",
            currency,
            back,
            amount
        );
    }
}

#[test]
fn base_currency_is_the_unit_of_account() {
    assert_eq!(currency::to_base(1500.0, Currency::Huf), 1500.0);
    assert_eq!(currency::from_base(1500.0, Currency::Huf), 1500.0);
}

#[test]
fn foreign_conversion_scales_by_the_fixed_rate() {
    assert_eq!(currency::to_base(100.0, Currency::Eur), 39500.0);
    assert_eq!(currency::to_base(100.0, Currency::Usd), 35500.0);
}

#[test]
fn base_currency_formats_whole_units_with_suffix() {
    assert_eq!(currency::format(12345.6, Currency::Huf), "12346 Ft");
    assert_eq!(currency::format(0.0, Currency::Huf), "0 Ft");
}

#[test]
fn foreign_currencies_format_two_decimals_with_prefix() {
    assert_eq!(currency::format(39500.0, Currency::Eur), "€100.00");
    assert_eq!(currency::format(35500.0, Currency::Usd), "$100.00");
    assert_eq!(currency::format(-35500.0, Currency::Usd), "-$100.00");
}
