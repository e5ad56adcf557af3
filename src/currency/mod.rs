//! Conversion between the base unit of account and display currencies.
//!
//! All amounts are persisted in forints; EUR and USD are pure view
//! transforms backed by fixed rate constants.

use serde::{Deserialize, Serialize};

const EUR_TO_BASE: f64 = 395.0;
const USD_TO_BASE: f64 = 355.0;

/// The closed set of currencies the tracker renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    Huf,
    Eur,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Huf => "HUF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Huf => "Ft",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    /// Decimal places shown for the currency; the base currency renders whole units.
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Huf => 0,
            Currency::Eur | Currency::Usd => 2,
        }
    }

    fn base_rate(&self) -> f64 {
        match self {
            Currency::Huf => 1.0,
            Currency::Eur => EUR_TO_BASE,
            Currency::Usd => USD_TO_BASE,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Huf
    }
}

/// Converts an amount expressed in `from` into base units.
pub fn to_base(amount: f64, from: Currency) -> f64 {
    amount * from.base_rate()
}

/// Converts an amount in base units into the display currency `to`.
pub fn from_base(amount_base: f64, to: Currency) -> f64 {
    amount_base * (1.0 / to.base_rate())
}

/// Renders a base-unit amount in the given display currency.
///
/// The base currency uses a suffixed symbol and whole units; foreign
/// currencies use a prefixed symbol with two decimals.
pub fn format(amount_base: f64, currency: Currency) -> String {
    let value = from_base(amount_base, currency);
    match currency {
        Currency::Huf => format!("{:.0} {}", value, currency.symbol()),
        Currency::Eur | Currency::Usd => {
            if value < 0.0 {
                format!("-{}{:.2}", currency.symbol(), value.abs())
            } else {
                format!("{}{:.2}", currency.symbol(), value)
            }
        }
    }
}
