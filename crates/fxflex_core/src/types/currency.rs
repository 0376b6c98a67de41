//! Currency types for FX calculations.
//!
//! This module provides ISO 4217 currency codes with decimal precision and
//! the market priority used to order currency pairs conventionally.
//!
//! # Examples
//!
//! ```
//! use fxflex_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.decimal_places(), 0);  // Yen has no decimal places
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes.
///
/// Variants are declared alphabetically so the derived ordering matches the
/// ordering of their codes.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::currency::Currency;
///
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// assert!(Currency::AUD < Currency::USD);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Australian Dollar
    AUD,
    /// Brazilian Real
    BRL,
    /// Canadian Dollar
    CAD,
    /// Swiss Franc
    CHF,
    /// Danish Krone
    DKK,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Hong Kong Dollar
    HKD,
    /// Indian Rupee
    INR,
    /// Japanese Yen
    JPY,
    /// South Korean Won
    KRW,
    /// Mexican Peso
    MXN,
    /// Malaysian Ringgit
    MYR,
    /// Norwegian Krone
    NOK,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// United States Dollar
    USD,
}

impl Currency {
    /// All supported currencies, in code order.
    pub const ALL: [Currency; 17] = [
        Currency::AUD,
        Currency::BRL,
        Currency::CAD,
        Currency::CHF,
        Currency::DKK,
        Currency::EUR,
        Currency::GBP,
        Currency::HKD,
        Currency::INR,
        Currency::JPY,
        Currency::KRW,
        Currency::MXN,
        Currency::MYR,
        Currency::NOK,
        Currency::NZD,
        Currency::SEK,
        Currency::USD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::BRL => "BRL",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::DKK => "DKK",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::HKD => "HKD",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
            Currency::MXN => "MXN",
            Currency::MYR => "MYR",
            Currency::NOK => "NOK",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::USD => "USD",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::EUR.decimal_places(), 2);
    /// assert_eq!(Currency::KRW.decimal_places(), 0);
    /// ```
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            _ => 2,
        }
    }

    /// Market quoting priority; the lower value is quoted as the base.
    ///
    /// EUR, GBP, AUD and NZD are quoted against USD; USD is quoted against
    /// the remaining currencies; JPY is always the counter.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::currency::Currency;
    ///
    /// assert!(Currency::EUR.market_priority() < Currency::USD.market_priority());
    /// assert!(Currency::USD.market_priority() < Currency::JPY.market_priority());
    /// ```
    pub fn market_priority(&self) -> u8 {
        match self {
            Currency::EUR => 1,
            Currency::GBP => 2,
            Currency::AUD => 3,
            Currency::NZD => 4,
            Currency::USD => 5,
            Currency::CAD => 6,
            Currency::CHF => 7,
            Currency::NOK => 8,
            Currency::SEK => 9,
            Currency::DKK => 10,
            Currency::BRL => 11,
            Currency::HKD => 12,
            Currency::INR => 13,
            Currency::KRW => 14,
            Currency::MXN => 15,
            Currency::MYR => 16,
            Currency::JPY => 20,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let upper = s.trim().to_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|ccy| ccy.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
