//! Currency pair types for FX calculations.
//!
//! A pair is written `BASE/COUNTER`: one unit of base is worth `rate` units
//! of counter. The market convention decides which currency of a pair is
//! quoted as the base; [`CurrencyPair::is_conventional`] and
//! [`CurrencyPair::to_conventional`] expose that rule.
//!
//! # Examples
//!
//! ```
//! use fxflex_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::USD, Currency::EUR).unwrap();
//! assert!(!pair.is_conventional());
//!
//! let conventional = pair.to_conventional();
//! assert_eq!(conventional.base(), Currency::EUR);
//! assert_eq!(conventional.counter(), Currency::USD);
//! assert_eq!(conventional.code(), "EUR/USD");
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered pair of distinct currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and counter are the same.
    pub fn new(base: Currency, counter: Currency) -> Result<Self, CurrencyError> {
        if base == counter {
            return Err(CurrencyError::SameCurrency(base));
        }
        Ok(Self { base, counter })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter currency.
    #[inline]
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns the pair with base and counter swapped.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Returns true if the currency is either side of the pair.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }

    /// Returns true if `other` is this pair with the sides swapped.
    #[inline]
    pub fn is_inverse(&self, other: &CurrencyPair) -> bool {
        self.base == other.counter && self.counter == other.base
    }

    /// Returns true if the base has the higher market priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::{Currency, CurrencyPair};
    ///
    /// assert!(CurrencyPair::new(Currency::EUR, Currency::USD).unwrap().is_conventional());
    /// assert!(CurrencyPair::new(Currency::USD, Currency::JPY).unwrap().is_conventional());
    /// assert!(!CurrencyPair::new(Currency::CAD, Currency::USD).unwrap().is_conventional());
    /// ```
    pub fn is_conventional(&self) -> bool {
        self.base.market_priority() < self.counter.market_priority()
    }

    /// Returns the market-conventional orientation of this pair.
    pub fn to_conventional(&self) -> Self {
        if self.is_conventional() {
            *self
        } else {
            self.inverse()
        }
    }

    /// Returns the pair code in `BASE/COUNTER` format.
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.counter.code())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses `BASE/COUNTER`, e.g. "EUR/USD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| CurrencyError::InvalidPair(s.to_string()))?;
        CurrencyPair::new(base.parse()?, counter.parse()?)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::CurrencyPair;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for CurrencyPair {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.code())
        }
    }

    impl<'de> Deserialize<'de> for CurrencyPair {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_currency_rejected() {
        match CurrencyPair::new(Currency::USD, Currency::USD) {
            Err(CurrencyError::SameCurrency(ccy)) => assert_eq!(ccy, Currency::USD),
            other => panic!("Expected SameCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_inverse_and_contains() {
        let pair = CurrencyPair::new(Currency::GBP, Currency::JPY).unwrap();
        let inv = pair.inverse();
        assert_eq!(inv.base(), Currency::JPY);
        assert!(pair.is_inverse(&inv));
        assert!(!pair.is_inverse(&pair));
        assert!(pair.contains(Currency::JPY));
        assert!(!pair.contains(Currency::USD));
    }

    #[test]
    fn test_conventional_pairs() {
        let cases = [
            (Currency::EUR, Currency::USD),
            (Currency::GBP, Currency::USD),
            (Currency::AUD, Currency::USD),
            (Currency::NZD, Currency::USD),
            (Currency::USD, Currency::CAD),
            (Currency::USD, Currency::CHF),
            (Currency::USD, Currency::JPY),
            (Currency::USD, Currency::INR),
            (Currency::EUR, Currency::GBP),
        ];
        for (base, counter) in cases {
            let pair = CurrencyPair::new(base, counter).unwrap();
            assert!(pair.is_conventional(), "{} should be conventional", pair);
            assert!(!pair.inverse().is_conventional());
            assert_eq!(pair.inverse().to_conventional(), pair);
        }
    }

    #[test]
    fn test_parse_code() {
        let pair: CurrencyPair = "EUR/USD".parse().unwrap();
        assert_eq!(pair.code(), "EUR/USD");
        assert_eq!(pair.to_string(), "EUR/USD");
        assert!("EURUSD".parse::<CurrencyPair>().is_err());
        assert!("EUR/EUR".parse::<CurrencyPair>().is_err());
    }

    proptest! {
        #[test]
        fn test_to_conventional_is_idempotent(i in 0usize..17, j in 0usize..17) {
            prop_assume!(i != j);
            let pair = CurrencyPair::new(Currency::ALL[i], Currency::ALL[j]).unwrap();
            let once = pair.to_conventional();
            prop_assert!(once.is_conventional());
            prop_assert_eq!(once.to_conventional(), once);
            prop_assert_eq!(pair.inverse().to_conventional(), once);
        }
    }
}
