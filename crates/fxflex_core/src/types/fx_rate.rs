//! FX rates between two currencies.

use std::fmt;

use super::currency::Currency;
use super::currency_pair::CurrencyPair;
use super::error::CurrencyError;

/// A rate quoting how many units of the counter currency one unit of the
/// base currency is worth.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::{Currency, FxRate};
///
/// let eurusd = FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap();
/// assert_eq!(eurusd.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.20);
/// assert!((eurusd.fx_rate(Currency::USD, Currency::EUR).unwrap() - 1.0 / 1.20).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxRate {
    pair: CurrencyPair,
    rate: f64,
}

impl FxRate {
    /// Creates a rate for `base/counter`.
    ///
    /// # Errors
    /// - `CurrencyError::SameCurrency` if the currencies are equal
    /// - `CurrencyError::InvalidFxRate` if the rate is not positive and finite
    pub fn new(base: Currency, counter: Currency, rate: f64) -> Result<Self, CurrencyError> {
        Self::from_pair(CurrencyPair::new(base, counter)?, rate)
    }

    /// Creates a rate for an existing pair.
    ///
    /// # Errors
    /// Returns `CurrencyError::InvalidFxRate` if the rate is not positive and finite.
    pub fn from_pair(pair: CurrencyPair, rate: f64) -> Result<Self, CurrencyError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CurrencyError::InvalidFxRate(rate));
        }
        Ok(Self { pair, rate })
    }

    /// Returns the quoted pair.
    #[inline]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the rate in the quoted orientation.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the rate expressed as `base/counter`, inverting if needed.
    ///
    /// # Errors
    /// Returns `CurrencyError::NotInPair` if the currencies are not the quoted pair.
    pub fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, CurrencyError> {
        if base == self.pair.base() && counter == self.pair.counter() {
            Ok(self.rate)
        } else if base == self.pair.counter() && counter == self.pair.base() {
            Ok(1.0 / self.rate)
        } else {
            let currency = if self.pair.contains(base) { counter } else { base };
            Err(CurrencyError::NotInPair {
                currency,
                pair: self.pair.code(),
            })
        }
    }

    /// Returns the same rate quoted the other way round.
    pub fn inverse(&self) -> Self {
        Self {
            pair: self.pair.inverse(),
            rate: 1.0 / self.rate,
        }
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pair, self.rate)
    }
}
