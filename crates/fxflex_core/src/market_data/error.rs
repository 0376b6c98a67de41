//! Market data error types.
//!
//! This module provides structured error handling for curve, FX rate and
//! sensitivity lookups performed by rates providers.

use crate::types::{Currency, CurrencyPair};
use thiserror::Error;

/// Errors raised by curves and rates providers.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::MarketDataError;
/// use fxflex_core::types::Currency;
///
/// let err = MarketDataError::CurveNotFound(Currency::EUR);
/// assert_eq!(format!("{}", err), "No discount curve for currency EUR");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Negative or otherwise invalid time to maturity
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// Offending time in years
        t: f64,
    },

    /// Query outside the curve domain with extrapolation disabled
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// Queried value
        x: f64,
        /// Lower bound of the domain
        min: f64,
        /// Upper bound of the domain
        max: f64,
    },

    /// Too few or mismatched pillar points
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points supplied
        got: usize,
        /// Number of points required
        need: usize,
    },

    /// No discount curve registered for the currency
    #[error("No discount curve for currency {0}")]
    CurveNotFound(Currency),

    /// No spot rate between the two currencies
    #[error("No FX rate for {base}/{counter}")]
    FxRateNotFound {
        /// Requested base currency
        base: Currency,
        /// Requested counter currency
        counter: Currency,
    },

    /// Reference currency is not part of the requested pair
    #[error("Currency {currency} is not part of pair {pair}")]
    CurrencyNotInPair {
        /// Offending currency
        currency: Currency,
        /// Requested pair
        pair: CurrencyPair,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MarketDataError::InvalidMaturity { t: -1.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -1.5");

        let err = MarketDataError::FxRateNotFound {
            base: Currency::EUR,
            counter: Currency::JPY,
        };
        assert_eq!(format!("{}", err), "No FX rate for EUR/JPY");

        let err = MarketDataError::CurrencyNotInPair {
            currency: Currency::GBP,
            pair: CurrencyPair::new(Currency::EUR, Currency::USD).unwrap(),
        };
        assert_eq!(format!("{}", err), "Currency GBP is not part of pair EUR/USD");
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarketDataError::InsufficientData { got: 1, need: 2 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
