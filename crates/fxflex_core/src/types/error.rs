//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from valuation operations
//! - `DateError`: Errors from date construction, parsing and arithmetic
//! - `CurrencyError`: Errors from currencies, currency pairs and FX rates

use thiserror::Error;

use super::currency::Currency;
use super::time::Date;
use crate::market_data::MarketDataError;

/// Categorised pricing errors.
///
/// Market data failures are carried through unchanged so callers can tell a
/// missing curve apart from an invalid trade.
///
/// # Examples
/// ```
/// use fxflex_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("zero base notional".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: zero base notional");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Market data lookup failed
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Currency or FX rate failure
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use fxflex_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2018, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2018-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },

    /// Failed to parse a date string
    #[error("Failed to parse date: {0}")]
    ParseError(String),

    /// Date arithmetic left the representable range
    #[error("Date out of range: {date} shifted by {days} days")]
    OutOfRange {
        /// Starting date
        date: Date,
        /// Requested shift in days
        days: i64,
    },

    /// Unknown day count or business day convention name
    #[error("Unknown convention: {0}")]
    UnknownConvention(String),
}

/// Currency, currency pair and FX rate errors.
///
/// # Examples
/// ```
/// use fxflex_core::types::{Currency, CurrencyError};
///
/// let err = CurrencyError::SameCurrency(Currency::USD);
/// assert_eq!(format!("{}", err), "Currency pair must have different currencies: USD");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// Unknown ISO 4217 code
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Both sides of a pair are the same currency
    #[error("Currency pair must have different currencies: {0}")]
    SameCurrency(Currency),

    /// Malformed pair code such as "EURUSD" or "EUR-USD"
    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),

    /// FX rate is not strictly positive and finite
    #[error("Invalid FX rate: {0}")]
    InvalidFxRate(f64),

    /// Currency is not part of the FX rate's pair
    #[error("Currency {currency} is not part of pair {pair}")]
    NotInPair {
        /// Offending currency
        currency: Currency,
        /// Pair code, e.g. "EUR/USD"
        pair: String,
    },

    /// Arithmetic between amounts in different currencies
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    Mismatch {
        /// Expected currency
        expected: Currency,
        /// Actual currency
        actual: Currency,
    },
}
