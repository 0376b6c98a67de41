//! Signed currency amounts.
//!
//! Sign convention: a positive amount is received, a negative amount is paid.
//!
//! # Examples
//!
//! ```
//! use fxflex_core::types::{Currency, CurrencyAmount, MultiCurrencyAmount};
//!
//! let usd = CurrencyAmount::new(Currency::USD, 150_000.0);
//! let eur = CurrencyAmount::new(Currency::EUR, -125_000.0);
//!
//! let total = MultiCurrencyAmount::of([usd, eur]);
//! assert_eq!(total.amount(Currency::USD), 150_000.0);
//! assert_eq!(total.amount(Currency::EUR), -125_000.0);
//! assert_eq!(total.amount(Currency::GBP), 0.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use super::currency::Currency;
use super::error::CurrencyError;
use super::fx_rate::FxRate;

/// An amount of money in a single currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    currency: Currency,
    amount: f64,
}

impl CurrencyAmount {
    /// Creates an amount.
    #[inline]
    pub fn new(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount.
    #[inline]
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, 0.0)
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true if the amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Returns the amount with the sign flipped.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(self.currency, -self.amount)
    }

    /// Scales the amount.
    #[inline]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self::new(self.currency, self.amount * factor)
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    /// Returns `CurrencyError::Mismatch` if the currencies differ.
    pub fn plus(&self, other: &CurrencyAmount) -> Result<Self, CurrencyError> {
        if self.currency != other.currency {
            return Err(CurrencyError::Mismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(Self::new(self.currency, self.amount + other.amount))
    }

    /// Converts the amount into `target` using an FX rate whose pair
    /// contains both currencies.
    ///
    /// # Errors
    /// Returns `CurrencyError::NotInPair` if the rate does not quote the two currencies.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::{Currency, CurrencyAmount, FxRate};
    ///
    /// let rate = FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap();
    /// let usd = CurrencyAmount::new(Currency::USD, 150_000.0);
    /// let eur = usd.convert_to(Currency::EUR, &rate).unwrap();
    /// assert!((eur.amount() - 125_000.0).abs() < 1e-9);
    /// ```
    pub fn convert_to(&self, target: Currency, rate: &FxRate) -> Result<Self, CurrencyError> {
        if target == self.currency {
            return Ok(*self);
        }
        let factor = rate.fx_rate(self.currency, target)?;
        Ok(Self::new(target, self.amount * factor))
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// A bundle of amounts, at most one per currency.
///
/// Iteration is in currency code order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiCurrencyAmount {
    amounts: BTreeMap<Currency, f64>,
}

impl MultiCurrencyAmount {
    /// An empty bundle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a bundle, summing amounts that share a currency.
    pub fn of(amounts: impl IntoIterator<Item = CurrencyAmount>) -> Self {
        let mut result = Self::empty();
        for amount in amounts {
            result.add(amount);
        }
        result
    }

    fn add(&mut self, amount: CurrencyAmount) {
        *self.amounts.entry(amount.currency()).or_insert(0.0) += amount.amount();
    }

    /// Returns the amount held in `currency`, zero if absent.
    pub fn amount(&self, currency: Currency) -> f64 {
        self.amounts.get(&currency).copied().unwrap_or(0.0)
    }

    /// Returns the amount held in `currency` if present.
    pub fn get(&self, currency: Currency) -> Option<CurrencyAmount> {
        self.amounts
            .get(&currency)
            .map(|&amount| CurrencyAmount::new(currency, amount))
    }

    /// Returns true if `currency` has an entry.
    pub fn contains(&self, currency: Currency) -> bool {
        self.amounts.contains_key(&currency)
    }

    /// Number of currencies held.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no currency has an entry.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Currencies held, in code order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.amounts.keys().copied()
    }

    /// Amounts held, in currency code order.
    pub fn iter(&self) -> impl Iterator<Item = CurrencyAmount> + '_ {
        self.amounts
            .iter()
            .map(|(&currency, &amount)| CurrencyAmount::new(currency, amount))
    }

    /// Adds a single amount.
    pub fn plus(&self, amount: CurrencyAmount) -> Self {
        let mut result = self.clone();
        result.add(amount);
        result
    }

    /// Adds every amount of another bundle.
    pub fn plus_all(&self, other: &MultiCurrencyAmount) -> Self {
        let mut result = self.clone();
        for amount in other.iter() {
            result.add(amount);
        }
        result
    }

    /// Scales every amount.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self::of(self.iter().map(|a| a.multiplied_by(factor)))
    }

    /// Converts the total into a single currency.
    ///
    /// `rate` returns the number of units of the second currency per unit
    /// of the first.
    ///
    /// # Errors
    /// Propagates any error returned by `rate`.
    pub fn convert_to<E, F>(&self, target: Currency, mut rate: F) -> Result<CurrencyAmount, E>
    where
        F: FnMut(Currency, Currency) -> Result<f64, E>,
    {
        let mut total = 0.0;
        for amount in self.iter() {
            if amount.currency() == target {
                total += amount.amount();
            } else {
                total += amount.amount() * rate(amount.currency(), target)?;
            }
        }
        Ok(CurrencyAmount::new(target, total))
    }
}

impl FromIterator<CurrencyAmount> for MultiCurrencyAmount {
    fn from_iter<I: IntoIterator<Item = CurrencyAmount>>(iter: I) -> Self {
        Self::of(iter)
    }
}
