//! A single dated cash flow.

use super::currency::Currency;
use super::money::CurrencyAmount;
use super::time::Date;

/// An amount of money exchanged on a given date.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::{Currency, CurrencyAmount, Date, Payment};
///
/// let date = Date::from_ymd(2018, 7, 2).unwrap();
/// let payment = Payment::new(CurrencyAmount::new(Currency::USD, 150_000.0), date);
/// assert_eq!(payment.currency(), Currency::USD);
/// assert_eq!(payment.negated().amount(), -150_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payment {
    value: CurrencyAmount,
    date: Date,
}

impl Payment {
    /// Creates a payment.
    pub fn new(value: CurrencyAmount, date: Date) -> Self {
        Self { value, date }
    }

    /// The amount paid or received.
    #[inline]
    pub fn value(&self) -> CurrencyAmount {
        self.value
    }

    /// Currency of the payment.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.value.currency()
    }

    /// Signed amount of the payment.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.value.amount()
    }

    /// Payment date.
    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The same payment in the opposite direction.
    pub fn negated(&self) -> Self {
        Self::new(self.value.negated(), self.date)
    }

    /// The same amount paid on another date.
    pub fn with_date(&self, date: Date) -> Self {
        Self::new(self.value, date)
    }
}
