//! Resolved window forward: dates adjusted, window expanded.

use fxflex_core::types::{CurrencyAmount, CurrencyPair, Date, FxRate, Payment};

use super::window_forward::sign;
use crate::instruments::InstrumentError;

/// A window forward ready for valuation.
///
/// Both payments carry the adjusted payment date; the window dates are
/// ascending, distinct and never after it. Base and counter follow the
/// conventional order of the pair.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use fxflex_models::instruments::fx::ResolvedFxWindowForward;
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let resolved = ResolvedFxWindowForward::from_fx_rate(
///     CurrencyAmount::new(Currency::EUR, 1_000.0),
///     &FxRate::new(Currency::EUR, Currency::USD, 1.25).unwrap(),
///     date(2018, 7, 2),
///     vec![date(2018, 6, 1), date(2018, 6, 29)],
/// )
/// .unwrap();
///
/// assert_eq!(resolved.counter_currency_payment().amount(), -1_250.0);
/// assert_eq!(resolved.receive_currency_amount().currency(), Currency::EUR);
/// assert_eq!(resolved.inverse().receive_currency_amount().currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ResolvedFields", into = "ResolvedFields")
)]
pub struct ResolvedFxWindowForward {
    currency_pair: CurrencyPair,
    base_currency_payment: Payment,
    counter_currency_payment: Payment,
    window_dates: Vec<Date>,
}

impl ResolvedFxWindowForward {
    /// Creates a resolved window forward from two payments, in either order.
    ///
    /// # Errors
    /// `SamePaymentCurrency`, `NonFiniteAmount`, `SamePaymentSign`,
    /// `PaymentDateMismatch` or `InvalidWindowDates`.
    pub fn new(
        payment1: Payment,
        payment2: Payment,
        window_dates: Vec<Date>,
    ) -> Result<Self, InstrumentError> {
        let (base, counter) = match CurrencyPair::new(payment2.currency(), payment1.currency()) {
            Ok(reversed) if reversed.is_conventional() => (payment2, payment1),
            _ => (payment1, payment2),
        };
        if base.currency() == counter.currency() {
            return Err(InstrumentError::SamePaymentCurrency);
        }
        if !base.amount().is_finite() || !counter.amount().is_finite() {
            return Err(InstrumentError::NonFiniteAmount);
        }
        if (base.amount() != 0.0 || counter.amount() != 0.0)
            && sign(base.amount()) != -sign(counter.amount())
        {
            return Err(InstrumentError::SamePaymentSign);
        }
        if base.date() != counter.date() {
            return Err(InstrumentError::PaymentDateMismatch);
        }
        let payment_date = base.date();
        if window_dates.windows(2).any(|w| w[0] >= w[1])
            || window_dates.iter().any(|d| *d > payment_date)
        {
            return Err(InstrumentError::InvalidWindowDates);
        }
        Ok(Self {
            currency_pair: CurrencyPair::new(base.currency(), counter.currency())?,
            base_currency_payment: base,
            counter_currency_payment: counter,
            window_dates,
        })
    }

    /// Creates a resolved window forward from one amount and an FX rate.
    ///
    /// No date adjustment applies.
    ///
    /// # Errors
    /// `InstrumentError::Currency` if the rate does not involve the amount's
    /// currency, otherwise as [`ResolvedFxWindowForward::new`].
    pub fn from_fx_rate(
        amount: CurrencyAmount,
        fx_rate: &FxRate,
        payment_date: Date,
        window_dates: Vec<Date>,
    ) -> Result<Self, InstrumentError> {
        let pair = fx_rate.pair();
        let other = if amount.currency() == pair.base() {
            pair.counter()
        } else {
            pair.base()
        };
        let other_amount = amount.convert_to(other, fx_rate)?.negated();
        Self::new(
            Payment::new(amount, payment_date),
            Payment::new(other_amount, payment_date),
            window_dates,
        )
    }

    /// Payment in the base currency, positive if received.
    #[inline]
    pub fn base_currency_payment(&self) -> Payment {
        self.base_currency_payment
    }

    /// Payment in the counter currency, positive if received.
    #[inline]
    pub fn counter_currency_payment(&self) -> Payment {
        self.counter_currency_payment
    }

    /// Adjusted observation dates.
    #[inline]
    pub fn window_dates(&self) -> &[Date] {
        &self.window_dates
    }

    /// Conventional currency pair.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.currency_pair
    }

    /// Adjusted payment date, taken from the base payment.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.base_currency_payment.date()
    }

    /// The amount received: base if its amount is positive, otherwise counter.
    pub fn receive_currency_amount(&self) -> CurrencyAmount {
        if self.base_currency_payment.amount() > 0.0 {
            self.base_currency_payment.value()
        } else {
            self.counter_currency_payment.value()
        }
    }

    /// The opposite side of the same transaction: both payments negated.
    pub fn inverse(&self) -> Self {
        Self {
            currency_pair: self.currency_pair,
            base_currency_payment: self.base_currency_payment.negated(),
            counter_currency_payment: self.counter_currency_payment.negated(),
            window_dates: self.window_dates.clone(),
        }
    }
}

/// Serialised field layout; rebuilt through [`ResolvedFxWindowForward::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ResolvedFields {
    base_currency_payment: Payment,
    counter_currency_payment: Payment,
    window_dates: Vec<Date>,
}

#[cfg(feature = "serde")]
impl From<ResolvedFxWindowForward> for ResolvedFields {
    fn from(resolved: ResolvedFxWindowForward) -> Self {
        Self {
            base_currency_payment: resolved.base_currency_payment,
            counter_currency_payment: resolved.counter_currency_payment,
            window_dates: resolved.window_dates,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ResolvedFields> for ResolvedFxWindowForward {
    type Error = InstrumentError;

    fn try_from(fields: ResolvedFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.base_currency_payment,
            fields.counter_currency_payment,
            fields.window_dates,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxflex_core::types::Currency;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn payment(currency: Currency, amount: f64) -> Payment {
        Payment::new(CurrencyAmount::new(currency, amount), date(2018, 7, 2))
    }

    #[test]
    fn test_new_orders_payments() {
        let resolved = ResolvedFxWindowForward::new(
            payment(Currency::USD, 150_000.0),
            payment(Currency::EUR, -125_000.0),
            vec![date(2018, 6, 29)],
        )
        .unwrap();
        assert_eq!(resolved.base_currency_payment().currency(), Currency::EUR);
        assert_eq!(resolved.currency_pair().code(), "EUR/USD");
        assert_eq!(resolved.receive_currency_amount().amount(), 150_000.0);
        assert_eq!(resolved.payment_date(), date(2018, 7, 2));
    }

    #[test]
    fn test_new_rejects_invalid_payments() {
        assert_eq!(
            ResolvedFxWindowForward::new(
                payment(Currency::USD, 1.0),
                payment(Currency::USD, -1.0),
                vec![]
            ),
            Err(InstrumentError::SamePaymentCurrency)
        );
        assert_eq!(
            ResolvedFxWindowForward::new(
                payment(Currency::USD, 1.0),
                payment(Currency::EUR, 1.0),
                vec![]
            ),
            Err(InstrumentError::SamePaymentSign)
        );
    }

    #[test]
    fn test_new_rejects_non_finite_amounts() {
        let cases = [(f64::NAN, f64::NAN), (f64::NAN, 0.0), (0.0, f64::NAN), (f64::INFINITY, -1.0)];
        for (usd, eur) in cases {
            assert_eq!(
                ResolvedFxWindowForward::new(
                    payment(Currency::USD, usd),
                    payment(Currency::EUR, eur),
                    vec![]
                ),
                Err(InstrumentError::NonFiniteAmount)
            );
        }
    }

    #[test]
    fn test_new_rejects_mismatched_payment_dates() {
        let late_eur = Payment::new(CurrencyAmount::new(Currency::EUR, -125_000.0), date(2018, 12, 31));
        assert_eq!(
            ResolvedFxWindowForward::new(
                payment(Currency::USD, 150_000.0),
                late_eur,
                vec![date(2018, 6, 29)]
            ),
            Err(InstrumentError::PaymentDateMismatch)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialisation_rejects_mismatched_payment_dates() {
        let resolved = ResolvedFxWindowForward::new(
            payment(Currency::USD, 150_000.0),
            payment(Currency::EUR, -125_000.0),
            vec![date(2018, 6, 29)],
        )
        .unwrap();
        let mut json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(
            serde_json::from_value::<ResolvedFxWindowForward>(json.clone()).unwrap(),
            resolved
        );

        json["counter_currency_payment"]["date"] = serde_json::json!("2018-12-31");
        let err = serde_json::from_value::<ResolvedFxWindowForward>(json).unwrap_err();
        assert!(err.to_string().contains("Payments must have the same date"));
    }

    #[test]
    fn test_new_rejects_invalid_window_dates() {
        let duplicate = ResolvedFxWindowForward::new(
            payment(Currency::USD, 1.0),
            payment(Currency::EUR, -1.0),
            vec![date(2018, 6, 1), date(2018, 6, 1)],
        );
        assert_eq!(duplicate, Err(InstrumentError::InvalidWindowDates));

        let late = ResolvedFxWindowForward::new(
            payment(Currency::USD, 1.0),
            payment(Currency::EUR, -1.0),
            vec![date(2018, 7, 3)],
        );
        assert_eq!(late, Err(InstrumentError::InvalidWindowDates));
    }

    #[test]
    fn test_receive_currency_when_both_zero() {
        let resolved = ResolvedFxWindowForward::new(
            payment(Currency::EUR, 0.0),
            payment(Currency::USD, 0.0),
            vec![],
        )
        .unwrap();
        assert_eq!(resolved.receive_currency_amount().currency(), Currency::USD);
    }

    #[test]
    fn test_inverse_negates_both_payments() {
        let resolved = ResolvedFxWindowForward::new(
            payment(Currency::GBP, -100.0),
            payment(Currency::USD, 130.0),
            vec![date(2018, 6, 29)],
        )
        .unwrap();
        let inverse = resolved.inverse();
        assert_eq!(inverse.base_currency_payment().amount(), 100.0);
        assert_eq!(inverse.counter_currency_payment().amount(), -130.0);
        assert_eq!(inverse.window_dates(), resolved.window_dates());
        assert_eq!(inverse.inverse(), resolved);
    }
}
