//! Window ("flexible") FX forward product.
//!
//! A window forward exchanges two fixed amounts on a payment date, but its
//! effective rate is the worst forward rate observable on any date of an
//! execution window. The window is either a half-open period of calendar
//! days or an explicit list of dates.
//!
//! # Examples
//!
//! ```
//! use fxflex_core::types::{Currency, CurrencyAmount, Date};
//! use fxflex_models::instruments::fx::{ExecutionWindow, FxWindowForward};
//! use fxflex_models::instruments::InstrumentError;
//!
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//!
//! // Amounts may be given in any order; EUR/USD stores EUR as base
//! let product = FxWindowForward::of(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     CurrencyAmount::new(Currency::EUR, -125_000.0),
//!     date(2018, 6, 30),
//!     None,
//!     ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30)),
//! )
//! .unwrap();
//! assert_eq!(product.base_currency_amount().currency(), Currency::EUR);
//!
//! // Both legs received is rejected
//! let err = FxWindowForward::of(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     CurrencyAmount::new(Currency::EUR, 125_000.0),
//!     date(2018, 6, 30),
//!     None,
//!     ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30)),
//! )
//! .unwrap_err();
//! assert_eq!(err, InstrumentError::SameSign);
//! ```

use std::collections::BTreeSet;

use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
use fxflex_core::types::{
    BusinessDayConvention, Currency, CurrencyAmount, CurrencyError, CurrencyPair, Date, FxRate,
    Payment,
};
use tracing::debug;

use super::resolved::ResolvedFxWindowForward;
use super::window::{ExecutionWindow, WindowDate};
use crate::instruments::InstrumentError;

/// The adjustment applied to payment and window dates when none is specified:
/// following, with no holidays.
pub fn default_payment_date_adjustment() -> BusinessDayAdjustment {
    BusinessDayAdjustment::new(
        BusinessDayConvention::Following,
        HolidayCalendarId::NO_HOLIDAYS,
    )
}

/// Orders two amounts so that the first is the base currency of the
/// conventional pair.
///
/// Amounts in the same currency are returned unchanged.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::{Currency, CurrencyAmount};
/// use fxflex_models::instruments::fx::normalize_currency_order;
///
/// let usd = CurrencyAmount::new(Currency::USD, 100.0);
/// let jpy = CurrencyAmount::new(Currency::JPY, -11_000.0);
/// let (base, counter) = normalize_currency_order(jpy, usd);
/// assert_eq!((base.currency(), counter.currency()), (Currency::USD, Currency::JPY));
/// ```
pub fn normalize_currency_order(
    amount1: CurrencyAmount,
    amount2: CurrencyAmount,
) -> (CurrencyAmount, CurrencyAmount) {
    match CurrencyPair::new(amount2.currency(), amount1.currency()) {
        Ok(reversed) if reversed.is_conventional() => (amount2, amount1),
        _ => (amount1, amount2),
    }
}

/// -1, 0 or 1; zero has no sign.
pub(crate) fn sign(amount: f64) -> i8 {
    if amount > 0.0 {
        1
    } else if amount < 0.0 {
        -1
    } else {
        0
    }
}

/// A window FX forward, validated and in conventional currency order.
///
/// Signed amounts follow the usual convention: positive is received,
/// negative is paid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FxWindowForwardBuilder", into = "FxWindowForwardBuilder")
)]
pub struct FxWindowForward {
    currency_pair: CurrencyPair,
    base_currency_amount: CurrencyAmount,
    counter_currency_amount: CurrencyAmount,
    payment_date: Date,
    payment_date_adjustment: Option<BusinessDayAdjustment>,
    window: ExecutionWindow,
}

impl FxWindowForward {
    /// Starts an empty builder.
    pub fn builder() -> FxWindowForwardBuilder {
        FxWindowForwardBuilder::new()
    }

    /// Creates a window forward from two signed amounts, in either order.
    ///
    /// # Errors
    /// Returns the `InstrumentError` of the first failing structural check.
    pub fn of(
        amount1: CurrencyAmount,
        amount2: CurrencyAmount,
        payment_date: Date,
        payment_date_adjustment: Option<BusinessDayAdjustment>,
        window: ExecutionWindow,
    ) -> Result<Self, InstrumentError> {
        FxWindowForwardBuilder::new()
            .base_currency_amount(amount1)
            .counter_currency_amount(amount2)
            .payment_date(payment_date)
            .payment_date_adjustment(payment_date_adjustment)
            .window(window)
            .build()
    }

    /// Creates a window forward from one signed amount and an FX rate.
    ///
    /// The other leg is the amount converted at the rate, with opposite sign.
    ///
    /// # Errors
    /// Returns `InstrumentError::Currency` if the rate does not involve the
    /// amount's currency, or any structural validation failure.
    pub fn from_fx_rate(
        amount: CurrencyAmount,
        fx_rate: &FxRate,
        payment_date: Date,
        payment_date_adjustment: Option<BusinessDayAdjustment>,
        window: ExecutionWindow,
    ) -> Result<Self, InstrumentError> {
        let pair = fx_rate.pair();
        let other = if amount.currency() == pair.base() {
            pair.counter()
        } else if amount.currency() == pair.counter() {
            pair.base()
        } else {
            return Err(CurrencyError::NotInPair {
                currency: amount.currency(),
                pair: pair.code(),
            }
            .into());
        };
        let other_amount = amount.convert_to(other, fx_rate)?.negated();
        Self::of(
            amount,
            other_amount,
            payment_date,
            payment_date_adjustment,
            window,
        )
    }

    /// Amount in the base currency of the conventional pair.
    #[inline]
    pub fn base_currency_amount(&self) -> CurrencyAmount {
        self.base_currency_amount
    }

    /// Amount in the counter currency of the conventional pair.
    #[inline]
    pub fn counter_currency_amount(&self) -> CurrencyAmount {
        self.counter_currency_amount
    }

    /// Contractual (unadjusted) payment date.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Explicit payment date adjustment, if any.
    #[inline]
    pub fn payment_date_adjustment(&self) -> Option<&BusinessDayAdjustment> {
        self.payment_date_adjustment.as_ref()
    }

    /// The adjustment resolution will use: the explicit one or the default.
    pub fn effective_payment_date_adjustment(&self) -> BusinessDayAdjustment {
        self.payment_date_adjustment
            .clone()
            .unwrap_or_else(default_payment_date_adjustment)
    }

    /// The execution window.
    #[inline]
    pub fn window(&self) -> &ExecutionWindow {
        &self.window
    }

    /// Conventional currency pair, base/counter.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.currency_pair
    }

    /// The two currencies of the product.
    pub fn currencies(&self) -> BTreeSet<Currency> {
        [
            self.base_currency_amount.currency(),
            self.counter_currency_amount.currency(),
        ]
        .into_iter()
        .collect()
    }

    /// The amount received: base if its amount is positive, otherwise counter.
    pub fn receive_currency_amount(&self) -> CurrencyAmount {
        if self.base_currency_amount.amount() > 0.0 {
            self.base_currency_amount
        } else {
            self.counter_currency_amount
        }
    }

    /// Applies all date adjustments and expands the window.
    ///
    /// # Errors
    /// Returns `InstrumentError::Calendar` if a calendar cannot be resolved.
    pub fn resolve(
        &self,
        ref_data: &ReferenceData,
    ) -> Result<ResolvedFxWindowForward, InstrumentError> {
        let adjustment = self.effective_payment_date_adjustment();
        let payment_date = adjustment.adjust(self.payment_date, ref_data)?;
        let window_dates = self.window.resolve(&adjustment, ref_data)?;

        debug!(
            pair = %self.currency_pair(),
            %payment_date,
            window_dates = window_dates.len(),
            adjustment = %adjustment,
            "Resolved window forward"
        );

        ResolvedFxWindowForward::new(
            Payment::new(self.base_currency_amount, payment_date),
            Payment::new(self.counter_currency_amount, payment_date),
            window_dates,
        )
    }
}

impl From<FxWindowForward> for FxWindowForwardBuilder {
    fn from(product: FxWindowForward) -> Self {
        let window = product.window;
        FxWindowForwardBuilder {
            base_currency_amount: Some(product.base_currency_amount),
            counter_currency_amount: Some(product.counter_currency_amount),
            payment_date: Some(product.payment_date),
            payment_date_adjustment: product.payment_date_adjustment,
            execution_period_start: window.execution_period_start(),
            execution_period_end: window.execution_period_end(),
            execution_period_dates: window.execution_period_dates().map(|d| d.to_vec()),
        }
    }
}

impl TryFrom<FxWindowForwardBuilder> for FxWindowForward {
    type Error = InstrumentError;

    fn try_from(builder: FxWindowForwardBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Builder for [`FxWindowForward`], also its serialised field layout.
///
/// `build` reapplies conventional currency ordering and runs every
/// structural check, so stored products with a stale base/counter
/// assignment are corrected when rebuilt.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxWindowForwardBuilder {
    base_currency_amount: Option<CurrencyAmount>,
    counter_currency_amount: Option<CurrencyAmount>,
    payment_date: Option<Date>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    payment_date_adjustment: Option<BusinessDayAdjustment>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    execution_period_start: Option<Date>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    execution_period_end: Option<Date>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    execution_period_dates: Option<Vec<WindowDate>>,
}

impl FxWindowForwardBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first amount (base after normalisation if conventional).
    pub fn base_currency_amount(mut self, amount: CurrencyAmount) -> Self {
        self.base_currency_amount = Some(amount);
        self
    }

    /// Sets the second amount.
    pub fn counter_currency_amount(mut self, amount: CurrencyAmount) -> Self {
        self.counter_currency_amount = Some(amount);
        self
    }

    /// Sets the contractual payment date.
    pub fn payment_date(mut self, date: Date) -> Self {
        self.payment_date = Some(date);
        self
    }

    /// Sets or clears the payment date adjustment.
    pub fn payment_date_adjustment(mut self, adjustment: Option<BusinessDayAdjustment>) -> Self {
        self.payment_date_adjustment = adjustment;
        self
    }

    /// Sets the execution period start.
    pub fn execution_period_start(mut self, date: Date) -> Self {
        self.execution_period_start = Some(date);
        self
    }

    /// Sets the execution period end.
    pub fn execution_period_end(mut self, date: Date) -> Self {
        self.execution_period_end = Some(date);
        self
    }

    /// Sets the explicit window dates.
    pub fn execution_period_dates(mut self, dates: Vec<WindowDate>) -> Self {
        self.execution_period_dates = Some(dates);
        self
    }

    /// Replaces the whole window specification.
    pub fn window(mut self, window: ExecutionWindow) -> Self {
        self.execution_period_start = window.execution_period_start();
        self.execution_period_end = window.execution_period_end();
        self.execution_period_dates = window.execution_period_dates().map(|d| d.to_vec());
        self
    }

    /// Normalises currency order and validates.
    ///
    /// # Errors
    /// `InstrumentError::MissingField` for an unset amount or payment date,
    /// otherwise the first failing structural check.
    pub fn build(self) -> Result<FxWindowForward, InstrumentError> {
        let amount1 = self
            .base_currency_amount
            .ok_or(InstrumentError::MissingField("base_currency_amount"))?;
        let amount2 = self
            .counter_currency_amount
            .ok_or(InstrumentError::MissingField("counter_currency_amount"))?;
        let payment_date = self
            .payment_date
            .ok_or(InstrumentError::MissingField("payment_date"))?;
        let (base, counter) = normalize_currency_order(amount1, amount2);

        let window = validate(
            base,
            counter,
            payment_date,
            self.execution_period_start,
            self.execution_period_end,
            self.execution_period_dates.unwrap_or_default(),
        )?;
        let currency_pair = CurrencyPair::new(base.currency(), counter.currency())?;

        Ok(FxWindowForward {
            currency_pair,
            base_currency_amount: base,
            counter_currency_amount: counter,
            payment_date,
            payment_date_adjustment: self.payment_date_adjustment,
            window,
        })
    }
}

fn validate(
    base: CurrencyAmount,
    counter: CurrencyAmount,
    payment_date: Date,
    start: Option<Date>,
    end: Option<Date>,
    dates: Vec<WindowDate>,
) -> Result<ExecutionWindow, InstrumentError> {
    if base.currency() == counter.currency() {
        return Err(InstrumentError::SameCurrency);
    }
    if !base.amount().is_finite() || !counter.amount().is_finite() {
        return Err(InstrumentError::NonFiniteAmount);
    }
    if (base.amount() != 0.0 || counter.amount() != 0.0)
        && sign(base.amount()) != -sign(counter.amount())
    {
        return Err(InstrumentError::SameSign);
    }

    let has_dates = !dates.is_empty();
    match (start, end) {
        (None, None) if !has_dates => return Err(InstrumentError::MissingWindow),
        (Some(_), None) if !has_dates => return Err(InstrumentError::MissingExecutionPeriodEnd),
        (None, Some(_)) if !has_dates => return Err(InstrumentError::MissingExecutionPeriodStart),
        (Some(_), _) | (_, Some(_)) if has_dates => return Err(InstrumentError::AmbiguousWindow),
        _ => {}
    }

    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            return Err(InstrumentError::InvalidExecutionPeriod);
        }
        if end > payment_date {
            return Err(InstrumentError::ExecutionPeriodAfterPayment);
        }
        return Ok(ExecutionWindow::Period { start, end });
    }

    if dates.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(InstrumentError::UnorderedExecutionDates);
    }
    if dates.iter().any(|d| d.date() > payment_date) {
        return Err(InstrumentError::ExecutionDateAfterPayment);
    }
    Ok(ExecutionWindow::Dates(dates))
}
