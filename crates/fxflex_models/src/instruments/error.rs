//! Instrument error types.
//!
//! This module provides structured error handling for window forward
//! construction, deserialisation and resolution.

use fxflex_core::calendar::CalendarError;
use fxflex_core::types::{CurrencyError, PricingError};
use thiserror::Error;

/// Instrument-related errors.
///
/// Each structural check on a window forward has its own variant, so callers
/// can tell the failures apart without parsing messages.
///
/// # Examples
/// ```
/// use fxflex_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnorderedExecutionDates;
/// assert_eq!(err.to_string(), "execution_period_dates must be in ascending order");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Both amounts are in the same currency.
    #[error("Amounts must have different currencies")]
    SameCurrency,

    /// The amounts are not one pay and one receive.
    #[error("Amounts must have different signs")]
    SameSign,

    /// Neither an execution period nor explicit dates were given.
    #[error("Window dates must be provided")]
    MissingWindow,

    /// An execution period start was given without an end.
    #[error("execution_period_end must be provided")]
    MissingExecutionPeriodEnd,

    /// An execution period end was given without a start.
    #[error("execution_period_start must be provided")]
    MissingExecutionPeriodStart,

    /// Both an execution period bound and explicit dates were given.
    #[error("Window must be either an execution period or explicit dates, not both")]
    AmbiguousWindow,

    /// The execution period start is not strictly before its end.
    #[error("execution_period_start must be before execution_period_end")]
    InvalidExecutionPeriod,

    /// The execution period ends after the payment date.
    #[error("execution_period_end must be before payment_date")]
    ExecutionPeriodAfterPayment,

    /// Explicit window dates decrease somewhere.
    #[error("execution_period_dates must be in ascending order")]
    UnorderedExecutionDates,

    /// An explicit window date falls after the payment date.
    #[error("execution_period_dates must not be after payment_date")]
    ExecutionDateAfterPayment,

    /// Resolved payments are in the same currency.
    #[error("Payments must have different currencies")]
    SamePaymentCurrency,

    /// Resolved payments are not one pay and one receive.
    #[error("Payments must have different signs")]
    SamePaymentSign,

    /// Resolved payments fall on different dates.
    #[error("Payments must have the same date")]
    PaymentDateMismatch,

    /// An amount is NaN or infinite.
    #[error("Amounts must be finite")]
    NonFiniteAmount,

    /// Resolved window dates are not strictly ascending or pass the payment date.
    #[error("window_dates must be strictly ascending and not after the payment date")]
    InvalidWindowDates,

    /// A required field was not set on a builder.
    #[error("{0} must be provided")]
    MissingField(&'static str),

    /// Currency conversion failure, for example an FX rate not covering the amount.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Business day adjustment failure during resolution.
    #[error("Resolution failed: {0}")]
    Calendar(#[from] CalendarError),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::Currency(e) => PricingError::Currency(e),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            InstrumentError::SameCurrency.to_string(),
            "Amounts must have different currencies"
        );
        assert_eq!(
            InstrumentError::MissingExecutionPeriodStart.to_string(),
            "execution_period_start must be provided"
        );
        assert_eq!(
            InstrumentError::MissingField("payment_date").to_string(),
            "payment_date must be provided"
        );
        assert_eq!(
            InstrumentError::PaymentDateMismatch.to_string(),
            "Payments must have the same date"
        );
        assert_eq!(InstrumentError::NonFiniteAmount.to_string(), "Amounts must be finite");
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = InstrumentError::SameSign.into();
        assert_eq!(
            err,
            PricingError::InvalidInput("Amounts must have different signs".to_string())
        );

        let err: PricingError =
            InstrumentError::Currency(CurrencyError::InvalidFxRate(-1.0)).into();
        match err {
            PricingError::Currency(CurrencyError::InvalidFxRate(rate)) => assert_eq!(rate, -1.0),
            other => panic!("Expected Currency error, got {:?}", other),
        }
    }
}
