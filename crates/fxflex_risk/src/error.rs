//! Calculation failures reported per measure and per scenario.

use std::fmt;

use fxflex_core::types::PricingError;
use fxflex_models::instruments::InstrumentError;
use thiserror::Error;

/// Category of a calculation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The measure is not available for the target
    Unsupported,
    /// Required market data was missing
    MissingData,
    /// The target or its inputs were invalid
    InvalidInput,
    /// Any other valuation failure
    CalculationFailed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureReason::Unsupported => "Unsupported",
            FailureReason::MissingData => "MissingData",
            FailureReason::InvalidInput => "InvalidInput",
            FailureReason::CalculationFailed => "CalculationFailed",
        };
        f.write_str(name)
    }
}

/// A failed calculation: a reason plus a human-readable message.
///
/// # Examples
/// ```
/// use fxflex_risk::{CalculationFailure, FailureReason};
///
/// let failure = CalculationFailure::new(FailureReason::Unsupported, "no calibration");
/// assert_eq!(failure.reason(), FailureReason::Unsupported);
/// assert_eq!(failure.to_string(), "Unsupported: no calibration");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{reason}: {message}")]
pub struct CalculationFailure {
    reason: FailureReason,
    message: String,
}

impl CalculationFailure {
    /// Creates a failure.
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    /// Failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<PricingError> for CalculationFailure {
    fn from(err: PricingError) -> Self {
        let reason = match &err {
            PricingError::MarketData(_) => FailureReason::MissingData,
            PricingError::InvalidInput(_) => FailureReason::InvalidInput,
            PricingError::Currency(_) => FailureReason::CalculationFailed,
        };
        Self::new(reason, err.to_string())
    }
}

impl From<InstrumentError> for CalculationFailure {
    fn from(err: InstrumentError) -> Self {
        Self::new(FailureReason::InvalidInput, err.to_string())
    }
}
