//! Core time, currency and money types.
//!
//! This module provides:
//! - `time`: Date, DayCountConvention, BusinessDayConvention
//! - `currency`: ISO 4217 currency codes with market priority
//! - `currency_pair`: Ordered currency pairs and their conventional orientation
//! - `money`: Signed single and multi-currency amounts
//! - `fx_rate`: FX rates between two currencies
//! - `payment`: Dated cash flows
//! - `error`: Structured error types for pricing, date and currency operations

pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod fx_rate;
pub mod money;
pub mod payment;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, DateError, PricingError};
pub use fx_rate::FxRate;
pub use money::{CurrencyAmount, MultiCurrencyAmount};
pub use payment::Payment;
pub use time::{BusinessDayConvention, Date, DayCountConvention};
