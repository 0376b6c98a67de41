//! Foreign exchange window forwards.
//!
//! This module provides:
//! - [`WindowDate`] and [`ExecutionWindow`]: the observation window
//! - [`FxWindowForward`] and its builder: the validated product
//! - [`ResolvedFxWindowForward`]: the product with dates adjusted
//! - [`FxWindowForwardTrade`] / [`ResolvedFxWindowForwardTrade`] with [`TradeInfo`]
//!
//! # Examples
//!
//! ```
//! use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
//! use fxflex_core::types::{BusinessDayConvention, Currency, CurrencyAmount, Date};
//! use fxflex_models::instruments::fx::{ExecutionWindow, FxWindowForward};
//!
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//! let following =
//!     BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::USNY);
//!
//! let product = FxWindowForward::of(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     CurrencyAmount::new(Currency::EUR, -125_000.0),
//!     date(2018, 6, 30),
//!     Some(following),
//!     ExecutionWindow::dates([
//!         date(2018, 3, 30),
//!         date(2018, 4, 30),
//!         date(2018, 5, 30),
//!         date(2018, 6, 30),
//!     ]),
//! )
//! .unwrap();
//!
//! // Window dates follow the payment date adjustment
//! let resolved = product.resolve(&ReferenceData::standard()).unwrap();
//! assert_eq!(resolved.window_dates().last(), Some(&date(2018, 7, 2)));
//! ```

mod resolved;
mod trade;
mod window;
mod window_forward;

pub use resolved::ResolvedFxWindowForward;
pub use trade::{FxWindowForwardTrade, ResolvedFxWindowForwardTrade, TradeInfo};
pub use window::{ExecutionWindow, WindowDate};
pub use window_forward::{
    default_payment_date_adjustment, normalize_currency_order, FxWindowForward,
    FxWindowForwardBuilder,
};
