//! # fxflex_models: Window FX forward products
//!
//! Product definitions for "flexible" FX forwards: an exchange of two fixed
//! currency amounts on a payment date, whose effective rate is taken from the
//! worst forward rate observed over a window of dates.
//!
//! This crate provides:
//! - [`instruments::fx::FxWindowForward`]: the validated, unresolved contract
//! - [`instruments::fx::ExecutionWindow`]: an execution period or explicit window dates
//! - [`instruments::fx::ResolvedFxWindowForward`]: the contract with all dates adjusted
//! - Trade wrappers carrying [`instruments::fx::TradeInfo`]
//!
//! ## Design Principles
//!
//! - **Validated at construction**: a product never exists in an invalid state
//! - **Conventional currency order**: base/counter always follow market convention
//! - **Builder pattern** shared by factories and deserialisation
//!
//! ## Example
//!
//! ```
//! use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
//! use fxflex_core::types::{BusinessDayConvention, Currency, CurrencyAmount, Date, FxRate};
//! use fxflex_models::instruments::fx::{ExecutionWindow, FxWindowForward};
//!
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//!
//! let product = FxWindowForward::from_fx_rate(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
//!     date(2018, 6, 30),
//!     Some(BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::USNY)),
//!     ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30)),
//! )
//! .unwrap();
//!
//! // EUR/USD is conventional, so EUR is the base currency
//! assert_eq!(product.base_currency_amount().currency(), Currency::EUR);
//! assert!((product.base_currency_amount().amount() + 125_000.0).abs() < 1e-6);
//!
//! let resolved = product.resolve(&ReferenceData::standard()).unwrap();
//! assert_eq!(resolved.payment_date(), date(2018, 7, 2));
//! assert_eq!(resolved.window_dates().len(), 65);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
