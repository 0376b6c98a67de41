//! # fxflex_core: Foundation types for window FX forward pricing
//!
//! ## Foundation Role
//!
//! fxflex_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention`, `BusinessDayConvention` (`types::time`)
//! - Currency and money types: `Currency`, `CurrencyPair`, `CurrencyAmount`,
//!   `MultiCurrencyAmount`, `FxRate`, `Payment` (`types`)
//! - Holiday calendars, business day adjustment and reference data (`calendar`)
//! - Yield curves, the `RatesProvider` abstraction and sensitivities (`market_data`)
//! - Error types for every failure mode above
//!
//! ## Usage Examples
//!
//! ```rust
//! use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
//! use fxflex_core::types::{BusinessDayConvention, Currency, CurrencyPair, Date};
//!
//! // Conventional market ordering of a currency pair
//! let pair = CurrencyPair::new(Currency::USD, Currency::EUR).unwrap();
//! assert_eq!(pair.to_conventional().base(), Currency::EUR);
//!
//! // Business day adjustment against the New York calendar
//! let ref_data = ReferenceData::standard();
//! let adjustment =
//!     BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::USNY);
//! let memorial_day = Date::from_ymd(2018, 5, 28).unwrap();
//! let adjusted = adjustment.adjust(memorial_day, &ref_data).unwrap();
//! assert_eq!(adjusted, Date::from_ymd(2018, 5, 29).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for dates, currencies, money types and calendars

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod market_data;
pub mod types;
