//! # fxflex_pricing: Valuation of window FX forwards
//!
//! ## Valuation Role
//!
//! fxflex_pricing sits between the product definitions and the measure layer:
//! - [`fx::DiscountingPaymentPricer`]: present value and zero-rate
//!   sensitivity of a single dated cash flow
//! - [`fx::PriceToWorstFxWindowForwardProductPricer`]: price-to-worst
//!   valuation of a resolved window forward
//! - [`fx::PriceToWorstFxWindowForwardTradePricer`]: the same measures keyed
//!   by resolved trade
//!
//! Pricers are stateless and generic over any [`RatesProvider`], so the same
//! pricer instance can be shared by every scenario worker.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
//! use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
//! use fxflex_models::instruments::fx::ResolvedFxWindowForward;
//! use fxflex_pricing::fx::PriceToWorstFxWindowForwardProductPricer;
//!
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//! let fx = ResolvedFxWindowForward::from_fx_rate(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
//!     date(2018, 7, 2),
//!     vec![date(2018, 3, 30), date(2018, 6, 29)],
//! )
//! .unwrap();
//!
//! let provider = ImmutableRatesProvider::builder(date(2018, 1, 2))
//!     .discount_curve(Currency::EUR, CurveEnum::flat(0.0))
//!     .discount_curve(Currency::USD, CurveEnum::flat(0.0))
//!     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap())
//!     .build();
//!
//! // With flat zero curves every window date carries the spot rate
//! let pricer = PriceToWorstFxWindowForwardProductPricer::default();
//! let pv = pricer.present_value(&fx, &provider).unwrap();
//! assert!((pv.amount(Currency::USD) - 150_000.0).abs() < 1e-9);
//! assert!((pv.amount(Currency::EUR) + 125_000.0).abs() < 1e-9);
//! ```
//!
//! [`RatesProvider`]: fxflex_core::market_data::RatesProvider

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod fx;
