//! # fxflex_risk: Scenario measures for window FX forwards
//!
//! ## Measure Layer
//!
//! fxflex_risk turns the pricers of `fxflex_pricing` into named measures
//! evaluated over a set of market data scenarios:
//! - [`Measure`]: the measures a calculation can request
//! - [`ScenarioMarketData`] / [`ScenarioArray`]: one rates provider, and one
//!   result, per scenario
//! - [`FxWindowForwardCalculations`]: per-measure evaluation, one scenario or many
//! - [`FxWindowForwardTradeCalculationFunction`]: multi-measure dispatch for
//!   a trade, resolving it once
//! - [`CalculationConfig`] / [`ParallelConfig`]: TOML and environment driven
//!   settings for the rayon scenario fan-out and the log level
//!
//! Failures never abort a batch. A measure that cannot be calculated at all
//! yields a [`CalculationFailure`] in place of its scenario results, and a
//! failing scenario yields a failure in its own slot.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
//! use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
//! use fxflex_models::instruments::fx::{
//!     ResolvedFxWindowForward, ResolvedFxWindowForwardTrade, TradeInfo,
//! };
//! use fxflex_risk::{FailureReason, FxWindowForwardCalculations, ScenarioMarketData};
//!
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//! let product = ResolvedFxWindowForward::from_fx_rate(
//!     CurrencyAmount::new(Currency::USD, 150_000.0),
//!     &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
//!     date(2018, 7, 2),
//!     vec![date(2018, 3, 30), date(2018, 6, 29)],
//! )
//! .unwrap();
//! let trade = ResolvedFxWindowForwardTrade::new(TradeInfo::empty(), product);
//!
//! let valuation = date(2018, 1, 2);
//! let good = ImmutableRatesProvider::builder(valuation)
//!     .discount_curve(Currency::EUR, CurveEnum::flat(0.0))
//!     .discount_curve(Currency::USD, CurveEnum::flat(0.0))
//!     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap())
//!     .build();
//! let no_usd_curve = ImmutableRatesProvider::builder(valuation)
//!     .discount_curve(Currency::EUR, CurveEnum::flat(0.0))
//!     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap())
//!     .build();
//!
//! let calculations = FxWindowForwardCalculations::default();
//! let pvs = calculations
//!     .present_value_scenarios(&trade, &ScenarioMarketData::new(vec![good, no_usd_curve]));
//!
//! assert!((pvs[0].as_ref().unwrap().amount(Currency::USD) - 150_000.0).abs() < 1e-9);
//! assert_eq!(pvs[1].as_ref().unwrap_err().reason(), FailureReason::MissingData);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calculations;
pub mod config;
pub mod error;
pub mod function;
pub mod measure;
pub mod parallel;
pub mod scenario;

pub use calculations::{FxWindowForwardCalculations, ScenarioResults, ONE_BASIS_POINT};
pub use config::{CalculationConfig, ConfigError, LogLevel};
pub use error::{CalculationFailure, FailureReason};
pub use function::{
    CalculationFunction, FunctionRequirements, FxWindowForwardTradeCalculationFunction,
    MeasureResult, MeasureValue,
};
pub use measure::Measure;
pub use parallel::ParallelConfig;
pub use scenario::{ScenarioArray, ScenarioMarketData};
