//! Market data for FX cash flow valuation.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and implementations (FlatCurve, InterpolatedCurve)
//! - [`RatesProvider`]: discount factors, spot and forward FX rates, sensitivities
//! - [`ImmutableRatesProvider`]: curve-per-currency implementation of the provider
//! - [`PointSensitivities`] / [`CurrencyParameterSensitivities`]: first-order risk
//! - [`MarketDataError`]: market data error type
//!
//! # Example
//!
//! ```
//! use fxflex_core::market_data::{ImmutableRatesProvider, RatesProvider};
//! use fxflex_core::market_data::curves::CurveEnum;
//! use fxflex_core::types::{Currency, Date};
//!
//! let valuation = Date::from_ymd(2018, 1, 2).unwrap();
//! let provider = ImmutableRatesProvider::builder(valuation)
//!     .discount_curve(Currency::USD, CurveEnum::flat(0.02))
//!     .build();
//!
//! let df = provider
//!     .discount_factor(Currency::USD, Date::from_ymd(2019, 1, 2).unwrap())
//!     .unwrap();
//! assert!((df - (-0.02_f64).exp()).abs() < 1e-15);
//! ```

pub mod curves;
pub mod error;
pub mod rates_provider;
pub mod sensitivity;

// Re-export commonly used types
pub use curves::{CurveEnum, CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
pub use rates_provider::{ImmutableRatesProvider, ImmutableRatesProviderBuilder, RatesProvider};
pub use sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, PointSensitivities,
    PointSensitivity,
};
