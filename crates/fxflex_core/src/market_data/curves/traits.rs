//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// Curves are parameterised by pillar zero rates; the parameter
/// sensitivity methods expose how the zero rate at a given time moves with
/// each pillar, which is what bucketed PV01 is built from.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use fxflex_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let rate = curve.zero_rate(1.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
///
/// assert_eq!(curve.parameter_count(), 1);
/// assert_eq!(curve.zero_rate_parameter_sensitivity(3.0).unwrap(), vec![1.0]);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t` (years, must be >= 0).
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if t < 0.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if t <= 0.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Number of curve parameters (pillar zero rates).
    fn parameter_count(&self) -> usize;

    /// Sensitivity of the zero rate at `t` to each curve parameter.
    ///
    /// The returned vector has [`YieldCurve::parameter_count`] entries.
    ///
    /// # Errors
    /// `MarketDataError::InvalidMaturity` if t < 0, or
    /// `MarketDataError::OutOfBounds` outside a non-extrapolating domain.
    fn zero_rate_parameter_sensitivity(&self, t: T) -> Result<Vec<T>, MarketDataError>;
}
