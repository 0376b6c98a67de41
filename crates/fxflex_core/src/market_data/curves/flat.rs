//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with a single continuously compounded rate.
///
/// The rate is the curve's only parameter.
///
/// # Example
///
/// ```
/// use fxflex_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.02_f64);
/// let df = curve.discount_factor(0.5).unwrap();
/// assert!((df - (-0.01_f64).exp()).abs() < 1e-15);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn zero_rate_parameter_sensitivity(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(vec![T::one()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = FlatCurve::new(0.05_f64);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_negative_maturity() {
        let curve = FlatCurve::new(0.05_f64);
        match curve.discount_factor(-0.1) {
            Err(MarketDataError::InvalidMaturity { t }) => assert_eq!(t, -0.1),
            other => panic!("Expected InvalidMaturity, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_discount_above_one() {
        let curve = FlatCurve::new(-0.004_f64);
        let df = curve.discount_factor(1.0).unwrap();
        assert!(df > 1.0);
        assert_relative_eq!(df, 0.004_f64.exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_parameter_sensitivity_is_unit() {
        let curve = FlatCurve::new(0.01_f64);
        assert_eq!(curve.parameter_count(), 1);
        assert_eq!(curve.zero_rate_parameter_sensitivity(0.0).unwrap(), vec![1.0]);
        assert!(curve.zero_rate_parameter_sensitivity(-1.0).is_err());
    }
}
