//! Static dispatch over the concrete curve types.

use super::{FlatCurve, InterpolatedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping the concrete discount curves.
///
/// Rates providers store curves as `CurveEnum` so they stay `Clone` and
/// serialisable without trait objects.
///
/// # Example
///
/// ```
/// use fxflex_core::market_data::curves::{CurveEnum, YieldCurve};
///
/// let curve = CurveEnum::flat(0.03_f64);
/// assert_eq!(curve.parameter_count(), 1);
/// assert!((curve.zero_rate(2.0).unwrap() - 0.03).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveEnum<T: Float> {
    /// Constant rate curve
    Flat(FlatCurve<T>),
    /// Pillar-based interpolated curve
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Construct a flat curve variant.
    #[inline]
    pub fn flat(rate: T) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.discount_factor(t),
            CurveEnum::Interpolated(curve) => curve.discount_factor(t),
        }
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.zero_rate(t),
            CurveEnum::Interpolated(curve) => curve.zero_rate(t),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            CurveEnum::Flat(curve) => curve.parameter_count(),
            CurveEnum::Interpolated(curve) => curve.parameter_count(),
        }
    }

    fn zero_rate_parameter_sensitivity(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.zero_rate_parameter_sensitivity(t),
            CurveEnum::Interpolated(curve) => curve.zero_rate_parameter_sensitivity(t),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        CurveEnum::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}
