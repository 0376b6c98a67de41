//! Interpolated yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates.
    Linear,

    /// Linear interpolation on log discount factors (piecewise constant forwards).
    LogLinear,
}

/// Position of a query time relative to the pillars.
enum Bracket<T> {
    Below,
    Above,
    Between { index: usize, weight: T },
}

/// Interpolated yield curve defined by pillar zero rates.
///
/// Each pillar rate is one curve parameter. Outside the pillar domain the
/// nearest pillar rate is held flat when extrapolation is allowed.
///
/// # Example
///
/// ```
/// use fxflex_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let curve = InterpolatedCurve::new(
///     &[0.25, 0.5, 1.0],
///     &[0.010, 0.012, 0.015],
///     CurveInterpolation::Linear,
///     true,
/// ).unwrap();
///
/// let r: f64 = curve.zero_rate(0.375).unwrap();
/// assert!((r - 0.011).abs() < 1e-12);
///
/// // The zero rate at 0.375 moves half with each neighbouring pillar
/// let weights = curve.zero_rate_parameter_sensitivity(0.375).unwrap();
/// assert_eq!(weights, vec![0.5, 0.5, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolatedCurve<T: Float> {
    tenors: Vec<T>,
    rates: Vec<T>,
    method: CurveInterpolation,
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct an interpolated curve from pillar points.
    ///
    /// # Arguments
    ///
    /// * `tenors` - Tenor points in years (strictly increasing, positive, at least 2)
    /// * `rates` - Corresponding zero rates
    /// * `method` - Interpolation method to use
    /// * `allow_extrapolation` - Whether to hold the end rates flat beyond the pillars
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - Fewer than 2 pillars or mismatched lengths
    /// * `MarketDataError::InvalidMaturity` - Non-positive or unsorted tenors
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }
        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }
        for (i, &tenor) in tenors.iter().enumerate() {
            if tenor <= T::zero() || (i > 0 && tenor <= tenors[i - 1]) {
                return Err(MarketDataError::InvalidMaturity {
                    t: tenor.to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            method,
            allow_extrapolation,
        })
    }

    /// Return the tenor domain (first pillar, last pillar).
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Pillar tenors.
    #[inline]
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    /// Pillar zero rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// Return the interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Return whether extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn bracket(&self, t: T) -> Result<Bracket<T>, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t < t_min || t > t_max {
            if !self.allow_extrapolation {
                return Err(MarketDataError::OutOfBounds {
                    x: t.to_f64().unwrap_or(0.0),
                    min: t_min.to_f64().unwrap_or(0.0),
                    max: t_max.to_f64().unwrap_or(0.0),
                });
            }
            return Ok(if t < t_min {
                Bracket::Below
            } else {
                Bracket::Above
            });
        }
        let n = self.tenors.len();
        let index = (self.tenors.partition_point(|&x| x <= t) - 1).min(n - 2);
        let (t0, t1) = (self.tenors[index], self.tenors[index + 1]);
        Ok(Bracket::Between {
            index,
            weight: (t - t0) / (t1 - t0),
        })
    }

    fn interpolated_rate(&self, t: T) -> Result<T, MarketDataError> {
        let last = self.rates.len() - 1;
        Ok(match self.bracket(t)? {
            Bracket::Below => self.rates[0],
            Bracket::Above => self.rates[last],
            Bracket::Between { index, weight } => {
                let (r0, r1) = (self.rates[index], self.rates[index + 1]);
                match self.method {
                    CurveInterpolation::Linear => r0 + (r1 - r0) * weight,
                    CurveInterpolation::LogLinear => {
                        let (t0, t1) = (self.tenors[index], self.tenors[index + 1]);
                        let log_df = -(T::one() - weight) * r0 * t0 - weight * r1 * t1;
                        -log_df / t
                    }
                }
            }
        })
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let rate = self.interpolated_rate(t)?;
        Ok((-rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        self.interpolated_rate(t)
    }

    fn parameter_count(&self) -> usize {
        self.rates.len()
    }

    fn zero_rate_parameter_sensitivity(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let mut weights = vec![T::zero(); self.rates.len()];
        if t == T::zero() {
            return Ok(weights);
        }
        let last = weights.len() - 1;
        match self.bracket(t)? {
            Bracket::Below => weights[0] = T::one(),
            Bracket::Above => weights[last] = T::one(),
            Bracket::Between { index, weight } => match self.method {
                CurveInterpolation::Linear => {
                    weights[index] = T::one() - weight;
                    weights[index + 1] = weight;
                }
                CurveInterpolation::LogLinear => {
                    weights[index] = (T::one() - weight) * self.tenors[index] / t;
                    weights[index + 1] = weight * self.tenors[index + 1] / t;
                }
            },
        }
        Ok(weights)
    }
}
