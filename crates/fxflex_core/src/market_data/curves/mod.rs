//! Discount curve abstractions.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factors, zero rates and parameter sensitivities
//! - [`FlatCurve`]: Constant rate yield curve implementation
//! - [`InterpolatedCurve`]: Pillar-based interpolated yield curve
//! - [`CurveInterpolation`]: Interpolation method selection
//! - [`CurveEnum`]: Static dispatch enum wrapping concrete curve implementations

mod curve_enum;
mod flat;
mod interpolated;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use traits::YieldCurve;
