//! Named measures that a calculation function can produce.

use std::fmt;
use std::str::FromStr;

use crate::error::{CalculationFailure, FailureReason};

/// A named quantity computed per scenario.
///
/// # Examples
/// ```
/// use fxflex_risk::Measure;
///
/// let measure: Measure = "ParSpread".parse().unwrap();
/// assert_eq!(measure, Measure::ParSpread);
/// assert_eq!(Measure::Pv01CalibratedSum.name(), "PV01CalibratedSum");
/// assert!("Theta".parse::<Measure>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measure {
    /// Present value
    PresentValue,
    /// Sum of the calibrated curve sensitivities, scaled to one basis point
    Pv01CalibratedSum,
    /// Calibrated curve sensitivities per parameter, scaled to one basis point
    Pv01CalibratedBucketed,
    /// Sum of the market quote sensitivities, scaled to one basis point
    Pv01MarketQuoteSum,
    /// Market quote sensitivities per parameter, scaled to one basis point
    Pv01MarketQuoteBucketed,
    /// Par spread
    ParSpread,
    /// Currency exposure
    CurrencyExposure,
    /// Cash settling on the valuation date
    CurrentCash,
    /// Forward FX rate at the payment date
    ForwardFxRate,
    /// Forward points: forward rate minus spot
    FxSwapRate,
    /// The resolved trade itself
    ResolvedTarget,
}

impl Measure {
    /// Every measure, in declaration order.
    pub const ALL: [Measure; 11] = [
        Measure::PresentValue,
        Measure::Pv01CalibratedSum,
        Measure::Pv01CalibratedBucketed,
        Measure::Pv01MarketQuoteSum,
        Measure::Pv01MarketQuoteBucketed,
        Measure::ParSpread,
        Measure::CurrencyExposure,
        Measure::CurrentCash,
        Measure::ForwardFxRate,
        Measure::FxSwapRate,
        Measure::ResolvedTarget,
    ];

    /// Canonical measure name.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::PresentValue => "PresentValue",
            Measure::Pv01CalibratedSum => "PV01CalibratedSum",
            Measure::Pv01CalibratedBucketed => "PV01CalibratedBucketed",
            Measure::Pv01MarketQuoteSum => "PV01MarketQuoteSum",
            Measure::Pv01MarketQuoteBucketed => "PV01MarketQuoteBucketed",
            Measure::ParSpread => "ParSpread",
            Measure::CurrencyExposure => "CurrencyExposure",
            Measure::CurrentCash => "CurrentCash",
            Measure::ForwardFxRate => "ForwardFxRate",
            Measure::FxSwapRate => "FxSwapRate",
            Measure::ResolvedTarget => "ResolvedTarget",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = CalculationFailure;

    /// Parses a measure name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CalculationFailure::new(FailureReason::InvalidInput, format!("Unknown measure: {}", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for measure in Measure::ALL {
            assert_eq!(measure.name().parse::<Measure>().unwrap(), measure);
            assert_eq!(format!("{}", measure), measure.name());
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("pv01calibratedbucketed".parse::<Measure>().unwrap(), Measure::Pv01CalibratedBucketed);
        assert_eq!(" presentvalue ".parse::<Measure>().unwrap(), Measure::PresentValue);
    }

    #[test]
    fn test_unknown_measure() {
        let err = "Gamma".parse::<Measure>().unwrap_err();
        assert_eq!(err.reason(), FailureReason::InvalidInput);
        assert_eq!(err.message(), "Unknown measure: Gamma");
    }
}
