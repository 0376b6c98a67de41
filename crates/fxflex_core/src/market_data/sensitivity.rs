//! Point and parameter sensitivities.
//!
//! Pricers express first-order risk as [`PointSensitivities`]: a flat list of
//! derivatives with respect to individual market observables (a zero rate at
//! one time, a forward FX rate at one date). A rates provider then maps those
//! onto its curve parameters, producing [`CurrencyParameterSensitivities`].

use crate::types::{Currency, CurrencyAmount, CurrencyPair, Date, MultiCurrencyAmount};

/// Sensitivity to a single market observable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointSensitivity {
    /// Sensitivity to the continuously compounded zero rate of a discount curve.
    ZeroRate {
        /// Currency of the discount curve
        curve_currency: Currency,
        /// Year fraction from the valuation date to the cash flow
        year_fraction: f64,
        /// Currency in which the sensitivity is expressed
        currency: Currency,
        /// First-order sensitivity value
        sensitivity: f64,
    },

    /// Sensitivity to the forward FX rate of a pair at a date.
    FxForward {
        /// Currency pair of the forward rate
        pair: CurrencyPair,
        /// Currency whose forward price is observed
        reference_currency: Currency,
        /// Forward date
        date: Date,
        /// Currency in which the sensitivity is expressed
        currency: Currency,
        /// First-order sensitivity value
        sensitivity: f64,
    },
}

impl PointSensitivity {
    /// Currency in which the sensitivity is expressed.
    pub fn currency(&self) -> Currency {
        match self {
            PointSensitivity::ZeroRate { currency, .. }
            | PointSensitivity::FxForward { currency, .. } => *currency,
        }
    }

    /// Sensitivity value.
    pub fn sensitivity(&self) -> f64 {
        match self {
            PointSensitivity::ZeroRate { sensitivity, .. }
            | PointSensitivity::FxForward { sensitivity, .. } => *sensitivity,
        }
    }

    /// Returns a copy with the sensitivity value replaced.
    pub fn with_sensitivity(&self, value: f64) -> Self {
        let mut copy = *self;
        match &mut copy {
            PointSensitivity::ZeroRate { sensitivity, .. }
            | PointSensitivity::FxForward { sensitivity, .. } => *sensitivity = value,
        }
        copy
    }

    /// Returns a copy with the sensitivity value scaled.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.with_sensitivity(self.sensitivity() * factor)
    }
}

/// A collection of point sensitivities.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::{PointSensitivities, PointSensitivity};
/// use fxflex_core::types::Currency;
///
/// let usd = PointSensitivity::ZeroRate {
///     curve_currency: Currency::USD,
///     year_fraction: 0.5,
///     currency: Currency::USD,
///     sensitivity: -74_000.0,
/// };
/// let combined = PointSensitivities::of(vec![usd]).combined_with(&PointSensitivities::empty());
/// assert_eq!(combined.len(), 1);
/// assert_eq!(combined.multiplied_by(2.0).iter().next().unwrap().sensitivity(), -148_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSensitivities {
    sensitivities: Vec<PointSensitivity>,
}

impl PointSensitivities {
    /// An empty set of sensitivities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a list of sensitivities.
    pub fn of(sensitivities: Vec<PointSensitivity>) -> Self {
        Self { sensitivities }
    }

    /// Concatenates two sets.
    pub fn combined_with(&self, other: &PointSensitivities) -> Self {
        let mut sensitivities = self.sensitivities.clone();
        sensitivities.extend_from_slice(&other.sensitivities);
        Self { sensitivities }
    }

    /// Scales every entry.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.sensitivities
            .iter()
            .map(|s| s.multiplied_by(factor))
            .collect()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &PointSensitivity> {
        self.sensitivities.iter()
    }

    /// The entries as a slice.
    pub fn sensitivities(&self) -> &[PointSensitivity] {
        &self.sensitivities
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }
}

impl FromIterator<PointSensitivity> for PointSensitivities {
    fn from_iter<I: IntoIterator<Item = PointSensitivity>>(iter: I) -> Self {
        Self {
            sensitivities: iter.into_iter().collect(),
        }
    }
}

/// Sensitivity to every parameter of one curve, in one currency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyParameterSensitivity {
    curve_currency: Currency,
    currency: Currency,
    sensitivity: Vec<f64>,
}

impl CurrencyParameterSensitivity {
    /// Creates a parameter sensitivity vector for the discount curve of `curve_currency`.
    pub fn new(curve_currency: Currency, currency: Currency, sensitivity: Vec<f64>) -> Self {
        Self {
            curve_currency,
            currency,
            sensitivity,
        }
    }

    /// Currency of the curve the parameters belong to.
    pub fn curve_currency(&self) -> Currency {
        self.curve_currency
    }

    /// Currency of the sensitivity values.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Per-parameter values.
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Sum over all parameters.
    pub fn total(&self) -> CurrencyAmount {
        CurrencyAmount::new(self.currency, self.sensitivity.iter().sum())
    }

    /// Scales every value.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivity: self.sensitivity.iter().map(|v| v * factor).collect(),
            ..self.clone()
        }
    }

    fn key(&self) -> (Currency, Currency) {
        (self.curve_currency, self.currency)
    }

    fn add_assign(&mut self, other: &[f64]) {
        if other.len() > self.sensitivity.len() {
            self.sensitivity.resize(other.len(), 0.0);
        }
        for (value, delta) in self.sensitivity.iter_mut().zip(other) {
            *value += delta;
        }
    }
}

/// Parameter sensitivities for a set of curves.
///
/// Entries are keyed by (curve currency, sensitivity currency); combining an
/// entry with an existing key adds the vectors element by element.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::{CurrencyParameterSensitivities, CurrencyParameterSensitivity};
/// use fxflex_core::types::Currency;
///
/// let sens = CurrencyParameterSensitivities::empty()
///     .combined_with(CurrencyParameterSensitivity::new(Currency::USD, Currency::USD, vec![1.0, 2.0]))
///     .combined_with(CurrencyParameterSensitivity::new(Currency::USD, Currency::USD, vec![0.5, 0.5]));
///
/// assert_eq!(sens.len(), 1);
/// assert_eq!(sens.total().amount(Currency::USD), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyParameterSensitivities {
    sensitivities: Vec<CurrencyParameterSensitivity>,
}

impl CurrencyParameterSensitivities {
    /// No sensitivities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds an entry, merging it into an existing entry with the same key.
    pub fn combined_with(mut self, entry: CurrencyParameterSensitivity) -> Self {
        match self
            .sensitivities
            .iter_mut()
            .find(|existing| existing.key() == entry.key())
        {
            Some(existing) => existing.add_assign(&entry.sensitivity),
            None => {
                self.sensitivities.push(entry);
                self.sensitivities.sort_by_key(|s| s.key());
            }
        }
        self
    }

    /// Merges every entry of another set.
    pub fn combined_with_all(self, other: &CurrencyParameterSensitivities) -> Self {
        other
            .sensitivities
            .iter()
            .cloned()
            .fold(self, |acc, entry| acc.combined_with(entry))
    }

    /// Finds the entry for a curve and currency.
    pub fn get(
        &self,
        curve_currency: Currency,
        currency: Currency,
    ) -> Option<&CurrencyParameterSensitivity> {
        self.sensitivities
            .iter()
            .find(|s| s.key() == (curve_currency, currency))
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyParameterSensitivity> {
        self.sensitivities.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Sum of all parameter values, per currency.
    pub fn total(&self) -> MultiCurrencyAmount {
        self.sensitivities.iter().map(|s| s.total()).collect()
    }

    /// Scales every entry.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|s| s.multiplied_by(factor))
                .collect(),
        }
    }
}
