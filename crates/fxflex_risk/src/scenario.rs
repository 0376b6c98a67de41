//! Scenario containers.
//!
//! Index `i` of every [`ScenarioArray`] produced from a
//! [`ScenarioMarketData`] corresponds to scenario `i` of that market data.

use std::ops::Index;

use fxflex_core::market_data::RatesProvider;

/// One value per scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioArray<T> {
    values: Vec<T>,
}

impl<T> ScenarioArray<T> {
    /// Builds an array by evaluating `f` for each scenario index.
    pub fn of(scenario_count: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..scenario_count).map(f).collect(),
        }
    }

    /// Number of scenarios.
    pub fn scenario_count(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no scenarios.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for scenario `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Iterates in scenario order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// All values in scenario order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the array, returning the values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> From<Vec<T>> for ScenarioArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> Index<usize> for ScenarioArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a ScenarioArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Market data for a set of scenarios, one rates provider each.
///
/// # Examples
/// ```
/// use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
/// use fxflex_core::types::{Currency, Date};
/// use fxflex_risk::ScenarioMarketData;
///
/// let valuation = Date::from_ymd(2018, 1, 2).unwrap();
/// let scenarios: Vec<_> = [0.01, 0.02, 0.03]
///     .iter()
///     .map(|r| {
///         ImmutableRatesProvider::builder(valuation)
///             .discount_curve(Currency::USD, CurveEnum::flat(*r))
///             .build()
///     })
///     .collect();
///
/// let market_data = ScenarioMarketData::new(scenarios);
/// assert_eq!(market_data.scenario_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioMarketData<P> {
    scenarios: Vec<P>,
}

impl<P: RatesProvider> ScenarioMarketData<P> {
    /// Market data over the given scenarios.
    pub fn new(scenarios: Vec<P>) -> Self {
        Self { scenarios }
    }

    /// Market data with a single scenario.
    pub fn single(provider: P) -> Self {
        Self {
            scenarios: vec![provider],
        }
    }

    /// Number of scenarios.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// The provider for scenario `index`.
    pub fn scenario(&self, index: usize) -> Option<&P> {
        self.scenarios.get(index)
    }

    /// All providers in scenario order.
    pub fn scenarios(&self) -> &[P] {
        &self.scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_array_of() {
        let array = ScenarioArray::of(4, |i| i * 10);
        assert_eq!(array.scenario_count(), 4);
        assert_eq!(array[2], 20);
        assert_eq!(array.get(4), None);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_scenario_array_from_vec() {
        let array: ScenarioArray<&str> = vec!["a", "b"].into();
        assert_eq!(array.values(), &["a", "b"]);
        assert!(!array.is_empty());
        assert_eq!(array.into_values(), vec!["a", "b"]);
    }
}
