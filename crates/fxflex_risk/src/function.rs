//! Calculation functions: multi-measure dispatch for a trade type.

use std::collections::{BTreeMap, BTreeSet};

use fxflex_core::calendar::ReferenceData;
use fxflex_core::market_data::{CurrencyParameterSensitivities, RatesProvider};
use fxflex_core::types::{Currency, CurrencyPair, FxRate, MultiCurrencyAmount};
use fxflex_models::instruments::fx::{FxWindowForwardTrade, ResolvedFxWindowForwardTrade};
use tracing::{info, warn};

use crate::calculations::{FxWindowForwardCalculations, ScenarioResults};
use crate::error::{CalculationFailure, FailureReason};
use crate::measure::Measure;
use crate::scenario::ScenarioMarketData;

/// A single calculated value of any measure.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureValue {
    /// Amounts in one or more currencies
    MultiCurrency(MultiCurrencyAmount),
    /// Curve parameter sensitivities
    Sensitivities(CurrencyParameterSensitivities),
    /// A plain number
    Double(f64),
    /// An FX rate
    FxRate(FxRate),
    /// The resolved trade
    ResolvedTarget(Box<ResolvedFxWindowForwardTrade>),
}

impl MeasureValue {
    /// The amounts, if this is a multi-currency value.
    pub fn as_multi_currency(&self) -> Option<&MultiCurrencyAmount> {
        match self {
            MeasureValue::MultiCurrency(amount) => Some(amount),
            _ => None,
        }
    }

    /// The sensitivities, if this is a sensitivity value.
    pub fn as_sensitivities(&self) -> Option<&CurrencyParameterSensitivities> {
        match self {
            MeasureValue::Sensitivities(sens) => Some(sens),
            _ => None,
        }
    }

    /// The number, if this is a plain number.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            MeasureValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// The rate, if this is an FX rate.
    pub fn as_fx_rate(&self) -> Option<&FxRate> {
        match self {
            MeasureValue::FxRate(rate) => Some(rate),
            _ => None,
        }
    }

    /// The resolved trade, if this is the resolved target.
    pub fn as_resolved_target(&self) -> Option<&ResolvedFxWindowForwardTrade> {
        match self {
            MeasureValue::ResolvedTarget(trade) => Some(trade),
            _ => None,
        }
    }
}

/// Results of one measure across scenarios, or the reason the measure as a
/// whole could not be calculated.
pub type MeasureResult = Result<ScenarioResults<MeasureValue>, CalculationFailure>;

/// Market data a calculation needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRequirements {
    /// Currencies needing a discount curve
    pub currencies: BTreeSet<Currency>,
    /// Pairs needing a spot rate
    pub currency_pairs: BTreeSet<CurrencyPair>,
}

/// Calculates a set of measures for one kind of trade.
pub trait CalculationFunction<T> {
    /// Measures this function can calculate.
    fn supported_measures(&self) -> BTreeSet<Measure>;

    /// Identifier of the target, if it has one.
    fn identifier(&self, target: &T) -> Option<String>;

    /// The currency in which results are naturally reported.
    fn natural_currency(&self, target: &T) -> Currency;

    /// Market data needed to calculate any measure for the target.
    fn requirements(&self, target: &T) -> FunctionRequirements;

    /// Calculates every requested measure for every scenario.
    ///
    /// # Errors
    /// A failure that prevents any measure from being calculated, such as a
    /// target that cannot be resolved.
    fn calculate<P: RatesProvider>(
        &self,
        target: &T,
        measures: &[Measure],
        market_data: &ScenarioMarketData<P>,
        ref_data: &ReferenceData,
    ) -> Result<BTreeMap<Measure, MeasureResult>, CalculationFailure>;
}

/// Calculation function for [`FxWindowForwardTrade`].
///
/// The trade is resolved once; each measure is then evaluated over all
/// scenarios. Market quote PV01 measures are not supported.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::ReferenceData;
/// use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
/// use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use fxflex_models::instruments::fx::{
///     ExecutionWindow, FxWindowForward, FxWindowForwardTrade, TradeInfo,
/// };
/// use fxflex_risk::{
///     CalculationFunction, FailureReason, FxWindowForwardTradeCalculationFunction, Measure,
///     ScenarioMarketData,
/// };
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let product = FxWindowForward::of(
///     CurrencyAmount::new(Currency::USD, 150_000.0),
///     CurrencyAmount::new(Currency::EUR, -125_000.0),
///     date(2018, 6, 29),
///     None,
///     ExecutionWindow::dates([date(2018, 5, 31), date(2018, 6, 29)]),
/// )
/// .unwrap();
/// let trade = FxWindowForwardTrade::new(TradeInfo::empty(), product);
///
/// let provider = ImmutableRatesProvider::builder(date(2018, 1, 2))
///     .discount_curve(Currency::EUR, CurveEnum::flat(0.0))
///     .discount_curve(Currency::USD, CurveEnum::flat(0.0))
///     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap())
///     .build();
///
/// let function = FxWindowForwardTradeCalculationFunction::default();
/// assert_eq!(function.natural_currency(&trade), Currency::EUR);
///
/// let results = function
///     .calculate(
///         &trade,
///         &[Measure::ParSpread, Measure::Pv01MarketQuoteSum],
///         &ScenarioMarketData::single(provider),
///         &ReferenceData::standard(),
///     )
///     .unwrap();
///
/// let spread = results[&Measure::ParSpread].as_ref().unwrap()[0].as_ref().unwrap();
/// assert!(spread.as_double().unwrap().abs() < 1e-12);
///
/// let unsupported = results[&Measure::Pv01MarketQuoteSum].as_ref().unwrap_err();
/// assert_eq!(unsupported.reason(), FailureReason::Unsupported);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FxWindowForwardTradeCalculationFunction {
    calculations: FxWindowForwardCalculations,
}

impl FxWindowForwardTradeCalculationFunction {
    /// Creates a function over the given calculations.
    pub fn new(calculations: FxWindowForwardCalculations) -> Self {
        Self { calculations }
    }

    /// The underlying calculations.
    pub fn calculations(&self) -> &FxWindowForwardCalculations {
        &self.calculations
    }

    fn calculate_measure<P: RatesProvider>(
        &self,
        measure: Measure,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> MeasureResult {
        let calc = &self.calculations;
        let results = match measure {
            Measure::PresentValue => calc.scenario_results(market_data, |p| {
                calc.present_value(trade, p).map(MeasureValue::MultiCurrency)
            }),
            Measure::Pv01CalibratedSum => calc.scenario_results(market_data, |p| {
                calc.pv01_calibrated_sum(trade, p)
                    .map(MeasureValue::MultiCurrency)
            }),
            Measure::Pv01CalibratedBucketed => calc.scenario_results(market_data, |p| {
                calc.pv01_calibrated_bucketed(trade, p)
                    .map(MeasureValue::Sensitivities)
            }),
            Measure::ParSpread => calc.scenario_results(market_data, |p| {
                calc.par_spread(trade, p).map(MeasureValue::Double)
            }),
            Measure::CurrencyExposure => calc.scenario_results(market_data, |p| {
                calc.currency_exposure(trade, p)
                    .map(MeasureValue::MultiCurrency)
            }),
            Measure::CurrentCash => calc.scenario_results(market_data, |p| {
                Ok(MeasureValue::MultiCurrency(calc.current_cash(trade, p)))
            }),
            Measure::ForwardFxRate => calc.scenario_results(market_data, |p| {
                calc.forward_fx_rate(trade, p).map(MeasureValue::FxRate)
            }),
            Measure::FxSwapRate => calc.scenario_results(market_data, |p| {
                calc.fx_swap_rate(trade, p).map(MeasureValue::Double)
            }),
            Measure::ResolvedTarget => calc.scenario_results(market_data, |_| {
                Ok(MeasureValue::ResolvedTarget(Box::new(trade.clone())))
            }),
            Measure::Pv01MarketQuoteSum | Measure::Pv01MarketQuoteBucketed => {
                warn!(%measure, "unsupported measure");
                return Err(CalculationFailure::new(
                    FailureReason::Unsupported,
                    format!("Unsupported measure for FxWindowForwardTrade: {}", measure),
                ));
            }
        };
        Ok(results)
    }
}

impl CalculationFunction<FxWindowForwardTrade> for FxWindowForwardTradeCalculationFunction {
    fn supported_measures(&self) -> BTreeSet<Measure> {
        Measure::ALL
            .iter()
            .copied()
            .filter(|m| !matches!(m, Measure::Pv01MarketQuoteSum | Measure::Pv01MarketQuoteBucketed))
            .collect()
    }

    fn identifier(&self, target: &FxWindowForwardTrade) -> Option<String> {
        target.info().id().map(str::to_string)
    }

    fn natural_currency(&self, target: &FxWindowForwardTrade) -> Currency {
        target.product().currency_pair().to_conventional().base()
    }

    fn requirements(&self, target: &FxWindowForwardTrade) -> FunctionRequirements {
        let product = target.product();
        FunctionRequirements {
            currencies: product.currencies(),
            currency_pairs: BTreeSet::from([product.currency_pair()]),
        }
    }

    fn calculate<P: RatesProvider>(
        &self,
        target: &FxWindowForwardTrade,
        measures: &[Measure],
        market_data: &ScenarioMarketData<P>,
        ref_data: &ReferenceData,
    ) -> Result<BTreeMap<Measure, MeasureResult>, CalculationFailure> {
        let resolved = target.resolve(ref_data)?;
        let scenario_count = market_data.scenario_count();
        info!(
            trade = target.info().id().unwrap_or("<none>"),
            measures = measures.len(),
            scenarios = scenario_count,
            parallel = self.calculations.parallel_config().should_parallelize(scenario_count),
            "calculating window forward measures"
        );
        Ok(measures
            .iter()
            .map(|&measure| (measure, self.calculate_measure(measure, &resolved, market_data)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId};
    use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
    use fxflex_core::types::{BusinessDayConvention, CurrencyAmount, Date};
    use fxflex_models::instruments::fx::{ExecutionWindow, FxWindowForward, TradeInfo};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn trade(calendar: HolidayCalendarId) -> FxWindowForwardTrade {
        let product = FxWindowForward::of(
            CurrencyAmount::new(Currency::JPY, -160_000_000.0),
            CurrencyAmount::new(Currency::USD, 1_500_000.0),
            date(2018, 6, 29),
            Some(BusinessDayAdjustment::new(BusinessDayConvention::Following, calendar)),
            ExecutionWindow::period(date(2018, 3, 1), date(2018, 6, 29)),
        )
        .unwrap();
        FxWindowForwardTrade::new(TradeInfo::empty().with_id("FLEX-7"), product)
    }

    fn market_data() -> ScenarioMarketData<ImmutableRatesProvider> {
        let provider = ImmutableRatesProvider::builder(date(2018, 1, 2))
            .discount_curve(Currency::USD, CurveEnum::flat(0.02))
            .discount_curve(Currency::JPY, CurveEnum::flat(-0.001))
            .fx_rate(FxRate::new(Currency::USD, Currency::JPY, 107.0).unwrap())
            .build();
        ScenarioMarketData::new(vec![provider.clone(), provider])
    }

    #[test]
    fn test_metadata() {
        let function = FxWindowForwardTradeCalculationFunction::default();
        let trade = trade(HolidayCalendarId::USNY);

        assert_eq!(function.identifier(&trade), Some("FLEX-7".to_string()));
        assert_eq!(function.natural_currency(&trade), Currency::USD);

        let requirements = function.requirements(&trade);
        assert_eq!(
            requirements.currencies,
            BTreeSet::from([Currency::JPY, Currency::USD])
        );
        assert_eq!(
            requirements.currency_pairs,
            BTreeSet::from([CurrencyPair::new(Currency::USD, Currency::JPY).unwrap()])
        );

        let supported = function.supported_measures();
        assert_eq!(supported.len(), 9);
        assert!(!supported.contains(&Measure::Pv01MarketQuoteBucketed));
    }

    #[test]
    fn test_calculate_all_measures() {
        let function = FxWindowForwardTradeCalculationFunction::default();
        let results = function
            .calculate(
                &trade(HolidayCalendarId::USNY),
                &Measure::ALL,
                &market_data(),
                &ReferenceData::standard(),
            )
            .unwrap();
        assert_eq!(results.len(), Measure::ALL.len());

        for measure in function.supported_measures() {
            let per_scenario = results[&measure].as_ref().unwrap();
            assert_eq!(per_scenario.scenario_count(), 2);
            assert!(per_scenario.iter().all(|r| r.is_ok()), "{} failed", measure);
        }

        let pv = results[&Measure::PresentValue].as_ref().unwrap()[0]
            .as_ref()
            .unwrap()
            .as_multi_currency()
            .unwrap()
            .clone();
        assert!(pv.contains(Currency::USD) && pv.contains(Currency::JPY));

        let target = results[&Measure::ResolvedTarget].as_ref().unwrap()[1]
            .as_ref()
            .unwrap()
            .as_resolved_target()
            .unwrap()
            .product()
            .payment_date();
        assert_eq!(target, date(2018, 6, 29));

        let rate = results[&Measure::ForwardFxRate].as_ref().unwrap()[0]
            .as_ref()
            .unwrap()
            .as_fx_rate()
            .copied()
            .unwrap();
        assert_eq!(rate.pair().code(), "USD/JPY");
    }

    #[test]
    fn test_unsupported_measure_message() {
        let function = FxWindowForwardTradeCalculationFunction::default();
        let results = function
            .calculate(
                &trade(HolidayCalendarId::USNY),
                &[Measure::Pv01MarketQuoteBucketed],
                &market_data(),
                &ReferenceData::standard(),
            )
            .unwrap();
        let failure = results[&Measure::Pv01MarketQuoteBucketed].as_ref().unwrap_err();
        assert_eq!(failure.reason(), FailureReason::Unsupported);
        assert_eq!(
            failure.message(),
            "Unsupported measure for FxWindowForwardTrade: PV01MarketQuoteBucketed"
        );
    }

    #[test]
    fn test_unresolvable_trade_fails_whole_calculation() {
        let function = FxWindowForwardTradeCalculationFunction::default();
        let result = function.calculate(
            &trade(HolidayCalendarId::JPTO),
            &[Measure::PresentValue],
            &market_data(),
            &ReferenceData::standard(),
        );
        match result {
            Err(failure) => assert_eq!(failure.reason(), FailureReason::InvalidInput),
            Ok(_) => panic!("Expected resolution failure"),
        }
    }
}
