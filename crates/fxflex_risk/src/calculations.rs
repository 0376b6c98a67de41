//! Measure calculations for window forward trades.
//!
//! Every measure is available in two forms: against a single rates provider,
//! returning the value or a [`PricingError`], and against
//! [`ScenarioMarketData`], returning one result per scenario. A failure in
//! one scenario does not affect the others.

use fxflex_core::market_data::{CurrencyParameterSensitivities, RatesProvider};
use fxflex_core::types::{FxRate, MultiCurrencyAmount, PricingError};
use fxflex_models::instruments::fx::ResolvedFxWindowForwardTrade;
use fxflex_pricing::fx::PriceToWorstFxWindowForwardTradePricer;
use tracing::warn;

use crate::error::CalculationFailure;
use crate::parallel::ParallelConfig;
use crate::scenario::{ScenarioArray, ScenarioMarketData};

/// One basis point, the scale of PV01 measures.
pub const ONE_BASIS_POINT: f64 = 1.0e-4;

/// Per-scenario results of one measure.
pub type ScenarioResults<T> = ScenarioArray<Result<T, CalculationFailure>>;

/// Calculates window forward measures, per provider or per scenario.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
/// use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use fxflex_models::instruments::fx::{
///     ResolvedFxWindowForward, ResolvedFxWindowForwardTrade, TradeInfo,
/// };
/// use fxflex_risk::{FxWindowForwardCalculations, ScenarioMarketData};
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let product = ResolvedFxWindowForward::from_fx_rate(
///     CurrencyAmount::new(Currency::EUR, 1_000_000.0),
///     &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
///     date(2018, 7, 2),
///     vec![date(2018, 6, 1), date(2018, 6, 29)],
/// )
/// .unwrap();
/// let trade = ResolvedFxWindowForwardTrade::new(TradeInfo::empty(), product);
///
/// let scenario = |spot| {
///     ImmutableRatesProvider::builder(date(2018, 1, 2))
///         .discount_curve(Currency::EUR, CurveEnum::flat(0.0))
///         .discount_curve(Currency::USD, CurveEnum::flat(0.0))
///         .fx_rate(FxRate::new(Currency::EUR, Currency::USD, spot).unwrap())
///         .build()
/// };
/// let market_data = ScenarioMarketData::new(vec![scenario(1.19), scenario(1.21)]);
///
/// let calculations = FxWindowForwardCalculations::default();
/// let rates = calculations.forward_fx_rate_scenarios(&trade, &market_data);
/// assert!((rates[0].as_ref().unwrap().rate() - 1.19).abs() < 1e-12);
/// assert!((rates[1].as_ref().unwrap().rate() - 1.21).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FxWindowForwardCalculations {
    trade_pricer: PriceToWorstFxWindowForwardTradePricer,
    parallel: ParallelConfig,
}

impl FxWindowForwardCalculations {
    /// Creates calculations using the given pricer and scenario fan-out.
    pub fn new(trade_pricer: PriceToWorstFxWindowForwardTradePricer, parallel: ParallelConfig) -> Self {
        Self {
            trade_pricer,
            parallel,
        }
    }

    /// The same calculations with a different scenario fan-out.
    pub fn with_parallel_config(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scenario fan-out settings.
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Evaluates `f` once per scenario, keeping scenario order.
    pub fn scenario_results<P, T, F>(&self, market_data: &ScenarioMarketData<P>, f: F) -> ScenarioResults<T>
    where
        P: RatesProvider,
        T: Send,
        F: Fn(&P) -> Result<T, PricingError> + Sync + Send,
    {
        let results = self.parallel.map(market_data.scenarios(), |provider| {
            f(provider).map_err(|err| {
                warn!(error = %err, "scenario calculation failed");
                CalculationFailure::from(err)
            })
        });
        ScenarioArray::from(results)
    }

    // ---------------------------------------------------------------------
    // single provider

    /// Present value.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn present_value<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        self.trade_pricer.present_value(trade, provider)
    }

    /// Calibrated PV01 summed per currency.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn pv01_calibrated_sum<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        Ok(self
            .parameter_sensitivity(trade, provider)?
            .total()
            .multiplied_by(ONE_BASIS_POINT))
    }

    /// Calibrated PV01 per curve parameter.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn pv01_calibrated_bucketed<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<CurrencyParameterSensitivities, PricingError> {
        Ok(self
            .parameter_sensitivity(trade, provider)?
            .multiplied_by(ONE_BASIS_POINT))
    }

    fn parameter_sensitivity<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<CurrencyParameterSensitivities, PricingError> {
        let points = self.trade_pricer.present_value_sensitivity(trade, provider)?;
        Ok(provider.parameter_sensitivity(&points)?)
    }

    /// Par spread.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn par_spread<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<f64, PricingError> {
        self.trade_pricer.par_spread(trade, provider)
    }

    /// Currency exposure.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn currency_exposure<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError> {
        self.trade_pricer.currency_exposure(trade, provider)
    }

    /// Current cash.
    pub fn current_cash<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> MultiCurrencyAmount {
        self.trade_pricer.current_cash(trade, provider)
    }

    /// Forward rate at the payment date.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn forward_fx_rate<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<FxRate, PricingError> {
        self.trade_pricer.forward_fx_rate(trade, provider)
    }

    /// Forward points: payment-date forward minus spot, as base/counter.
    ///
    /// # Errors
    /// Any pricing failure.
    pub fn fx_swap_rate<P: RatesProvider + ?Sized>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<f64, PricingError> {
        let forward = self.forward_fx_rate(trade, provider)?;
        let pair = forward.pair();
        let spot = provider.fx_rate(pair.base(), pair.counter())?;
        Ok(forward.rate() - spot)
    }

    // ---------------------------------------------------------------------
    // scenarios

    /// Present value per scenario.
    pub fn present_value_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<MultiCurrencyAmount> {
        self.scenario_results(market_data, |p| self.present_value(trade, p))
    }

    /// Calibrated PV01 sum per scenario.
    pub fn pv01_calibrated_sum_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<MultiCurrencyAmount> {
        self.scenario_results(market_data, |p| self.pv01_calibrated_sum(trade, p))
    }

    /// Calibrated bucketed PV01 per scenario.
    pub fn pv01_calibrated_bucketed_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<CurrencyParameterSensitivities> {
        self.scenario_results(market_data, |p| self.pv01_calibrated_bucketed(trade, p))
    }

    /// Par spread per scenario.
    pub fn par_spread_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<f64> {
        self.scenario_results(market_data, |p| self.par_spread(trade, p))
    }

    /// Currency exposure per scenario.
    pub fn currency_exposure_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<MultiCurrencyAmount> {
        self.scenario_results(market_data, |p| self.currency_exposure(trade, p))
    }

    /// Current cash per scenario.
    pub fn current_cash_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<MultiCurrencyAmount> {
        self.scenario_results(market_data, |p| Ok(self.current_cash(trade, p)))
    }

    /// Forward rate per scenario.
    pub fn forward_fx_rate_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<FxRate> {
        self.scenario_results(market_data, |p| self.forward_fx_rate(trade, p))
    }

    /// Forward points per scenario.
    pub fn fx_swap_rate_scenarios<P: RatesProvider>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        market_data: &ScenarioMarketData<P>,
    ) -> ScenarioResults<f64> {
        self.scenario_results(market_data, |p| self.fx_swap_rate(trade, p))
    }
}
