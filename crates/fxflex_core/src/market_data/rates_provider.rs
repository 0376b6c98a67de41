//! Rates provider: the market view consumed by pricers.
//!
//! [`RatesProvider`] is the seam between pricing code and market data. It
//! exposes discount factors, spot and forward FX rates, and the point
//! sensitivities of each, and it knows how to project point sensitivities
//! onto its own curve parameters.
//!
//! [`ImmutableRatesProvider`] is the reference implementation: one zero-rate
//! discount curve per currency plus a table of spot FX rates, with forward
//! rates implied by covered interest parity:
//!
//! ```text
//! F(base/counter, t) = S(base/counter) * DF_base(t) / DF_counter(t)
//! ```

use std::collections::HashMap;

use super::curves::{CurveEnum, YieldCurve};
use super::error::MarketDataError;
use super::sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, PointSensitivities,
    PointSensitivity,
};
use crate::types::{
    Currency, CurrencyAmount, CurrencyPair, Date, DayCountConvention, FxRate, MultiCurrencyAmount,
};

/// Market data view required to value FX cash flows.
///
/// Implementations must be immutable snapshots so that they can be shared
/// across scenario workers.
pub trait RatesProvider: Send + Sync {
    /// The valuation date of the market snapshot.
    fn valuation_date(&self) -> Date;

    /// Discount factor for a currency from the valuation date to `date`.
    ///
    /// # Errors
    /// `MarketDataError::CurveNotFound` if there is no curve for the currency.
    fn discount_factor(&self, currency: Currency, date: Date) -> Result<f64, MarketDataError>;

    /// Sensitivity of the discount factor at `date` to the curve's zero rate,
    /// for a unit amount.
    ///
    /// # Errors
    /// `MarketDataError::CurveNotFound` if there is no curve for the currency.
    fn discount_factor_zero_rate_sensitivity(
        &self,
        currency: Currency,
        date: Date,
    ) -> Result<PointSensitivity, MarketDataError>;

    /// Spot rate: the number of `counter` units per unit of `base`.
    ///
    /// # Errors
    /// `MarketDataError::FxRateNotFound` if neither orientation is available.
    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, MarketDataError>;

    /// Forward rate of `pair` at `date`, expressed as the price of
    /// `base_currency` in the other currency of the pair.
    ///
    /// # Errors
    /// `MarketDataError::CurrencyNotInPair` if `base_currency` is not in the
    /// pair, or any curve or spot lookup failure.
    fn fx_forward_rate(
        &self,
        pair: CurrencyPair,
        base_currency: Currency,
        date: Date,
    ) -> Result<f64, MarketDataError>;

    /// Unit point sensitivity to the forward rate of `pair` at `date`,
    /// referenced to `reference_currency`.
    ///
    /// # Errors
    /// `MarketDataError::CurrencyNotInPair` if the reference currency is not in the pair.
    fn fx_forward_rate_point_sensitivity(
        &self,
        pair: CurrencyPair,
        reference_currency: Currency,
        date: Date,
    ) -> Result<PointSensitivities, MarketDataError> {
        let other = other_currency(pair, reference_currency)?;
        Ok(PointSensitivities::of(vec![PointSensitivity::FxForward {
            pair,
            reference_currency,
            date,
            currency: other,
            sensitivity: 1.0,
        }]))
    }

    /// Sensitivity of the forward rate at `date` to the spot rate, with the
    /// forward referenced to `reference_currency`.
    ///
    /// # Errors
    /// Any curve lookup failure, or `CurrencyNotInPair`.
    fn fx_forward_rate_spot_sensitivity(
        &self,
        pair: CurrencyPair,
        reference_currency: Currency,
        date: Date,
    ) -> Result<f64, MarketDataError> {
        let other = other_currency(pair, reference_currency)?;
        let df_reference = self.discount_factor(reference_currency, date)?;
        let df_other = self.discount_factor(other, date)?;
        Ok(df_reference / df_other)
    }

    /// Projects point sensitivities onto curve parameters.
    ///
    /// # Errors
    /// Any curve lookup failure.
    fn parameter_sensitivity(
        &self,
        sensitivities: &PointSensitivities,
    ) -> Result<CurrencyParameterSensitivities, MarketDataError>;

    /// Converts a multi-currency amount into a single currency at spot.
    ///
    /// # Errors
    /// `MarketDataError::FxRateNotFound` for any missing spot rate.
    fn convert(
        &self,
        amount: &MultiCurrencyAmount,
        target: Currency,
    ) -> Result<CurrencyAmount, MarketDataError> {
        amount.convert_to(target, |from, to| self.fx_rate(from, to))
    }
}

fn other_currency(pair: CurrencyPair, currency: Currency) -> Result<Currency, MarketDataError> {
    if currency == pair.base() {
        Ok(pair.counter())
    } else if currency == pair.counter() {
        Ok(pair.base())
    } else {
        Err(MarketDataError::CurrencyNotInPair { currency, pair })
    }
}

/// Rates provider over per-currency discount curves and spot FX rates.
///
/// Times are measured from the valuation date with the provider's day count
/// (ACT/365F unless configured). Dates on or before the valuation date
/// discount at 1.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::{ImmutableRatesProvider, RatesProvider};
/// use fxflex_core::market_data::curves::CurveEnum;
/// use fxflex_core::types::{Currency, CurrencyPair, Date, FxRate};
///
/// let valuation = Date::from_ymd(2018, 1, 2).unwrap();
/// let provider = ImmutableRatesProvider::builder(valuation)
///     .discount_curve(Currency::EUR, CurveEnum::flat(-0.004))
///     .discount_curve(Currency::USD, CurveEnum::flat(0.015))
///     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap())
///     .build();
///
/// let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// let one_year = Date::from_ymd(2019, 1, 2).unwrap();
/// let forward = provider.fx_forward_rate(pair, Currency::EUR, one_year).unwrap();
/// assert!((forward - 1.20 * (0.004_f64 + 0.015).exp()).abs() < 1e-12);
///
/// // The USD price of EUR is the inverse of the EUR price of USD
/// let inverse = provider.fx_forward_rate(pair, Currency::USD, one_year).unwrap();
/// assert!((forward * inverse - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ImmutableRatesProvider {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: HashMap<Currency, CurveEnum<f64>>,
    fx_rates: HashMap<CurrencyPair, f64>,
}

impl ImmutableRatesProvider {
    /// Starts building a provider for a valuation date.
    pub fn builder(valuation_date: Date) -> ImmutableRatesProviderBuilder {
        ImmutableRatesProviderBuilder::new(valuation_date)
    }

    /// Day count used to convert dates into curve times.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Currencies with a discount curve, sorted.
    pub fn curve_currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.discount_curves.keys().copied().collect();
        currencies.sort();
        currencies
    }

    /// Looks up the discount curve of a currency.
    ///
    /// # Errors
    /// `MarketDataError::CurveNotFound` if no curve is registered.
    pub fn discount_curve(&self, currency: Currency) -> Result<&CurveEnum<f64>, MarketDataError> {
        self.discount_curves
            .get(&currency)
            .ok_or(MarketDataError::CurveNotFound(currency))
    }

    /// Curve time of a date, floored at zero.
    pub fn relative_time(&self, date: Date) -> f64 {
        self.day_count
            .year_fraction(self.valuation_date, date)
            .max(0.0)
    }

    fn zero_rate_parameter_entry(
        &self,
        curve_currency: Currency,
        currency: Currency,
        year_fraction: f64,
        sensitivity: f64,
    ) -> Result<CurrencyParameterSensitivity, MarketDataError> {
        let weights = self
            .discount_curve(curve_currency)?
            .zero_rate_parameter_sensitivity(year_fraction)?;
        Ok(CurrencyParameterSensitivity::new(
            curve_currency,
            currency,
            weights.into_iter().map(|w| w * sensitivity).collect(),
        ))
    }
}

impl RatesProvider for ImmutableRatesProvider {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn discount_factor(&self, currency: Currency, date: Date) -> Result<f64, MarketDataError> {
        let t = self.relative_time(date);
        self.discount_curve(currency)?.discount_factor(t)
    }

    fn discount_factor_zero_rate_sensitivity(
        &self,
        currency: Currency,
        date: Date,
    ) -> Result<PointSensitivity, MarketDataError> {
        let t = self.relative_time(date);
        let df = self.discount_curve(currency)?.discount_factor(t)?;
        Ok(PointSensitivity::ZeroRate {
            curve_currency: currency,
            year_fraction: t,
            currency,
            sensitivity: -t * df,
        })
    }

    fn fx_rate(&self, base: Currency, counter: Currency) -> Result<f64, MarketDataError> {
        if base == counter {
            return Ok(1.0);
        }
        let not_found = MarketDataError::FxRateNotFound { base, counter };
        let pair = CurrencyPair::new(base, counter).map_err(|_| not_found.clone())?;
        if let Some(rate) = self.fx_rates.get(&pair) {
            return Ok(*rate);
        }
        self.fx_rates
            .get(&pair.inverse())
            .map(|rate| 1.0 / rate)
            .ok_or(not_found)
    }

    fn fx_forward_rate(
        &self,
        pair: CurrencyPair,
        base_currency: Currency,
        date: Date,
    ) -> Result<f64, MarketDataError> {
        let other = other_currency(pair, base_currency)?;
        let spot = self.fx_rate(base_currency, other)?;
        let df_base = self.discount_factor(base_currency, date)?;
        let df_other = self.discount_factor(other, date)?;
        Ok(spot * df_base / df_other)
    }

    fn parameter_sensitivity(
        &self,
        sensitivities: &PointSensitivities,
    ) -> Result<CurrencyParameterSensitivities, MarketDataError> {
        let mut result = CurrencyParameterSensitivities::empty();
        for point in sensitivities.iter() {
            match *point {
                PointSensitivity::ZeroRate {
                    curve_currency,
                    year_fraction,
                    currency,
                    sensitivity,
                } => {
                    result = result.combined_with(self.zero_rate_parameter_entry(
                        curve_currency,
                        currency,
                        year_fraction,
                        sensitivity,
                    )?);
                }
                PointSensitivity::FxForward {
                    pair,
                    reference_currency,
                    date,
                    currency,
                    sensitivity,
                } => {
                    // dF/dr is -tF on the reference curve and +tF on the other
                    let other = other_currency(pair, reference_currency)?;
                    let t = self.relative_time(date);
                    let forward = self.fx_forward_rate(pair, reference_currency, date)?;
                    let scaled = sensitivity * t * forward;
                    result = result
                        .combined_with(self.zero_rate_parameter_entry(
                            reference_currency,
                            currency,
                            t,
                            -scaled,
                        )?)
                        .combined_with(
                            self.zero_rate_parameter_entry(other, currency, t, scaled)?,
                        );
                }
            }
        }
        Ok(result)
    }
}

/// Builder for [`ImmutableRatesProvider`].
#[derive(Debug, Clone)]
pub struct ImmutableRatesProviderBuilder {
    valuation_date: Date,
    day_count: DayCountConvention,
    discount_curves: HashMap<Currency, CurveEnum<f64>>,
    fx_rates: HashMap<CurrencyPair, f64>,
}

impl ImmutableRatesProviderBuilder {
    /// New builder with ACT/365F and no market data.
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            day_count: DayCountConvention::Act365Fixed,
            discount_curves: HashMap::new(),
            fx_rates: HashMap::new(),
        }
    }

    /// Sets the day count used for curve times.
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Registers (or replaces) the discount curve of a currency.
    pub fn discount_curve(mut self, currency: Currency, curve: impl Into<CurveEnum<f64>>) -> Self {
        self.discount_curves.insert(currency, curve.into());
        self
    }

    /// Registers (or replaces) a spot rate, removing any stored inverse.
    pub fn fx_rate(mut self, rate: FxRate) -> Self {
        self.fx_rates.remove(&rate.pair().inverse());
        self.fx_rates.insert(rate.pair(), rate.rate());
        self
    }

    /// Builds the provider.
    pub fn build(self) -> ImmutableRatesProvider {
        ImmutableRatesProvider {
            valuation_date: self.valuation_date,
            day_count: self.day_count,
            discount_curves: self.discount_curves,
            fx_rates: self.fx_rates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::{CurveInterpolation, FlatCurve, InterpolatedCurve};
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn eur_usd() -> CurrencyPair {
        CurrencyPair::new(Currency::EUR, Currency::USD).unwrap()
    }

    fn provider() -> ImmutableRatesProvider {
        ImmutableRatesProvider::builder(date(2018, 1, 2))
            .discount_curve(Currency::EUR, FlatCurve::new(-0.003))
            .discount_curve(
                Currency::USD,
                InterpolatedCurve::new(
                    &[0.25, 0.5, 1.0],
                    &[0.015, 0.017, 0.02],
                    CurveInterpolation::Linear,
                    true,
                )
                .unwrap(),
            )
            .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.2).unwrap())
            .build()
    }

    fn bumped(
        provider: &ImmutableRatesProvider,
        ccy: Currency,
        index: usize,
        bump: f64,
    ) -> ImmutableRatesProvider {
        let curve: CurveEnum<f64> = match provider.discount_curve(ccy).unwrap() {
            CurveEnum::Flat(c) => CurveEnum::flat(c.rate() + bump),
            CurveEnum::Interpolated(c) => {
                let mut rates = c.rates().to_vec();
                rates[index] += bump;
                InterpolatedCurve::new(c.tenors(), &rates, c.method(), c.allow_extrapolation())
                    .unwrap()
                    .into()
            }
        };
        let mut builder = ImmutableRatesProvider::builder(provider.valuation_date())
            .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.2).unwrap());
        for other in provider.curve_currencies() {
            let c = if other == ccy {
                curve.clone()
            } else {
                provider.discount_curve(other).unwrap().clone()
            };
            builder = builder.discount_curve(other, c);
        }
        builder.build()
    }

    #[test]
    fn test_discount_factor_in_past_is_one() {
        let p = provider();
        assert_eq!(p.discount_factor(Currency::USD, date(2017, 12, 1)).unwrap(), 1.0);
        assert_eq!(p.discount_factor(Currency::USD, date(2018, 1, 2)).unwrap(), 1.0);
    }

    #[test]
    fn test_missing_curve_and_rate() {
        let p = provider();
        assert_eq!(
            p.discount_factor(Currency::GBP, date(2018, 6, 1)),
            Err(MarketDataError::CurveNotFound(Currency::GBP))
        );
        assert_eq!(
            p.fx_rate(Currency::GBP, Currency::USD),
            Err(MarketDataError::FxRateNotFound {
                base: Currency::GBP,
                counter: Currency::USD
            })
        );
    }

    #[test]
    fn test_fx_rate_inverse_lookup() {
        let p = provider();
        assert_relative_eq!(p.fx_rate(Currency::USD, Currency::EUR).unwrap(), 1.0 / 1.2);
        assert_eq!(p.fx_rate(Currency::JPY, Currency::JPY).unwrap(), 1.0);
    }

    #[test]
    fn test_forward_rate_covered_interest_parity() {
        let p = provider();
        let d = date(2018, 6, 29);
        let expected = 1.2 * p.discount_factor(Currency::EUR, d).unwrap()
            / p.discount_factor(Currency::USD, d).unwrap();
        assert_relative_eq!(
            p.fx_forward_rate(eur_usd(), Currency::EUR, d).unwrap(),
            expected,
            epsilon = 1e-14
        );
        match p.fx_forward_rate(eur_usd(), Currency::GBP, d) {
            Err(MarketDataError::CurrencyNotInPair { currency, .. }) => {
                assert_eq!(currency, Currency::GBP)
            }
            other => panic!("Expected CurrencyNotInPair, got {:?}", other),
        }
    }

    #[test]
    fn test_spot_sensitivity_is_forward_over_spot() {
        let p = provider();
        let d = date(2018, 6, 29);
        for reference in [Currency::EUR, Currency::USD] {
            let analytic = p
                .fx_forward_rate_spot_sensitivity(eur_usd(), reference, d)
                .unwrap();
            let other = if reference == Currency::EUR {
                Currency::USD
            } else {
                Currency::EUR
            };
            let forward = p.fx_forward_rate(eur_usd(), reference, d).unwrap();
            let spot = p.fx_rate(reference, other).unwrap();
            // forward is linear in the spot of the same orientation
            assert_relative_eq!(analytic * spot, forward, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate_point_sensitivity() {
        let p = provider();
        let d = date(2019, 1, 2);
        let df = p.discount_factor(Currency::USD, d).unwrap();
        match p.discount_factor_zero_rate_sensitivity(Currency::USD, d).unwrap() {
            PointSensitivity::ZeroRate {
                year_fraction,
                sensitivity,
                ..
            } => {
                assert_relative_eq!(year_fraction, 1.0, epsilon = 1e-15);
                assert_relative_eq!(sensitivity, -df, epsilon = 1e-15);
            }
            other => panic!("Expected ZeroRate, got {:?}", other),
        }
    }

    #[test]
    fn test_forward_parameter_sensitivity_matches_bump() {
        let p = provider();
        let d = date(2018, 5, 15);
        let points = p
            .fx_forward_rate_point_sensitivity(eur_usd(), Currency::EUR, d)
            .unwrap();
        let params = p.parameter_sensitivity(&points).unwrap();
        let base = p.fx_forward_rate(eur_usd(), Currency::EUR, d).unwrap();
        let bump = 1e-7;

        let usd = params.get(Currency::USD, Currency::USD).unwrap();
        for (i, analytic) in usd.sensitivity().iter().enumerate() {
            let shifted = bumped(&p, Currency::USD, i, bump)
                .fx_forward_rate(eur_usd(), Currency::EUR, d)
                .unwrap();
            assert_relative_eq!(*analytic, (shifted - base) / bump, epsilon = 1e-6);
        }

        let eur = params.get(Currency::EUR, Currency::USD).unwrap();
        let shifted = bumped(&p, Currency::EUR, 0, bump)
            .fx_forward_rate(eur_usd(), Currency::EUR, d)
            .unwrap();
        assert_relative_eq!(eur.sensitivity()[0], (shifted - base) / bump, epsilon = 1e-6);
    }

    #[test]
    fn test_convert_multi_currency_amount() {
        let p = provider();
        let amount = MultiCurrencyAmount::of([
            CurrencyAmount::new(Currency::EUR, 100.0),
            CurrencyAmount::new(Currency::USD, 30.0),
        ]);
        let converted = p.convert(&amount, Currency::USD).unwrap();
        assert_relative_eq!(converted.amount(), 150.0, epsilon = 1e-12);
    }
}
