//! Price-to-worst valuation of window forwards.
//!
//! The holder of a window forward exchanges the two payments at a rate fixed
//! at trade time, but the counterparty may choose the settlement date within
//! the window. The position is valued as if the date with the lowest forward
//! rate (units of counter per unit of base) were chosen:
//!
//! ```text
//! d* = argmin { F(base/counter, d) : d in window, d >= valuation date }
//! PV = N_base * DF_base(d*) + N_counter * DF_counter(d*)
//! ```
//!
//! Ties resolve to the earliest date. The selection does not depend on which
//! leg is received.
//!
//! Sensitivities, current cash and the forward rate refer to the contractual
//! payment date rather than `d*`.

use fxflex_core::market_data::{PointSensitivities, RatesProvider};
use fxflex_core::types::{
    Currency, CurrencyAmount, Date, FxRate, MultiCurrencyAmount, PricingError,
};
use fxflex_models::instruments::fx::ResolvedFxWindowForward;
use tracing::{debug, trace};

use super::payment::DiscountingPaymentPricer;

/// Pricer for [`ResolvedFxWindowForward`] using price-to-worst date selection.
///
/// # Examples
///
/// ```
/// use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
/// use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
/// use fxflex_models::instruments::fx::ResolvedFxWindowForward;
/// use fxflex_pricing::fx::PriceToWorstFxWindowForwardProductPricer;
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let fx = ResolvedFxWindowForward::from_fx_rate(
///     CurrencyAmount::new(Currency::EUR, 1_000_000.0),
///     &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
///     date(2018, 12, 31),
///     vec![date(2018, 6, 29), date(2018, 9, 28), date(2018, 12, 31)],
/// )
/// .unwrap();
///
/// // USD rates above EUR rates: the EUR/USD forward rises with time
/// let provider = ImmutableRatesProvider::builder(date(2018, 1, 2))
///     .discount_curve(Currency::EUR, CurveEnum::flat(-0.004))
///     .discount_curve(Currency::USD, CurveEnum::flat(0.02))
///     .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.18).unwrap())
///     .build();
///
/// let pricer = PriceToWorstFxWindowForwardProductPricer::default();
/// let (worst, _) = pricer.worst_date(&fx, &provider).unwrap().unwrap();
/// assert_eq!(worst, date(2018, 6, 29));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceToWorstFxWindowForwardProductPricer {
    payment_pricer: DiscountingPaymentPricer,
}

impl PriceToWorstFxWindowForwardProductPricer {
    /// Creates a pricer discounting payments with `payment_pricer`.
    pub const fn new(payment_pricer: DiscountingPaymentPricer) -> Self {
        Self { payment_pricer }
    }

    /// Forward rate of the product's pair at `date`, as base/counter.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves or spot rates.
    pub fn forward_fx_rate_at<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
        date: Date,
    ) -> Result<FxRate, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let pair = fx.currency_pair();
        let rate = provider.fx_forward_rate(pair, pair.base(), date)?;
        Ok(FxRate::from_pair(pair, rate)?)
    }

    /// The window date with the lowest forward rate, among dates on or after
    /// the valuation date, together with that rate.
    ///
    /// Returns `None` when no window date remains.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves or spot rates.
    pub fn worst_date<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<Option<(Date, FxRate)>, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let valuation_date = provider.valuation_date();
        let mut worst: Option<(Date, FxRate)> = None;
        let mut considered = 0usize;
        for &date in fx.window_dates().iter().filter(|d| **d >= valuation_date) {
            let rate = self.forward_fx_rate_at(fx, provider, date)?;
            trace!(%date, rate = rate.rate(), "window forward rate");
            considered += 1;
            // strict comparison keeps the earliest of equal rates
            let is_lower = match &worst {
                Some((_, current)) => rate.rate().total_cmp(&current.rate()).is_lt(),
                None => true,
            };
            if is_lower {
                worst = Some((date, rate));
            }
        }
        match &worst {
            Some((date, rate)) => debug!(
                pair = %fx.currency_pair(),
                considered,
                worst_date = %date,
                worst_rate = rate.rate(),
                "selected worst window date"
            ),
            None => debug!(pair = %fx.currency_pair(), "no window date on or after valuation date"),
        }
        Ok(worst)
    }

    /// Present value: both payments discounted to the worst window date.
    ///
    /// Zero in both currencies once the payment date has passed or no window
    /// date remains.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves or spot rates.
    pub fn present_value<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        if provider.valuation_date() > fx.payment_date() {
            return Ok(zero_amounts(fx));
        }
        let Some((selected_date, _)) = self.worst_date(fx, provider)? else {
            return Ok(zero_amounts(fx));
        };
        let base = self.payment_pricer.present_value(
            &fx.base_currency_payment().with_date(selected_date),
            provider,
        )?;
        let counter = self.payment_pricer.present_value(
            &fx.counter_currency_payment().with_date(selected_date),
            provider,
        )?;
        Ok(MultiCurrencyAmount::of([base, counter]))
    }

    /// Zero-rate point sensitivities of both payments at the contractual
    /// payment date.
    ///
    /// Empty once the payment date has passed.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves.
    pub fn present_value_sensitivity<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        if provider.valuation_date() > fx.payment_date() {
            return Ok(PointSensitivities::empty());
        }
        let base = self
            .payment_pricer
            .present_value_sensitivity(&fx.base_currency_payment(), provider)?;
        let counter = self
            .payment_pricer
            .present_value_sensitivity(&fx.counter_currency_payment(), provider)?;
        Ok(base.combined_with(&counter))
    }

    /// Par spread: the amount by which the agreed rate would have to move
    /// for the present value to be zero.
    ///
    /// ```text
    /// spread = PV (in counter) / (N_base * DF_counter(payment date))
    /// ```
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` if the base notional is zero
    /// - `PricingError::MarketData` for missing curves or spot rates
    pub fn par_spread<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<f64, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let base_notional = fx.base_currency_payment().amount();
        if base_notional == 0.0 {
            return Err(PricingError::InvalidInput(
                "par spread undefined for zero base notional".to_string(),
            ));
        }
        if provider.valuation_date() > fx.payment_date() {
            return Ok(0.0);
        }
        let counter_currency = fx.counter_currency_payment().currency();
        let pv = self.present_value(fx, provider)?;
        let pv_counter = provider.convert(&pv, counter_currency)?;
        let df = provider.discount_factor(counter_currency, fx.payment_date())?;
        Ok(pv_counter.amount() / (base_notional * df))
    }

    /// Currency exposure, equal to the present value.
    ///
    /// # Errors
    /// As [`Self::present_value`].
    pub fn currency_exposure<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.present_value(fx, provider)
    }

    /// Cash settling today: both payment amounts on the payment date,
    /// otherwise zero in both currencies.
    pub fn current_cash<P>(&self, fx: &ResolvedFxWindowForward, provider: &P) -> MultiCurrencyAmount
    where
        P: RatesProvider + ?Sized,
    {
        if provider.valuation_date() == fx.payment_date() {
            MultiCurrencyAmount::of([
                fx.base_currency_payment().value(),
                fx.counter_currency_payment().value(),
            ])
        } else {
            zero_amounts(fx)
        }
    }

    /// Forward rate at the contractual payment date.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves or spot rates.
    pub fn forward_fx_rate<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<FxRate, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.forward_fx_rate_at(fx, provider, fx.payment_date())
    }

    /// Point sensitivity of the payment-date forward rate, referenced to the
    /// receive currency.
    ///
    /// # Errors
    /// `PricingError::MarketData` if the provider rejects the pair.
    pub fn forward_fx_rate_point_sensitivity<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        Ok(provider.fx_forward_rate_point_sensitivity(
            fx.currency_pair(),
            receive_currency(fx),
            fx.payment_date(),
        )?)
    }

    /// Sensitivity of the payment-date forward rate to spot, referenced to
    /// the receive currency.
    ///
    /// # Errors
    /// `PricingError::MarketData` for missing curves.
    pub fn forward_fx_rate_spot_sensitivity<P>(
        &self,
        fx: &ResolvedFxWindowForward,
        provider: &P,
    ) -> Result<f64, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        Ok(provider.fx_forward_rate_spot_sensitivity(
            fx.currency_pair(),
            receive_currency(fx),
            fx.payment_date(),
        )?)
    }
}

fn receive_currency(fx: &ResolvedFxWindowForward) -> Currency {
    fx.receive_currency_amount().currency()
}

fn zero_amounts(fx: &ResolvedFxWindowForward) -> MultiCurrencyAmount {
    MultiCurrencyAmount::of([
        CurrencyAmount::zero(fx.base_currency_payment().currency()),
        CurrencyAmount::zero(fx.counter_currency_payment().currency()),
    ])
}
