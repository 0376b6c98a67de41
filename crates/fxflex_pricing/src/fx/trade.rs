//! Trade-level pricer for window forwards.

use fxflex_core::market_data::{PointSensitivities, RatesProvider};
use fxflex_core::types::{FxRate, MultiCurrencyAmount, PricingError};
use fxflex_models::instruments::fx::ResolvedFxWindowForwardTrade;

use super::window_forward::PriceToWorstFxWindowForwardProductPricer;

/// Prices [`ResolvedFxWindowForwardTrade`]s by delegating to the product pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceToWorstFxWindowForwardTradePricer {
    product_pricer: PriceToWorstFxWindowForwardProductPricer,
}

impl PriceToWorstFxWindowForwardTradePricer {
    /// Creates a trade pricer around a product pricer.
    pub const fn new(product_pricer: PriceToWorstFxWindowForwardProductPricer) -> Self {
        Self { product_pricer }
    }

    /// The underlying product pricer.
    pub fn product_pricer(&self) -> &PriceToWorstFxWindowForwardProductPricer {
        &self.product_pricer
    }

    /// Present value of the trade.
    ///
    /// # Errors
    /// Any market data failure.
    pub fn present_value<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer.present_value(trade.product(), provider)
    }

    /// Point sensitivity of the present value.
    ///
    /// # Errors
    /// Any market data failure.
    pub fn present_value_sensitivity<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer
            .present_value_sensitivity(trade.product(), provider)
    }

    /// Par spread of the trade.
    ///
    /// # Errors
    /// Zero base notional or any market data failure.
    pub fn par_spread<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<f64, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer.par_spread(trade.product(), provider)
    }

    /// Currency exposure of the trade.
    ///
    /// # Errors
    /// Any market data failure.
    pub fn currency_exposure<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer.currency_exposure(trade.product(), provider)
    }

    /// Cash settling on the valuation date.
    pub fn current_cash<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> MultiCurrencyAmount
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer.current_cash(trade.product(), provider)
    }

    /// Forward rate at the payment date.
    ///
    /// # Errors
    /// Any market data failure.
    pub fn forward_fx_rate<P>(
        &self,
        trade: &ResolvedFxWindowForwardTrade,
        provider: &P,
    ) -> Result<FxRate, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.product_pricer.forward_fx_rate(trade.product(), provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
    use fxflex_core::types::{Currency, CurrencyAmount, Date};
    use fxflex_models::instruments::fx::{ResolvedFxWindowForward, TradeInfo};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_trade_pricer_matches_product_pricer() {
        let product = ResolvedFxWindowForward::from_fx_rate(
            CurrencyAmount::new(Currency::GBP, -1_000_000.0),
            &FxRate::new(Currency::GBP, Currency::USD, 1.35).unwrap(),
            date(2018, 9, 28),
            vec![date(2018, 6, 29), date(2018, 9, 28)],
        )
        .unwrap();
        let trade = ResolvedFxWindowForwardTrade::new(TradeInfo::empty().with_id("T1"), product);
        let provider = ImmutableRatesProvider::builder(date(2018, 1, 2))
            .discount_curve(Currency::GBP, CurveEnum::flat(0.005))
            .discount_curve(Currency::USD, CurveEnum::flat(0.02))
            .fx_rate(FxRate::new(Currency::GBP, Currency::USD, 1.38).unwrap())
            .build();

        let trade_pricer = PriceToWorstFxWindowForwardTradePricer::default();
        let product_pricer = trade_pricer.product_pricer();

        assert_eq!(
            trade_pricer.present_value(&trade, &provider).unwrap(),
            product_pricer.present_value(trade.product(), &provider).unwrap()
        );
        assert_eq!(
            trade_pricer.par_spread(&trade, &provider).unwrap(),
            product_pricer.par_spread(trade.product(), &provider).unwrap()
        );
        assert_eq!(
            trade_pricer.forward_fx_rate(&trade, &provider).unwrap(),
            product_pricer.forward_fx_rate(trade.product(), &provider).unwrap()
        );
        assert_eq!(
            trade_pricer.present_value_sensitivity(&trade, &provider).unwrap(),
            product_pricer
                .present_value_sensitivity(trade.product(), &provider)
                .unwrap()
        );
        assert_eq!(
            trade_pricer.current_cash(&trade, &provider).amount(Currency::GBP),
            0.0
        );
    }
}
