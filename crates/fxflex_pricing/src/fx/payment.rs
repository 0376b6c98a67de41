//! Discounting of single payments.

use fxflex_core::market_data::{PointSensitivities, RatesProvider};
use fxflex_core::types::{CurrencyAmount, Payment, PricingError};

/// Values a [`Payment`] by discounting it on its currency's curve.
///
/// Payments dated before the valuation date are worth nothing and carry no
/// sensitivity. A payment on the valuation date is worth its full amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingPaymentPricer;

impl DiscountingPaymentPricer {
    /// Creates the pricer.
    pub const fn new() -> Self {
        Self
    }

    /// Present value in the payment currency: amount times discount factor.
    ///
    /// # Errors
    /// `PricingError::MarketData` if the currency has no discount curve.
    pub fn present_value<P>(
        &self,
        payment: &Payment,
        provider: &P,
    ) -> Result<CurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        if payment.date() < provider.valuation_date() {
            return Ok(CurrencyAmount::zero(payment.currency()));
        }
        let df = provider.discount_factor(payment.currency(), payment.date())?;
        Ok(payment.value().multiplied_by(df))
    }

    /// Undiscounted value: the amount if not yet paid, otherwise zero.
    pub fn forecast_value<P>(&self, payment: &Payment, provider: &P) -> CurrencyAmount
    where
        P: RatesProvider + ?Sized,
    {
        if payment.date() < provider.valuation_date() {
            CurrencyAmount::zero(payment.currency())
        } else {
            payment.value()
        }
    }

    /// Zero-rate point sensitivity of the present value.
    ///
    /// # Errors
    /// `PricingError::MarketData` if the currency has no discount curve.
    pub fn present_value_sensitivity<P>(
        &self,
        payment: &Payment,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        if payment.date() < provider.valuation_date() {
            return Ok(PointSensitivities::empty());
        }
        let unit = provider.discount_factor_zero_rate_sensitivity(payment.currency(), payment.date())?;
        Ok(PointSensitivities::of(vec![unit.multiplied_by(payment.amount())]))
    }
}
