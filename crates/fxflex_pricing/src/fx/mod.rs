//! FX pricers.
//!
//! - [`DiscountingPaymentPricer`]: single cash flows
//! - [`PriceToWorstFxWindowForwardProductPricer`]: resolved window forwards
//! - [`PriceToWorstFxWindowForwardTradePricer`]: resolved window forward trades

mod payment;
mod trade;
mod window_forward;

pub use payment::DiscountingPaymentPricer;
pub use trade::PriceToWorstFxWindowForwardTradePricer;
pub use window_forward::PriceToWorstFxWindowForwardProductPricer;
