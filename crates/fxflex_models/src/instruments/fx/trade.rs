//! Trades wrapping window forward products.

use fxflex_core::calendar::ReferenceData;
use fxflex_core::types::Date;

use super::resolved::ResolvedFxWindowForward;
use super::window_forward::FxWindowForward;
use crate::instruments::InstrumentError;

/// Additional trade attributes, none of which affect valuation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeInfo {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    trade_date: Option<Date>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    counterparty: Option<String>,
}

impl TradeInfo {
    /// Trade info with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the trade identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the trade date.
    pub fn with_trade_date(mut self, date: Date) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Sets the counterparty.
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Trade identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Trade date.
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Counterparty.
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }
}

/// A window forward trade: trade info plus the product.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::ReferenceData;
/// use fxflex_core::types::{Currency, CurrencyAmount, Date};
/// use fxflex_models::instruments::fx::{
///     ExecutionWindow, FxWindowForward, FxWindowForwardTrade, TradeInfo,
/// };
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let product = FxWindowForward::of(
///     CurrencyAmount::new(Currency::GBP, 1_000_000.0),
///     CurrencyAmount::new(Currency::USD, -1_300_000.0),
///     date(2018, 12, 31),
///     None,
///     ExecutionWindow::dates([date(2018, 9, 28), date(2018, 12, 31)]),
/// )
/// .unwrap();
/// let trade = FxWindowForwardTrade::new(TradeInfo::empty().with_id("T-1"), product);
///
/// let resolved = trade.resolve(&ReferenceData::standard()).unwrap();
/// assert_eq!(resolved.info().id(), Some("T-1"));
/// assert_eq!(resolved.product().window_dates().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxWindowForwardTrade {
    #[cfg_attr(feature = "serde", serde(default))]
    info: TradeInfo,
    product: FxWindowForward,
}

impl FxWindowForwardTrade {
    /// Creates a trade.
    pub fn new(info: TradeInfo, product: FxWindowForward) -> Self {
        Self { info, product }
    }

    /// Trade attributes.
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// The traded product.
    pub fn product(&self) -> &FxWindowForward {
        &self.product
    }

    /// Resolves the product, keeping the trade info.
    ///
    /// # Errors
    /// Any resolution failure of the product.
    pub fn resolve(
        &self,
        ref_data: &ReferenceData,
    ) -> Result<ResolvedFxWindowForwardTrade, InstrumentError> {
        Ok(ResolvedFxWindowForwardTrade::new(
            self.info.clone(),
            self.product.resolve(ref_data)?,
        ))
    }
}

/// A resolved window forward trade, the input of pricers and measures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFxWindowForwardTrade {
    #[cfg_attr(feature = "serde", serde(default))]
    info: TradeInfo,
    product: ResolvedFxWindowForward,
}

impl ResolvedFxWindowForwardTrade {
    /// Creates a resolved trade.
    pub fn new(info: TradeInfo, product: ResolvedFxWindowForward) -> Self {
        Self { info, product }
    }

    /// Trade attributes.
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// The resolved product.
    pub fn product(&self) -> &ResolvedFxWindowForward {
        &self.product
    }
}
