//! End-to-end price-to-worst valuation of a window forward.

use approx::assert_relative_eq;
use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
use fxflex_core::market_data::{
    CurveEnum, CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve, RatesProvider,
};
use fxflex_core::types::{BusinessDayConvention, Currency, CurrencyAmount, Date, FxRate};
use fxflex_models::instruments::fx::{
    ExecutionWindow, FxWindowForward, FxWindowForwardTrade, ResolvedFxWindowForwardTrade, TradeInfo,
};
use fxflex_pricing::fx::{
    PriceToWorstFxWindowForwardProductPricer, PriceToWorstFxWindowForwardTradePricer,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn resolved_trade() -> ResolvedFxWindowForwardTrade {
    let product = FxWindowForward::from_fx_rate(
        CurrencyAmount::new(Currency::USD, 150_000.0),
        &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
        date(2018, 6, 30),
        Some(BusinessDayAdjustment::new(
            BusinessDayConvention::Following,
            HolidayCalendarId::USNY,
        )),
        ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30)),
    )
    .unwrap();
    FxWindowForwardTrade::new(TradeInfo::empty().with_id("WINDOW-1"), product)
        .resolve(&ReferenceData::standard())
        .unwrap()
}

/// EUR curve with a hump so that the EUR/USD forward dips inside the window.
fn humped_provider(valuation: Date) -> ImmutableRatesProvider {
    let eur = InterpolatedCurve::new(
        &[0.1, 0.3, 0.4, 0.6, 1.0],
        &[0.000, 0.010, 0.030, 0.005, 0.000],
        CurveInterpolation::Linear,
        true,
    )
    .unwrap();
    ImmutableRatesProvider::builder(valuation)
        .discount_curve(Currency::EUR, eur)
        .discount_curve(Currency::USD, CurveEnum::flat(0.015))
        .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.19).unwrap())
        .build()
}

fn brute_force_worst(trade: &ResolvedFxWindowForwardTrade, provider: &ImmutableRatesProvider) -> Date {
    let pair = trade.product().currency_pair();
    let mut best: Option<(Date, f64)> = None;
    for &d in trade.product().window_dates() {
        if d < provider.valuation_date() {
            continue;
        }
        let rate = provider.fx_forward_rate(pair, Currency::EUR, d).unwrap();
        if best.map_or(true, |(_, r)| rate < r) {
            best = Some((d, rate));
        }
    }
    best.unwrap().0
}

#[test]
fn test_present_value_before_window_discounts_at_minimum_forward_date() {
    let trade = resolved_trade();
    assert_eq!(trade.product().window_dates().len(), 65);

    let provider = humped_provider(date(2018, 1, 2));
    let pricer = PriceToWorstFxWindowForwardTradePricer::default();

    let worst = brute_force_worst(&trade, &provider);
    assert!(worst > date(2018, 3, 30) && worst < date(2018, 6, 29));

    let pv = pricer.present_value(&trade, &provider).unwrap();
    let df_usd = provider.discount_factor(Currency::USD, worst).unwrap();
    let df_eur = provider.discount_factor(Currency::EUR, worst).unwrap();
    assert_relative_eq!(pv.amount(Currency::USD), 150_000.0 * df_usd, epsilon = 1e-8);
    assert_relative_eq!(pv.amount(Currency::EUR), -125_000.0 * df_eur, epsilon = 1e-8);

    assert_eq!(
        pricer.currency_exposure(&trade, &provider).unwrap(),
        pv
    );
}

#[test]
fn test_worst_date_independent_of_direction() {
    let trade = resolved_trade();
    let provider = humped_provider(date(2018, 1, 2));
    let pricer = PriceToWorstFxWindowForwardProductPricer::default();

    let (worst, _) = pricer.worst_date(trade.product(), &provider).unwrap().unwrap();
    let inverse = trade.product().inverse();
    let (inverse_worst, _) = pricer.worst_date(&inverse, &provider).unwrap().unwrap();

    // the receiver of EUR would prefer the highest forward but still gets the lowest
    assert_eq!(worst, inverse_worst);

    let pv = pricer.present_value(trade.product(), &provider).unwrap();
    let inverse_pv = pricer.present_value(&inverse, &provider).unwrap();
    assert_relative_eq!(
        pv.amount(Currency::USD),
        -inverse_pv.amount(Currency::USD),
        epsilon = 1e-10
    );
}

#[test]
fn test_lifecycle_around_payment_date() {
    let trade = resolved_trade();
    let pricer = PriceToWorstFxWindowForwardTradePricer::default();

    let on_payment = humped_provider(date(2018, 7, 2));
    let cash = pricer.current_cash(&trade, &on_payment);
    assert_eq!(cash.amount(Currency::USD), 150_000.0);
    assert_relative_eq!(cash.amount(Currency::EUR), -125_000.0, epsilon = 1e-9);

    // all window dates are in the past: nothing left to value
    let pv = pricer.present_value(&trade, &on_payment).unwrap();
    assert_eq!(pv.amount(Currency::USD), 0.0);

    let after = humped_provider(date(2018, 7, 3));
    let pv = pricer.present_value(&trade, &after).unwrap();
    assert_eq!(pv.len(), 2);
    assert_eq!(pv.amount(Currency::USD), 0.0);
    assert_eq!(pv.amount(Currency::EUR), 0.0);
    assert!(pricer
        .present_value_sensitivity(&trade, &after)
        .unwrap()
        .is_empty());
    assert_eq!(pricer.current_cash(&trade, &after).amount(Currency::USD), 0.0);
}

#[test]
fn test_parameter_sensitivity_of_present_value_sensitivity() {
    let trade = resolved_trade();
    let provider = humped_provider(date(2018, 1, 2));
    let pricer = PriceToWorstFxWindowForwardTradePricer::default();

    let points = pricer.present_value_sensitivity(&trade, &provider).unwrap();
    let params = provider.parameter_sensitivity(&points).unwrap();

    let eur = params.get(Currency::EUR, Currency::EUR).unwrap();
    assert_eq!(eur.sensitivity().len(), 5);
    let usd = params.get(Currency::USD, Currency::USD).unwrap();
    assert_eq!(usd.sensitivity().len(), 1);

    // paying EUR gains when EUR rates rise, receiving USD loses when USD rates rise
    assert!(eur.total().amount() > 0.0);
    assert!(usd.total().amount() < 0.0);
}

proptest! {
    #[test]
    fn prop_present_value_matches_brute_force(
        eur_rate in -0.02f64..0.05,
        usd_rate in -0.02f64..0.05,
        spot in 0.8f64..1.6,
        valuation_offset in 0i64..200,
    ) {
        let trade = resolved_trade();
        let provider = ImmutableRatesProvider::builder(date(2018, 1, 2).plus_days(valuation_offset).unwrap())
            .discount_curve(Currency::EUR, CurveEnum::flat(eur_rate))
            .discount_curve(Currency::USD, CurveEnum::flat(usd_rate))
            .fx_rate(FxRate::new(Currency::EUR, Currency::USD, spot).unwrap())
            .build();
        let pricer = PriceToWorstFxWindowForwardProductPricer::default();
        let pv = pricer.present_value(trade.product(), &provider).unwrap();

        let remaining = trade
            .product()
            .window_dates()
            .iter()
            .any(|d| *d >= provider.valuation_date());
        if remaining {
            let worst = brute_force_worst(&trade, &provider);
            let df_usd = provider.discount_factor(Currency::USD, worst).unwrap();
            prop_assert!((pv.amount(Currency::USD) - 150_000.0 * df_usd).abs() < 1e-6);
        } else {
            prop_assert_eq!(pv.amount(Currency::USD), 0.0);
        }
    }
}
