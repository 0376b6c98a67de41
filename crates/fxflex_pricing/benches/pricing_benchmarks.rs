//! Criterion benchmarks for price-to-worst valuation.
//!
//! Benchmarks cover:
//! - Present value with window sizes from a week to a year of daily dates
//! - Present value sensitivity at the payment date

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fxflex_core::market_data::{CurveEnum, CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve};
use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
use fxflex_models::instruments::fx::ResolvedFxWindowForward;
use fxflex_pricing::fx::PriceToWorstFxWindowForwardProductPricer;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Window forward paying one day after a window of `n_dates` consecutive days.
fn window_forward(n_dates: i64) -> ResolvedFxWindowForward {
    let start = date(2018, 3, 1);
    let window: Vec<Date> = (0..n_dates).map(|i| start.plus_days(i).unwrap()).collect();
    let payment_date = start.plus_days(n_dates).unwrap();
    ResolvedFxWindowForward::from_fx_rate(
        CurrencyAmount::new(Currency::USD, 1_000_000.0),
        &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
        payment_date,
        window,
    )
    .unwrap()
}

fn provider() -> ImmutableRatesProvider {
    let eur = InterpolatedCurve::new(
        &[0.25, 0.5, 1.0, 2.0],
        &[-0.004, -0.003, -0.001, 0.002],
        CurveInterpolation::LogLinear,
        true,
    )
    .unwrap();
    ImmutableRatesProvider::builder(date(2018, 1, 2))
        .discount_curve(Currency::EUR, eur)
        .discount_curve(Currency::USD, CurveEnum::flat(0.02))
        .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.19).unwrap())
        .build()
}

/// Benchmark price-to-worst present value against window size.
fn bench_present_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_to_worst_pv");
    let pricer = PriceToWorstFxWindowForwardProductPricer::default();
    let provider = provider();

    for n_dates in [5, 65, 250] {
        let fx = window_forward(n_dates);
        group.bench_with_input(BenchmarkId::new("window_dates", n_dates), &fx, |b, fx| {
            b.iter(|| pricer.present_value(black_box(fx), black_box(&provider)));
        });
    }

    group.finish();
}

/// Benchmark point sensitivity plus projection onto curve parameters.
fn bench_sensitivity(c: &mut Criterion) {
    use fxflex_core::market_data::RatesProvider;

    let pricer = PriceToWorstFxWindowForwardProductPricer::default();
    let provider = provider();
    let fx = window_forward(65);

    c.bench_function("pv_parameter_sensitivity", |b| {
        b.iter(|| {
            let points = pricer
                .present_value_sensitivity(black_box(&fx), &provider)
                .unwrap();
            provider.parameter_sensitivity(&points)
        });
    });
}

criterion_group!(benches, bench_present_value, bench_sensitivity);
criterion_main!(benches);
