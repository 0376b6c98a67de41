//! Criterion benchmarks for scenario calculations.
//!
//! Benchmarks cover:
//! - Present value over a growing number of scenarios, sequential vs rayon
//! - A full multi-measure calculation for one trade

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fxflex_core::calendar::ReferenceData;
use fxflex_core::market_data::{CurveEnum, ImmutableRatesProvider};
use fxflex_core::types::{Currency, CurrencyAmount, Date, FxRate};
use fxflex_models::instruments::fx::{
    ExecutionWindow, FxWindowForward, FxWindowForwardTrade, TradeInfo,
};
use fxflex_risk::{
    CalculationFunction, FxWindowForwardCalculations, FxWindowForwardTradeCalculationFunction,
    Measure, ParallelConfig, ScenarioMarketData,
};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn trade() -> FxWindowForwardTrade {
    let product = FxWindowForward::from_fx_rate(
        CurrencyAmount::new(Currency::USD, 1_000_000.0),
        &FxRate::new(Currency::EUR, Currency::USD, 1.20).unwrap(),
        date(2018, 6, 30),
        None,
        ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30)),
    )
    .unwrap();
    FxWindowForwardTrade::new(TradeInfo::empty(), product)
}

/// Spot shocks spread evenly over +/- 10%.
fn market_data(n_scenarios: usize) -> ScenarioMarketData<ImmutableRatesProvider> {
    let scenarios = (0..n_scenarios)
        .map(|i| {
            let shock = 0.9 + 0.2 * i as f64 / n_scenarios.max(1) as f64;
            ImmutableRatesProvider::builder(date(2018, 1, 2))
                .discount_curve(Currency::EUR, CurveEnum::flat(-0.003))
                .discount_curve(Currency::USD, CurveEnum::flat(0.018))
                .fx_rate(FxRate::new(Currency::EUR, Currency::USD, 1.19 * shock).unwrap())
                .build()
        })
        .collect();
    ScenarioMarketData::new(scenarios)
}

/// Benchmark present value fan-out against scenario count.
fn bench_present_value_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("pv_scenarios");
    let trade = trade().resolve(&ReferenceData::standard()).unwrap();
    let sequential =
        FxWindowForwardCalculations::default().with_parallel_config(ParallelConfig::sequential());
    let parallel = FxWindowForwardCalculations::default();

    for n_scenarios in [10, 100, 1000] {
        let market_data = market_data(n_scenarios);
        group.bench_with_input(
            BenchmarkId::new("sequential", n_scenarios),
            &market_data,
            |b, md| b.iter(|| sequential.present_value_scenarios(black_box(&trade), md)),
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", n_scenarios),
            &market_data,
            |b, md| b.iter(|| parallel.present_value_scenarios(black_box(&trade), md)),
        );
    }

    group.finish();
}

/// Benchmark every measure for one trade over 100 scenarios.
fn bench_all_measures(c: &mut Criterion) {
    let function = FxWindowForwardTradeCalculationFunction::default();
    let trade = trade();
    let ref_data = ReferenceData::standard();
    let market_data = market_data(100);

    c.bench_function("all_measures_100_scenarios", |b| {
        b.iter(|| function.calculate(black_box(&trade), &Measure::ALL, &market_data, &ref_data));
    });
}

criterion_group!(benches, bench_present_value_scenarios, bench_all_measures);
criterion_main!(benches);
