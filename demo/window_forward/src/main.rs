//! Window forward demo.
//!
//! Builds the EUR/USD window forward used throughout the test suite, shifts
//! the USD curve across a set of scenarios and prints the requested measures.
//!
//! ```text
//! window-forward --config fxflex.toml --scenarios 5 --measure PresentValue --measure ParSpread
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
use fxflex_core::market_data::{CurveEnum, CurveInterpolation, ImmutableRatesProvider, InterpolatedCurve};
use fxflex_core::types::{BusinessDayConvention, Currency, CurrencyAmount, Date, FxRate};
use fxflex_models::instruments::fx::{ExecutionWindow, FxWindowForward, FxWindowForwardTrade, TradeInfo};
use fxflex_risk::{
    CalculationConfig, CalculationFunction, FxWindowForwardCalculations,
    FxWindowForwardTradeCalculationFunction, LogLevel, Measure, MeasureValue, ScenarioMarketData,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Price-to-worst measures for a window FX forward
#[derive(Parser)]
#[command(name = "window-forward")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path; FXFLEX_* environment variables are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    log_level: Option<String>,

    /// Number of USD curve scenarios, 10bp apart
    #[arg(short, long, default_value = "5")]
    scenarios: usize,

    /// Measures to calculate; all measures when omitted
    #[arg(short, long = "measure")]
    measures: Vec<Measure>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculationConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalculationConfig::from_env()?,
    };
    let log_level = match &cli.log_level {
        Some(level) => LogLevel::from_str(level)?,
        None => config.log_level,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str())),
        )
        .init();

    let measures = if cli.measures.is_empty() {
        Measure::ALL.to_vec()
    } else {
        cli.measures.clone()
    };
    info!(
        scenarios = cli.scenarios,
        measures = measures.len(),
        parallel = config.parallel.enabled,
        "window forward demo starting"
    );

    let trade = sample_trade()?;
    let market_data = shifted_market_data(cli.scenarios)?;
    let function = FxWindowForwardTradeCalculationFunction::new(
        FxWindowForwardCalculations::default().with_parallel_config(config.parallel),
    );
    let results = function.calculate(&trade, &measures, &market_data, &ReferenceData::standard())?;

    println!(
        "Trade {} ({}), natural currency {}",
        trade.info().id().unwrap_or("-"),
        trade.product().currency_pair(),
        function.natural_currency(&trade)
    );
    for (measure, result) in &results {
        println!("\n{}", measure);
        match result {
            Ok(per_scenario) => {
                for (i, value) in per_scenario.iter().enumerate() {
                    match value {
                        Ok(value) => println!("  scenario {:>3}: {}", i, describe(value)),
                        Err(failure) => println!("  scenario {:>3}: FAILED {}", i, failure),
                    }
                }
            }
            Err(failure) => println!("  {}", failure),
        }
    }

    info!("window forward demo complete");
    Ok(())
}

/// USD 150,000 against EUR at 1.20, window 2018-03-30 to 2018-06-30 on USNY.
fn sample_trade() -> Result<FxWindowForwardTrade> {
    let product = FxWindowForward::from_fx_rate(
        CurrencyAmount::new(Currency::USD, 150_000.0),
        &FxRate::new(Currency::EUR, Currency::USD, 1.20)?,
        Date::from_ymd(2018, 6, 30)?,
        Some(BusinessDayAdjustment::new(
            BusinessDayConvention::Following,
            HolidayCalendarId::USNY,
        )),
        ExecutionWindow::period(Date::from_ymd(2018, 3, 30)?, Date::from_ymd(2018, 6, 30)?),
    )?;
    Ok(FxWindowForwardTrade::new(
        TradeInfo::empty().with_id("DEMO-WINDOW-1"),
        product,
    ))
}

/// A humped EUR curve and a flat USD curve shifted by 10bp per scenario.
fn shifted_market_data(scenarios: usize) -> Result<ScenarioMarketData<ImmutableRatesProvider>> {
    let valuation = Date::from_ymd(2018, 1, 2)?;
    let eur = InterpolatedCurve::new(
        &[0.1, 0.3, 0.4, 0.6, 1.0],
        &[0.000, 0.010, 0.030, 0.005, 0.000],
        CurveInterpolation::Linear,
        true,
    )?;
    let spot = FxRate::new(Currency::EUR, Currency::USD, 1.19)?;
    let providers = (0..scenarios)
        .map(|i| {
            ImmutableRatesProvider::builder(valuation)
                .discount_curve(Currency::EUR, eur.clone())
                .discount_curve(Currency::USD, CurveEnum::flat(0.015 + 0.001 * i as f64))
                .fx_rate(spot)
                .build()
        })
        .collect();
    Ok(ScenarioMarketData::new(providers))
}

fn describe(value: &MeasureValue) -> String {
    match value {
        MeasureValue::MultiCurrency(amounts) => amounts
            .iter()
            .map(|a| format!("{} {:.2}", a.currency(), a.amount()))
            .collect::<Vec<_>>()
            .join(", "),
        MeasureValue::Sensitivities(sens) => sens
            .iter()
            .map(|s| {
                let buckets: Vec<String> = s.sensitivity().iter().map(|v| format!("{:.4}", v)).collect();
                format!("{} curve [{}] {}", s.curve_currency(), buckets.join(" "), s.currency())
            })
            .collect::<Vec<_>>()
            .join("; "),
        MeasureValue::Double(v) => format!("{:.8}", v),
        MeasureValue::FxRate(rate) => format!("{} {:.6}", rate.pair(), rate.rate()),
        MeasureValue::ResolvedTarget(trade) => {
            let product = trade.product();
            format!(
                "{} window dates, payment {}",
                product.window_dates().len(),
                product.payment_date()
            )
        }
    }
}
