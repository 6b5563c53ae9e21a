use chrono::{Duration, Utc};

use assetpulse::catalog::AssetCatalog;
use assetpulse::config::EngineConfig;
use assetpulse::engine::AnalyticsEngine;
use assetpulse::logging::init_logging;
use assetpulse::models::{PricePoint, PriceSeries};
use assetpulse::services::MarketDataProvider;
use assetpulse::AssetReport;

/// Deterministic synthetic provider so the demo runs without a network.
struct SyntheticProvider;

impl MarketDataProvider for SyntheticProvider {
    fn price_history(
        &self,
        symbol: &str,
        lookback_days: usize,
    ) -> Result<PriceSeries, Box<dyn std::error::Error>> {
        let base = 50.0 + (symbol.bytes().map(usize::from).sum::<usize>() % 200) as f64 * 10.0;
        let start = Utc::now() - Duration::days(lookback_days as i64);
        let points = (0..lookback_days)
            .map(|i| {
                let trend = i as f64 * 0.08;
                let wiggle = (i as f64 / 9.0).sin() * base * 0.02;
                PricePoint::new(start + Duration::days(i as i64), base + trend + wiggle)
            })
            .collect();
        Ok(PriceSeries::new(points)?)
    }
}

fn main() {
    init_logging();

    let catalog = AssetCatalog::default_basket();
    let engine = AnalyticsEngine::new(EngineConfig::default());
    let reports = engine.run_basket(&catalog, &SyntheticProvider);

    for report in &reports {
        print_report(&catalog, report);
        println!();
    }
}

fn print_report(catalog: &AssetCatalog, report: &AssetReport) {
    if let Some(info) = catalog.get(&report.symbol) {
        println!("{} {} ({})", info.emoji, info.name, info.unit);
    } else {
        println!("{}", report.symbol);
    }
    println!("  Price: {:.2}", report.latest.close);
    if let Some(change) = report.daily_change {
        println!("  Change: {:+.2} ({:+.2}%)", change.abs, change.pct);
    }
    match &report.signals {
        Some(signals) => {
            println!("  Signals:");
            for signal in signals {
                println!("    - {signal}");
            }
        }
        None => println!("  Signals: skipped (insufficient history)"),
    }
    println!("  Returns:");
    for ret in &report.returns {
        println!("    {}: {:+.2}% ({:?})", ret.period, ret.pct, ret.quality);
    }
}
