//! Per-asset analytics pipeline and the batch runner over the catalog.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::AssetCatalog;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::indicators::compute_indicator_set;
use crate::models::{
    DailyChange, IndicatorSet, Period, PeriodReturn, PricePoint, PriceSeries, Signal,
};
use crate::returns;
use crate::services::MarketDataProvider;
use crate::signals::SignalGenerator;

/// Calendar days of history requested per symbol; covers the 252-observation
/// YoY offset with margin, matching the dashboard's 2-year trend window.
pub const HISTORY_DAYS: usize = 730;

/// Everything the presentation layer needs for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    pub symbol: String,
    pub latest: PricePoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change: Option<DailyChange>,
    pub indicators: IndicatorSet,
    /// `None` when signal generation was skipped because a required
    /// indicator was still in its warm-up window; otherwise non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<Vec<Signal>>,
    pub returns: Vec<PeriodReturn>,
    pub normalized: Vec<f64>,
}

/// One generic pipeline parameterized over the asset list; asset classes
/// differ only in display metadata, which lives in the catalog.
pub struct AnalyticsEngine {
    config: EngineConfig,
    generator: SignalGenerator,
}

impl AnalyticsEngine {
    pub fn new(config: EngineConfig) -> Self {
        let generator = SignalGenerator::new(config.clone());
        Self { config, generator }
    }

    /// Derive the full read-only snapshot for one symbol from its series.
    pub fn analyze(&self, symbol: &str, series: &PriceSeries) -> Result<AssetReport> {
        let indicators = compute_indicator_set(symbol, series, &self.config)?;

        let signals = match self.generator.generate(&indicators, series) {
            Ok(signals) => Some(signals),
            Err(EngineError::InsufficientHistory(reason)) => {
                warn!(symbol, %reason, "skipping signal generation");
                None
            }
            Err(err) => return Err(err),
        };

        let period_returns: Vec<PeriodReturn> = Period::ALL
            .iter()
            .map(|&period| returns::period_return(series, period))
            .collect();

        Ok(AssetReport {
            symbol: symbol.to_string(),
            latest: *series.latest(),
            daily_change: returns::daily_change(series),
            indicators,
            signals,
            returns: period_returns,
            normalized: returns::normalized_series(series),
        })
    }

    /// Run the pipeline over every symbol in the catalog.
    ///
    /// Failures are scoped per symbol: a fetch or computation error is
    /// logged and that asset skipped, never aborting the batch.
    pub fn run_basket<P: MarketDataProvider>(
        &self,
        catalog: &AssetCatalog,
        provider: &P,
    ) -> Vec<AssetReport> {
        let mut reports = Vec::with_capacity(catalog.len());
        for symbol in catalog.symbols() {
            let series = match provider.price_history(symbol, HISTORY_DAYS) {
                Ok(series) => series,
                Err(err) => {
                    warn!(symbol, error = %err, "price history fetch failed");
                    continue;
                }
            };
            match self.analyze(symbol, &series) {
                Ok(report) => reports.push(report),
                Err(err) => warn!(symbol, error = %err, "analysis failed"),
            }
        }
        info!(
            analyzed = reports.len(),
            tracked = catalog.len(),
            "basket analysis complete"
        );
        reports
    }
}
