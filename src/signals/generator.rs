//! Maps an asset's latest indicator values into an ordered signal list.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{IndicatorSet, MacdSeries, PriceSeries, Signal};

/// Rule engine over the latest (and, for MACD, second-latest) point of an
/// `IndicatorSet`.
///
/// Categories are evaluated in fixed order — RSI, MACD, Bollinger, moving
/// averages — and every matching category contributes a signal; `Hold` is
/// emitted alone when nothing fires. Fully deterministic given the input.
pub struct SignalGenerator {
    config: EngineConfig,
}

impl SignalGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Generate the ordered signal list for one asset.
    ///
    /// Requires every indicator to be defined at the tail of its series and
    /// at least two observations for the MACD cross comparison; otherwise
    /// fails with `InsufficientHistory` so the caller can skip this asset
    /// instead of receiving a misleading all-Hold list.
    pub fn generate(&self, indicators: &IndicatorSet, series: &PriceSeries) -> Result<Vec<Signal>> {
        if indicators.len() != series.len() {
            return Err(EngineError::InvalidInput(format!(
                "indicator series length {} does not match price series length {}",
                indicators.len(),
                series.len()
            )));
        }
        if series.len() < 2 {
            return Err(EngineError::InsufficientHistory(
                "need at least 2 observations for crossover rules".to_string(),
            ));
        }

        let price = series.latest().close;
        let rsi = Self::required(&indicators.rsi, "RSI")?;
        let upper = Self::required(&indicators.bollinger.upper, "Bollinger upper")?;
        let lower = Self::required(&indicators.bollinger.lower, "Bollinger lower")?;
        let sma20 = Self::required(&indicators.sma20, "SMA20")?;
        let sma50 = Self::required(&indicators.sma50, "SMA50")?;

        let mut signals = Vec::new();
        if let Some(signal) = self.analyze_rsi(rsi) {
            signals.push(signal);
        }
        if let Some(signal) = Self::analyze_macd(&indicators.macd) {
            signals.push(signal);
        }
        if let Some(signal) = Self::analyze_bollinger(price, upper, lower) {
            signals.push(signal);
        }
        if let Some(signal) = Self::analyze_moving_averages(price, sma20, sma50) {
            signals.push(signal);
        }

        if signals.is_empty() {
            signals.push(Signal::Hold);
        }
        debug!(symbol = %indicators.symbol, ?signals, "signals generated");
        Ok(signals)
    }

    fn required(series: &[Option<f64>], name: &str) -> Result<f64> {
        series.last().copied().flatten().ok_or_else(|| {
            EngineError::InsufficientHistory(format!("{name} still in warm-up window"))
        })
    }

    fn analyze_rsi(&self, rsi: f64) -> Option<Signal> {
        if rsi < self.config.rsi_oversold {
            Some(Signal::RsiOversold)
        } else if rsi > self.config.rsi_overbought {
            Some(Signal::RsiOverbought)
        } else {
            None
        }
    }

    /// Edge-triggered crossover: fires only on the exact step where the
    /// MACD/signal relation flips, never while it merely holds.
    fn analyze_macd(macd: &MacdSeries) -> Option<Signal> {
        let n = macd.macd_line.len();
        let (curr_macd, curr_sig) = (macd.macd_line[n - 1], macd.signal_line[n - 1]);
        let (prev_macd, prev_sig) = (macd.macd_line[n - 2], macd.signal_line[n - 2]);

        if curr_macd > curr_sig && prev_macd <= prev_sig {
            Some(Signal::MacdBullishCross)
        } else if curr_macd < curr_sig && prev_macd >= prev_sig {
            Some(Signal::MacdBearishCross)
        } else {
            None
        }
    }

    fn analyze_bollinger(price: f64, upper: f64, lower: f64) -> Option<Signal> {
        if price < lower {
            Some(Signal::PriceBelowLowerBand)
        } else if price > upper {
            Some(Signal::PriceAboveUpperBand)
        } else {
            None
        }
    }

    fn analyze_moving_averages(price: f64, sma20: f64, sma50: f64) -> Option<Signal> {
        if sma20 > sma50 && price > sma20 {
            Some(Signal::GoldenCross)
        } else if sma20 < sma50 && price < sma20 {
            Some(Signal::DeathCross)
        } else {
            None
        }
    }
}
