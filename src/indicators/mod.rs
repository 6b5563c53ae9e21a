//! Indicator library: deterministic numeric transforms of a price series.
//!
//! Every function is pure and returns series aligned index-for-index with
//! its input; warm-up indices are `None`.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{macd_series, rsi_series};
pub use trend::sma_series;
pub use volatility::bollinger_series;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{IndicatorSet, PriceSeries};

/// Compute the full indicator bundle for one symbol.
pub fn compute_indicator_set(
    symbol: &str,
    series: &PriceSeries,
    config: &EngineConfig,
) -> Result<IndicatorSet> {
    let closes = series.closes();

    Ok(IndicatorSet {
        symbol: symbol.to_string(),
        rsi: rsi_series(&closes, config.rsi_period)?,
        macd: macd_series(&closes, config.macd_fast, config.macd_slow, config.macd_signal)?,
        bollinger: bollinger_series(&closes, config.bollinger_window, config.bollinger_num_std)?,
        sma20: sma_series(&closes, config.sma_short)?,
        sma50: sma_series(&closes, config.sma_long)?,
    })
}
