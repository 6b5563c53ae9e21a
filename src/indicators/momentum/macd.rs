//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::error::{EngineError, Result};
use crate::models::MacdSeries;

/// Calculate the MACD line and its signal line.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(MACD, signal span)
///
/// EMAs are seeded so the first value equals the first price, which makes
/// both output lines total over the input; they only carry meaning once
/// roughly `slow` observations have passed.
pub fn macd_series(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries> {
    if closes.is_empty() {
        return Err(EngineError::InvalidInput("empty price series".to_string()));
    }
    if fast == 0 || slow == 0 || signal == 0 {
        return Err(EngineError::InvalidInput("MACD spans must be positive".to_string()));
    }

    let fast_ema = math::ema_series(closes, fast);
    let slow_ema = math::ema_series(closes, slow);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = math::ema_series(&macd_line, signal);

    Ok(MacdSeries {
        macd_line,
        signal_line,
        periods: Some((fast, slow, signal)),
    })
}
