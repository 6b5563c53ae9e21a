//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::error::{EngineError, Result};

/// Calculate the RSI series.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = rolling mean gain / rolling mean loss over `period` deltas
///
/// Undefined (`None`) for the first `period` indices: the delta series
/// starts one point late and then needs a full window.
///
/// Zero-loss convention: when the rolling mean loss is 0 over the window
/// (every step flat or up), RS is undefined and RSI saturates to 100.0.
pub fn rsi_series(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if closes.is_empty() {
        return Err(EngineError::InvalidInput("empty price series".to_string()));
    }
    if period == 0 {
        return Err(EngineError::InvalidInput("RSI period must be positive".to_string()));
    }

    let mut gains = Vec::with_capacity(closes.len().saturating_sub(1));
    let mut losses = Vec::with_capacity(closes.len().saturating_sub(1));
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let mean_gain = math::rolling_mean(&gains, period);
    let mean_loss = math::rolling_mean(&losses, period);

    // Re-align from delta index back to price index.
    let mut out = vec![None; closes.len()];
    for i in (period - 1)..gains.len() {
        let (avg_gain, avg_loss) = match (mean_gain[i], mean_loss[i]) {
            (Some(g), Some(l)) => (g, l),
            _ => continue,
        };
        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        out[i + 1] = Some(rsi);
    }
    Ok(out)
}
