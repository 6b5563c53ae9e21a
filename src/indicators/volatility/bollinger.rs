//! Bollinger Bands indicator

use crate::common::math;
use crate::error::{EngineError, Result};
use crate::models::BollingerSeries;

/// Calculate the Bollinger band series.
///
/// Middle = SMA(window)
/// Upper  = Middle + num_std * rolling sample std dev
/// Lower  = Middle - num_std * rolling sample std dev
///
/// Undefined (`None`) for the first `window - 1` indices; a window longer
/// than the series yields fully undefined bands rather than an error.
/// For `num_std >= 0`, upper >= middle >= lower at every defined index.
pub fn bollinger_series(closes: &[f64], window: usize, num_std: f64) -> Result<BollingerSeries> {
    if closes.is_empty() {
        return Err(EngineError::InvalidInput("empty price series".to_string()));
    }
    if window < 2 {
        return Err(EngineError::InvalidInput(
            "Bollinger window must be at least 2".to_string(),
        ));
    }

    let middle = math::rolling_mean(closes, window);
    let std = math::rolling_std(closes, window);

    let upper: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + num_std * s),
            _ => None,
        })
        .collect();
    let lower: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - num_std * s),
            _ => None,
        })
        .collect();

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
        window,
        num_std,
    })
}
