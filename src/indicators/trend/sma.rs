//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::error::{EngineError, Result};

/// Calculate the SMA series over `window` observations.
///
/// Undefined (`None`) for the first `window - 1` indices. A window longer
/// than the series yields a fully undefined series, not an error, so a
/// short history degrades instead of aborting the whole indicator set.
pub fn sma_series(closes: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    if closes.is_empty() {
        return Err(EngineError::InvalidInput("empty price series".to_string()));
    }
    if window == 0 {
        return Err(EngineError::InvalidInput("SMA window must be positive".to_string()));
    }
    Ok(math::rolling_mean(closes, window))
}
