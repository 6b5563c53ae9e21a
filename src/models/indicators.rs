use serde::{Deserialize, Serialize};

/// MACD line and its smoothed signal line, aligned with the source series.
///
/// Under the seeded-EMA convention (`ema[0] == close[0]`) both lines are
/// defined from index 0, so they carry plain values rather than options.
/// They are only meaningful once the slow EMA has seen a full span of data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<(usize, usize, usize)>,
}

/// Bollinger band triple, aligned with the source series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    pub window: usize,
    pub num_std: f64,
}

/// Derived indicator series for one symbol.
///
/// Invariant: every contained series has the same length as the source
/// `PriceSeries`; warm-up indices are `None`, never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub rsi: Vec<Option<f64>>,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
    pub sma20: Vec<Option<f64>>,
    pub sma50: Vec<Option<f64>>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }
}
