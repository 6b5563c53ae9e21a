//! Engine parameters and environment detection.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the indicator library and signal rules.
///
/// The defaults are the conventional settings the dashboard runs with;
/// tests override individual fields where a scenario needs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rsi_period: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_num_std: f64,
    pub sma_short: usize,
    pub sma_long: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_num_std: 2.0,
            sma_short: 20,
            sma_long: 50,
        }
    }
}

/// Current runtime environment, from `APP_ENV` (via `.env` when present).
/// Defaults to `development`.
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}
