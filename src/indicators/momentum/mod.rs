//! Momentum indicators.

pub mod macd;
pub mod rsi;

pub use macd::macd_series;
pub use rsi::rsi_series;
