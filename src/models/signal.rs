//! Discrete trading signals emitted by the rule engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional reading of a signal, for colorized presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// One discrete signal for one asset, evaluated at the latest observation.
///
/// A signal list is ordered by rule category (RSI, MACD, Bollinger, moving
/// averages) and is never empty: `Hold` is the fallback when no rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    RsiOversold,
    RsiOverbought,
    MacdBullishCross,
    MacdBearishCross,
    PriceBelowLowerBand,
    PriceAboveUpperBand,
    GoldenCross,
    DeathCross,
    Hold,
}

impl Signal {
    pub fn direction(&self) -> SignalDirection {
        match self {
            Signal::RsiOversold
            | Signal::MacdBullishCross
            | Signal::PriceBelowLowerBand
            | Signal::GoldenCross => SignalDirection::Bullish,
            Signal::RsiOverbought
            | Signal::MacdBearishCross
            | Signal::PriceAboveUpperBand
            | Signal::DeathCross => SignalDirection::Bearish,
            Signal::Hold => SignalDirection::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Signal::RsiOversold => "RSI oversold - potential buy",
            Signal::RsiOverbought => "RSI overbought - potential sell",
            Signal::MacdBullishCross => "MACD bullish crossover",
            Signal::MacdBearishCross => "MACD bearish crossover",
            Signal::PriceBelowLowerBand => "Price below lower Bollinger band",
            Signal::PriceAboveUpperBand => "Price above upper Bollinger band",
            Signal::GoldenCross => "Golden cross - uptrend",
            Signal::DeathCross => "Death cross - downtrend",
            Signal::Hold => "Hold - no clear signal",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
