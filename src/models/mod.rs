//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod returns;
pub mod series;
pub mod signal;

pub use indicators::{BollingerSeries, IndicatorSet, MacdSeries};
pub use returns::{DailyChange, Period, PeriodReturn, ReturnQuality};
pub use series::{PricePoint, PriceSeries};
pub use signal::{Signal, SignalDirection};
