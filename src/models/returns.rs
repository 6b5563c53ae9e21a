//! Periodic-return models for the summary table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary-table horizon. Offsets are trading observations, not calendar
/// days; YTD is anchored to the first observation of the current calendar
/// year instead of a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    WoW,
    MoM,
    QoQ,
    Ytd,
    YoY,
}

impl Period {
    pub const ALL: [Period; 5] = [Period::WoW, Period::MoM, Period::QoQ, Period::Ytd, Period::YoY];

    /// Lookback offset in trading observations; `None` for the
    /// calendar-anchored YTD.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Period::WoW => Some(5),
            Period::MoM => Some(20),
            Period::QoQ => Some(60),
            Period::YoY => Some(252),
            Period::Ytd => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::WoW => "WoW",
            Period::MoM => "MoM",
            Period::QoQ => "QoQ",
            Period::Ytd => "YTD",
            Period::YoY => "YoY",
        };
        f.write_str(s)
    }
}

/// How trustworthy a period return is.
///
/// `DegradedReference` means the history was shorter than the requested
/// offset and the earliest available point served as reference.
/// `Unavailable` means the lookup failed outright (empty input or zero
/// reference price); the percentage is reported as 0 so tables keep their
/// shape, but presentation should grey it out rather than assert a flat 0%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnQuality {
    Exact,
    DegradedReference,
    Unavailable,
}

/// Percentage change from a historically anchored reference price to the
/// latest price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodReturn {
    pub period: Period,
    pub pct: f64,
    pub quality: ReturnQuality,
}

/// Latest close against the previous close, for the metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyChange {
    pub abs: f64,
    pub pct: f64,
}
