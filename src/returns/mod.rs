//! Period-return calculator for the summary table.
//!
//! Forgiving by design: a short history degrades to the earliest available
//! reference and a failed lookup reports 0% flagged `Unavailable`, so one
//! bad asset/period pair never aborts a batch.

use chrono::Datelike;
use tracing::warn;

use crate::models::{DailyChange, Period, PeriodReturn, PriceSeries, ReturnQuality};

/// Percentage change from a historically anchored reference to the latest
/// price of a lookback-scoped series.
///
/// Offset periods take the observation `offset` back from the end, falling
/// back to the earliest point (`DegradedReference`) when the history is
/// shorter. YTD anchors to the first observation of the latest point's
/// calendar year. A zero reference price yields 0% flagged `Unavailable`.
pub fn period_return(series: &PriceSeries, period: Period) -> PeriodReturn {
    let current = series.latest().close;

    let (reference, quality) = match period.offset() {
        Some(offset) => match series.nth_from_end(offset) {
            Some(point) => (point.close, ReturnQuality::Exact),
            None => (series.first().close, ReturnQuality::DegradedReference),
        },
        None => (ytd_anchor(series), ReturnQuality::Exact),
    };

    if reference == 0.0 {
        warn!(%period, "zero reference price, reporting unavailable return");
        return PeriodReturn {
            period,
            pct: 0.0,
            quality: ReturnQuality::Unavailable,
        };
    }

    if quality == ReturnQuality::DegradedReference {
        warn!(
            %period,
            available = series.len(),
            "history shorter than requested offset, using earliest point"
        );
    }

    PeriodReturn {
        period,
        pct: (current - reference) / reference * 100.0,
        quality,
    }
}

/// First close of the latest observation's calendar year. With a single
/// observation this year the anchor is the latest point itself (a complete,
/// if trivial, YTD window).
fn ytd_anchor(series: &PriceSeries) -> f64 {
    let year = series.latest().timestamp.year();
    series
        .points()
        .iter()
        .find(|p| p.timestamp.year() == year)
        .map(|p| p.close)
        .unwrap_or_else(|| series.latest().close)
}

/// Latest close against the previous close; `None` on a single-point series
/// or when the previous close is zero.
pub fn daily_change(series: &PriceSeries) -> Option<DailyChange> {
    let current = series.latest().close;
    let previous = series.nth_from_end(1)?.close;
    if previous == 0.0 {
        return None;
    }
    let abs = current - previous;
    Some(DailyChange {
        abs,
        pct: abs / previous * 100.0,
    })
}

/// Every observation as a percentage change from the first observation,
/// for the cross-asset comparison chart. Empty when the first close is zero.
pub fn normalized_series(series: &PriceSeries) -> Vec<f64> {
    let base = series.first().close;
    if base == 0.0 {
        return Vec::new();
    }
    series
        .points()
        .iter()
        .map(|p| (p.close / base - 1.0) * 100.0)
        .collect()
}
