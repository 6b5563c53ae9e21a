//! Unit tests for the rule-based signal generator

use chrono::{Duration, TimeZone, Utc};

use assetpulse::config::EngineConfig;
use assetpulse::error::EngineError;
use assetpulse::models::{
    BollingerSeries, IndicatorSet, MacdSeries, PricePoint, PriceSeries, Signal,
};
use assetpulse::signals::SignalGenerator;

fn price_series(prices: &[f64]) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(start + Duration::days(i as i64), p))
        .collect();
    PriceSeries::new(points).unwrap()
}

/// Two-point indicator set where no rule fires against a price of 100.
fn neutral_set() -> IndicatorSet {
    IndicatorSet {
        symbol: "TEST".to_string(),
        rsi: vec![None, Some(50.0)],
        macd: MacdSeries {
            macd_line: vec![0.0, 0.0],
            signal_line: vec![0.0, 0.0],
            periods: Some((12, 26, 9)),
        },
        bollinger: BollingerSeries {
            upper: vec![None, Some(200.0)],
            middle: vec![None, Some(100.0)],
            lower: vec![None, Some(1.0)],
            window: 20,
            num_std: 2.0,
        },
        sma20: vec![None, Some(100.0)],
        sma50: vec![None, Some(100.0)],
    }
}

fn generator() -> SignalGenerator {
    SignalGenerator::new(EngineConfig::default())
}

#[test]
fn test_hold_fallback_when_nothing_fires() {
    let signals = generator()
        .generate(&neutral_set(), &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::Hold]);
}

#[test]
fn test_rsi_oversold() {
    let mut set = neutral_set();
    set.rsi = vec![None, Some(25.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::RsiOversold]);
}

#[test]
fn test_rsi_overbought() {
    let mut set = neutral_set();
    set.rsi = vec![None, Some(82.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::RsiOverbought]);
}

#[test]
fn test_rsi_thresholds_are_exclusive() {
    // Exactly 30 and exactly 70 are neutral; the comparisons are strict.
    for boundary in [30.0, 70.0] {
        let mut set = neutral_set();
        set.rsi = vec![None, Some(boundary)];
        let signals = generator()
            .generate(&set, &price_series(&[100.0, 100.0]))
            .unwrap();
        assert_eq!(signals, vec![Signal::Hold]);
    }
}

#[test]
fn test_macd_bullish_cross_is_edge_triggered() {
    let mut set = neutral_set();
    set.macd.macd_line = vec![-0.5, 0.5];
    set.macd.signal_line = vec![0.0, 0.0];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::MacdBullishCross]);

    // Same relation held on both steps: no flip, no signal.
    set.macd.macd_line = vec![0.5, 0.6];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::Hold]);
}

#[test]
fn test_macd_bearish_cross() {
    let mut set = neutral_set();
    set.macd.macd_line = vec![0.5, -0.5];
    set.macd.signal_line = vec![0.0, 0.0];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::MacdBearishCross]);
}

#[test]
fn test_macd_crosses_are_mutually_exclusive() {
    // Whatever the two-step values, at most one cross can fire.
    let cases = [
        (vec![-0.5, 0.5], vec![0.0, 0.0]),
        (vec![0.5, -0.5], vec![0.0, 0.0]),
        (vec![0.0, 0.0], vec![0.0, 0.0]),
        (vec![-0.1, 0.1], vec![0.1, -0.1]),
    ];
    for (macd_line, signal_line) in cases {
        let mut set = neutral_set();
        set.macd.macd_line = macd_line;
        set.macd.signal_line = signal_line;
        let signals = generator()
            .generate(&set, &price_series(&[100.0, 100.0]))
            .unwrap();
        let bullish = signals.contains(&Signal::MacdBullishCross);
        let bearish = signals.contains(&Signal::MacdBearishCross);
        assert!(!(bullish && bearish));
    }
}

#[test]
fn test_price_below_lower_band() {
    let mut set = neutral_set();
    set.bollinger.lower = vec![None, Some(105.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::PriceBelowLowerBand]);
}

#[test]
fn test_price_above_upper_band() {
    let mut set = neutral_set();
    set.bollinger.upper = vec![None, Some(95.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::PriceAboveUpperBand]);
}

#[test]
fn test_golden_cross_needs_price_confirmation() {
    let mut set = neutral_set();
    set.sma20 = vec![None, Some(98.0)];
    set.sma50 = vec![None, Some(95.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::GoldenCross]);

    // SMA20 above SMA50 but price below SMA20: no regime signal.
    set.sma20 = vec![None, Some(102.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::Hold]);
}

#[test]
fn test_death_cross() {
    let mut set = neutral_set();
    set.sma20 = vec![None, Some(102.0)];
    set.sma50 = vec![None, Some(105.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(signals, vec![Signal::DeathCross]);
}

#[test]
fn test_category_ordering_is_fixed() {
    // Fire every category at once: RSI, MACD, Bollinger, moving averages.
    let mut set = neutral_set();
    set.rsi = vec![None, Some(25.0)];
    set.macd.macd_line = vec![-0.5, 0.5];
    set.bollinger.lower = vec![None, Some(105.0)];
    set.sma20 = vec![None, Some(98.0)];
    set.sma50 = vec![None, Some(95.0)];
    let signals = generator()
        .generate(&set, &price_series(&[100.0, 100.0]))
        .unwrap();
    assert_eq!(
        signals,
        vec![
            Signal::RsiOversold,
            Signal::MacdBullishCross,
            Signal::PriceBelowLowerBand,
            Signal::GoldenCross,
        ]
    );
}

#[test]
fn test_deterministic_across_runs() {
    let mut set = neutral_set();
    set.rsi = vec![None, Some(25.0)];
    set.macd.macd_line = vec![-0.5, 0.5];
    let series = price_series(&[100.0, 100.0]);
    let sig_gen = generator();
    let first = sig_gen.generate(&set, &series).unwrap();
    let second = sig_gen.generate(&set, &series).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_insufficient_history_when_indicator_in_warmup() {
    let mut set = neutral_set();
    set.rsi = vec![None, None];
    let result = generator().generate(&set, &price_series(&[100.0, 100.0]));
    assert!(matches!(result, Err(EngineError::InsufficientHistory(_))));
}

#[test]
fn test_single_point_series_is_insufficient() {
    let set = IndicatorSet {
        symbol: "TEST".to_string(),
        rsi: vec![Some(50.0)],
        macd: MacdSeries {
            macd_line: vec![0.0],
            signal_line: vec![0.0],
            periods: None,
        },
        bollinger: BollingerSeries {
            upper: vec![Some(200.0)],
            middle: vec![Some(100.0)],
            lower: vec![Some(1.0)],
            window: 20,
            num_std: 2.0,
        },
        sma20: vec![Some(100.0)],
        sma50: vec![Some(100.0)],
    };
    let result = generator().generate(&set, &price_series(&[100.0]));
    assert!(matches!(result, Err(EngineError::InsufficientHistory(_))));
}

#[test]
fn test_length_mismatch_is_invalid() {
    let set = neutral_set();
    let result = generator().generate(&set, &price_series(&[100.0, 100.0, 100.0]));
    assert!(matches!(result, Err(EngineError::InvalidInput(_))));
}
