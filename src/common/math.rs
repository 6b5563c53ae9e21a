//! Series-level numeric kernels for the indicator library.
//!
//! Every function returns a series aligned index-for-index with its input.
//! Indices without enough history are `None`; they are never silently zero.

/// Rolling simple mean over `window` values.
///
/// `out[i]` is the mean of `values[i+1-window..=i]`, `None` for the first
/// `window - 1` indices. A window longer than the series yields an
/// all-`None` series rather than an error.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = Some(sum / window as f64);
    }
    out
}

/// Rolling sample standard deviation over `window` values.
///
/// Sample (n-1) denominator. `None` for the first `window - 1` indices,
/// all-`None` when the series is shorter than the window. A window of 1
/// has no sample variance and also yields all-`None`.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window < 2 || values.len() < window {
        return out;
    }

    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        out[i] = Some(var.sqrt());
    }
    out
}

/// Exponential moving average with smoothing factor `2 / (span + 1)`,
/// seeded so that `out[0] == values[0]` (no bias adjustment).
///
/// Defined for every index, so the output is a plain series.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &v in &values[1..] {
        prev = ema_step(v, prev, alpha);
        out.push(prev);
    }
    out
}

/// Single EMA update step.
pub fn ema_step(value: f64, prev_ema: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * prev_ema
}
