//! Relative Strength Index (RSI).
//!
//! Per-step close deltas are split into up-moves and down-moves; each is
//! averaged over the trailing `period` deltas.
//! RSI = 100 - 100 / (1 + mean_up / mean_down)
//! Lookback: period (first value at index period).
//! Edge cases: mean_down == 0 with mean_up > 0 → 100; both zero → 50.

use super::Indicator;
use crate::domain::{PricePoint, PriceSeries};

/// Fallback reading for flat or insufficient history.
pub const NEUTRAL_RSI: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, points: &[PricePoint]) -> Vec<Option<f64>> {
        let n = points.len();
        let mut result = vec![None; n];

        if n < self.period + 1 {
            return result;
        }

        // changes[i] = close[i] - close[i-1]; changes[0] has no predecessor.
        let mut changes = vec![f64::NAN; n];
        for i in 1..n {
            changes[i] = points[i].close - points[i - 1].close;
        }

        for i in self.period..n {
            let window = &changes[(i + 1 - self.period)..=i];
            if window.iter().any(|ch| ch.is_nan()) {
                continue;
            }
            let up: f64 = window.iter().map(|&ch| ch.max(0.0)).sum();
            let down: f64 = window.iter().map(|&ch| (-ch).max(0.0)).sum();
            let period = self.period as f64;
            result[i] = Some(compute_rsi(up / period, down / period));
        }

        result
    }
}

fn compute_rsi(mean_up: f64, mean_down: f64) -> f64 {
    if mean_down == 0.0 && mean_up == 0.0 {
        NEUTRAL_RSI
    } else if mean_down == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + mean_up / mean_down)
    }
}

/// RSI at every position of `series`; positions without a reading fall
/// back to [`NEUTRAL_RSI`], so the output never contains NaN.
pub fn relative_strength_index(series: &PriceSeries, window: usize) -> Vec<f64> {
    Rsi::new(window)
        .compute(series.points())
        .into_iter()
        .map(|v| v.unwrap_or(NEUTRAL_RSI))
        .collect()
}
