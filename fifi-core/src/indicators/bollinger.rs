//! Bollinger Bands — moving average +/- a multiple of rolling standard deviation.
//!
//! - Middle: SMA(close, period)
//! - Upper: middle + mult * stddev(close, period)
//! - Lower: middle - mult * stddev(close, period)
//!
//! Uses sample stddev (divide by N - 1); a window of one point has no
//! deviation and yields no band.
//! Lookback: period - 1.

use super::Indicator;
use crate::domain::{PricePoint, PriceSeries};
use serde::{Deserialize, Serialize};

/// Which band of the Bollinger Bands to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Middle,
    Lower,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: f64, band: BollingerBand) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        let label = match band {
            BollingerBand::Upper => "upper",
            BollingerBand::Middle => "middle",
            BollingerBand::Lower => "lower",
        };
        Self {
            period,
            multiplier,
            band,
            name: format!("bollinger_{label}_{period}_{multiplier}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Upper)
    }

    pub fn middle(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Middle)
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Lower)
    }

    fn window_stats(window: &[PricePoint]) -> Option<(f64, f64)> {
        if window.len() < 2 || window.iter().any(|p| p.close.is_nan()) {
            return None;
        }
        let first = window[0].close;
        if window.iter().all(|p| p.close == first) {
            return Some((first, 0.0));
        }
        let n = window.len() as f64;
        let mean = window.iter().map(|p| p.close).sum::<f64>() / n;
        let variance = window
            .iter()
            .map(|p| {
                let diff = p.close - mean;
                diff * diff
            })
            .sum::<f64>()
            / (n - 1.0);
        Some((mean, variance.sqrt()))
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, points: &[PricePoint]) -> Vec<Option<f64>> {
        let n = points.len();
        let mut result = vec![None; n];

        if n < self.period {
            return result;
        }

        for i in (self.period - 1)..n {
            let window = &points[(i + 1 - self.period)..=i];
            result[i] = Self::window_stats(window).map(|(mean, stddev)| match self.band {
                BollingerBand::Middle => mean,
                BollingerBand::Upper => mean + self.multiplier * stddev,
                BollingerBand::Lower => mean - self.multiplier * stddev,
            });
        }

        result
    }
}

/// All three bands over a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

impl BollingerBands {
    /// `(lower, upper)` at the last position, if both are defined.
    pub fn latest(&self) -> Option<(f64, f64)> {
        match (self.lower.last(), self.upper.last()) {
            (Some(Some(lower)), Some(Some(upper))) => Some((*lower, *upper)),
            _ => None,
        }
    }
}

pub fn bollinger_bands(series: &PriceSeries, window: usize, num_std: f64) -> BollingerBands {
    let points = series.points();
    BollingerBands {
        middle: Bollinger::middle(window, num_std).compute(points),
        upper: Bollinger::upper(window, num_std).compute(points),
        lower: Bollinger::lower(window, num_std).compute(points),
    }
}
