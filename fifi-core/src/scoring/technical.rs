//! Technical score from trend, RSI band and Bollinger band position.

use super::{clamp_unit, NEUTRAL_SCORE};
use crate::domain::PriceSeries;
use crate::indicators::{bollinger_bands, moving_average, relative_strength_index};
use serde::{Deserialize, Serialize};

pub const SHORT_MA_WINDOW: usize = 20;
pub const LONG_MA_WINDOW: usize = 50;
pub const RSI_WINDOW: usize = 14;
pub const BOLLINGER_WINDOW: usize = 20;
pub const BOLLINGER_NUM_STD: f64 = 2.0;

/// Sub-scores behind a technical score. A `None` sub-score could not be
/// computed from the available history and is left out of the mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalBreakdown {
    /// 1.0 when the short MA is above the long MA, else 0.0.
    pub trend: Option<f64>,
    /// Latest RSI reading.
    pub rsi: Option<f64>,
    /// Score derived from the RSI band.
    pub rsi_band: Option<f64>,
    /// 1 - position of the latest close within the Bollinger band, clamped.
    pub band_position: Option<f64>,
}

impl TechnicalBreakdown {
    /// Unweighted mean of the computed sub-scores, clamped to [0, 1].
    pub fn score(&self) -> f64 {
        let parts: Vec<f64> = [self.trend, self.rsi_band, self.band_position]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            return NEUTRAL_SCORE;
        }
        clamp_unit(parts.iter().sum::<f64>() / parts.len() as f64)
    }

    pub fn computed(&self) -> usize {
        [self.trend, self.rsi_band, self.band_position]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }
}

fn rsi_band_score(rsi: f64) -> f64 {
    if (40.0..=60.0).contains(&rsi) {
        0.5
    } else if rsi < 30.0 {
        0.8
    } else if rsi > 70.0 {
        0.2
    } else {
        0.6
    }
}

/// Sub-scores at the last point of `series`. Empty input yields an empty breakdown.
pub fn technical_breakdown(series: &PriceSeries) -> TechnicalBreakdown {
    let Some(latest) = series.last() else {
        return TechnicalBreakdown::default();
    };

    let short = moving_average(series, SHORT_MA_WINDOW).last().copied().flatten();
    let long = moving_average(series, LONG_MA_WINDOW).last().copied().flatten();
    let trend = match (short, long) {
        (Some(short), Some(long)) => Some(if short > long { 1.0 } else { 0.0 }),
        _ => None,
    };

    let rsi = relative_strength_index(series, RSI_WINDOW).last().copied();
    let rsi_band = rsi.map(rsi_band_score);

    let band_position = bollinger_bands(series, BOLLINGER_WINDOW, BOLLINGER_NUM_STD)
        .latest()
        .filter(|(lower, upper)| upper != lower)
        .map(|(lower, upper)| {
            let position = (latest.close - lower) / (upper - lower);
            clamp_unit(1.0 - position)
        });

    TechnicalBreakdown {
        trend,
        rsi,
        rsi_band,
        band_position,
    }
}

/// Technical score in [0, 1]; 0.5 for an empty series.
pub fn score_technical(series: &PriceSeries) -> f64 {
    if series.is_empty() {
        return NEUTRAL_SCORE;
    }
    technical_breakdown(series).score()
}
