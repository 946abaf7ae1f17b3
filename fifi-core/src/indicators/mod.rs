//! Technical indicators over a price history.
//!
//! Indicators are pure functions: price history in, a series of the same
//! length out. Positions without enough history are `None`. No value at
//! index t may depend on a price after t.

pub mod bollinger;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger_bands, Bollinger, BollingerBand, BollingerBands};
pub use rsi::{relative_strength_index, Rsi, NEUTRAL_RSI};
pub use sma::{moving_average, Sma};

use crate::domain::PricePoint;

/// Trait for indicators.
///
/// `compute` returns a `Vec<Option<f64>>` of the same length as `points`.
/// The first `lookback()` values are `None` (warmup).
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of points needed before the indicator produces a value.
    fn lookback(&self) -> usize;

    fn compute(&self, points: &[PricePoint]) -> Vec<Option<f64>>;
}

/// Create a synthetic daily series from close prices for testing.
///
/// open = prev close (or close for the first point), high/low = max/min(open, close) ± 1.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    use chrono::{Duration, TimeZone, Utc};

    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PricePoint::new(
                base + Duration::days(i as i64),
                open,
                open.max(close) + 1.0,
                open.min(close) - 1.0,
                close,
                1000.0,
            )
        })
        .collect();
    crate::domain::PriceSeries::new(points)
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
