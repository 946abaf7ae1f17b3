//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of the trailing `period` closes.
//! Lookback: period - 1 (first value at index period-1).

use super::Indicator;
use crate::domain::{PricePoint, PriceSeries};

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
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

        // Rolling sum over finite closes; a NaN anywhere in the window voids it.
        // A window of identical closes yields that close exactly, free of the
        // rounding the running sum accumulates.
        let mut sum = 0.0;
        let mut nan_count = 0usize;
        let mut flat_run = 0usize;
        for (i, point) in points.iter().enumerate() {
            flat_run = match i.checked_sub(1) {
                Some(prev) if points[prev].close == point.close => flat_run + 1,
                _ => 1,
            };

            if point.close.is_nan() {
                nan_count += 1;
            } else {
                sum += point.close;
            }

            if i >= self.period {
                let leaving = points[i - self.period].close;
                if leaving.is_nan() {
                    nan_count -= 1;
                } else {
                    sum -= leaving;
                }
            }

            if i + 1 >= self.period && nan_count == 0 {
                result[i] = Some(if flat_run >= self.period {
                    point.close
                } else {
                    sum / self.period as f64
                });
            }
        }

        result
    }
}

/// Trailing mean of `window` closes at every position of `series`.
pub fn moving_average(series: &PriceSeries, window: usize) -> Vec<Option<f64>> {
    Sma::new(window).compute(series.points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
        let result = moving_average(&series, 5);

        assert_eq!(result.len(), 7);
        for (i, v) in result.iter().enumerate().take(4) {
            assert!(v.is_none(), "expected None at index {i}");
        }
        // SMA[4] = mean(10,11,12,13,14) = 12.0
        assert_approx(result[4].unwrap(), 12.0, DEFAULT_EPSILON);
        assert_approx(result[5].unwrap(), 13.0, DEFAULT_EPSILON);
        assert_approx(result[6].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_close() {
        let series = make_series(&[100.0, 200.0, 300.0]);
        let result = moving_average(&series, 1);
        assert_eq!(result, vec![Some(100.0), Some(200.0), Some(300.0)]);
    }

    #[test]
    fn sma_nan_voids_window() {
        let mut points = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0])
            .points()
            .to_vec();
        points[2].close = f64::NAN;
        let result = Sma::new(3).compute(&points);
        assert!(result[2].is_none());
        assert!(result[3].is_none());
        assert!(result[4].is_none());
        // Window [13,14,15]
        assert_approx(result[5].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_flat_window_is_exact() {
        for level in [0.1, 0.3, 19.99, 123.45] {
            let series = make_series(&[level; 60]);
            let short = moving_average(&series, 20);
            let long = moving_average(&series, 50);
            assert_eq!(short[59], Some(level), "sma_20 at level {level}");
            assert_eq!(long[59], Some(level), "sma_50 at level {level}");
        }
    }

    #[test]
    fn sma_leaves_flat_stretch() {
        let mut closes = vec![0.1; 5];
        closes.push(0.4);
        let result = moving_average(&make_series(&closes), 3);
        assert_eq!(result[4], Some(0.1));
        assert_approx(result[5].unwrap(), 0.2, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_lookback() {
        assert_eq!(Sma::new(20).lookback(), 19);
        assert_eq!(Sma::new(1).lookback(), 0);
        assert_eq!(Sma::new(50).name(), "sma_50");
    }

    #[test]
    fn sma_too_few_points() {
        let series = make_series(&[10.0, 11.0]);
        assert!(moving_average(&series, 5).iter().all(Option::is_none));
    }
}
