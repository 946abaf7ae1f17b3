//! PricePoint and PriceSeries — the price history consumed by the indicator engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV observation at a single timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Price history sorted ascending by timestamp with unique timestamps.
///
/// Construction canonicalizes the input: a stable sort by timestamp, then
/// duplicate timestamps collapse to the last occurrence, so a later revision
/// of the same bar replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);

        let mut canonical: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match canonical.last_mut() {
                Some(last) if last.timestamp == point.timestamp => *last = point,
                _ => canonical.push(point),
            }
        }

        Self { points: canonical }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(day: u32, close: f64) -> PricePoint {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        PricePoint::new(ts, close, close + 1.0, close - 1.0, close, 1000.0)
    }

    #[test]
    fn series_sorts_by_timestamp() {
        let series = PriceSeries::new(vec![point(3, 103.0), point(1, 101.0), point(2, 102.0)]);
        assert_eq!(series.closes(), vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn duplicate_timestamp_keeps_last_occurrence() {
        let series = PriceSeries::new(vec![point(1, 100.0), point(2, 101.0), point(2, 105.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().close, 105.0);
    }

    #[test]
    fn empty_series() {
        let series = PriceSeries::empty();
        assert!(series.is_empty());
        assert!(series.last().is_none());
    }

    #[test]
    fn series_serialization_roundtrip() {
        let series = PriceSeries::new(vec![point(2, 101.0), point(1, 100.0)]);
        let json = serde_json::to_string(&series).unwrap();
        let deser: PriceSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deser);
    }
}
