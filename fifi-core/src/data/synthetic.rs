//! Fallback providers used when no real source is configured.

use super::provider::{DataError, MarketDataProvider, SentimentProvider};
use crate::domain::{NewsItem, PricePoint, PriceSeries};
use chrono::{DateTime, Duration, Utc};

/// Number of daily bars in the synthetic history.
pub const SYNTHETIC_DAYS: usize = 60;

/// Deterministic rising daily series ending at `anchor`.
///
/// Day d back from the anchor has close = 100 + 0.5·d, open = close - 0.5,
/// high = close + 1, low = close - 1, volume = 1000 + 10·d. Sorted ascending,
/// so the most recent bar carries the lowest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticPrices {
    anchor: Option<DateTime<Utc>>,
}

impl SyntheticPrices {
    /// Series ending today at midnight UTC.
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Series ending at a fixed instant (reproducible output).
    pub fn anchored(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }

    pub fn series(&self) -> PriceSeries {
        let anchor = self.anchor.unwrap_or_else(midnight_today);
        let points = (0..SYNTHETIC_DAYS)
            .map(|day| {
                let close = 100.0 + day as f64 * 0.5;
                PricePoint::new(
                    anchor - Duration::days(day as i64),
                    close - 0.5,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1000.0 + day as f64 * 10.0,
                )
            })
            .collect();
        PriceSeries::new(points)
    }
}

impl Default for SyntheticPrices {
    fn default() -> Self {
        Self::new()
    }
}

fn midnight_today() -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

impl MarketDataProvider for SyntheticPrices {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch_price_history(&self, _symbol: &str) -> Result<PriceSeries, DataError> {
        Ok(self.series())
    }
}

/// Returns a single neutral item for every symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeutralSentiment;

impl SentimentProvider for NeutralSentiment {
    fn name(&self) -> &str {
        "neutral"
    }

    fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, DataError> {
        Ok(vec![NewsItem::neutral(symbol)])
    }
}
