//! Provider selection.
//!
//! A file-backed source is used when its directory is configured; otherwise
//! the fallback variant is chosen.

use super::csv_prices::CsvPriceProvider;
use super::json_news::JsonNewsProvider;
use super::provider::{DataError, MarketDataProvider, SentimentProvider};
use super::synthetic::{NeutralSentiment, SyntheticPrices};
use crate::config::ProviderSettings;
use crate::domain::{NewsItem, PriceSeries};

#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataSource {
    Csv(CsvPriceProvider),
    Synthetic(SyntheticPrices),
}

impl MarketDataSource {
    /// True for the synthetic stand-in.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }
}

impl MarketDataProvider for MarketDataSource {
    fn name(&self) -> &str {
        match self {
            Self::Csv(p) => p.name(),
            Self::Synthetic(p) => p.name(),
        }
    }

    fn fetch_price_history(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        match self {
            Self::Csv(p) => p.fetch_price_history(symbol),
            Self::Synthetic(p) => p.fetch_price_history(symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentimentSource {
    Json(JsonNewsProvider),
    Neutral(NeutralSentiment),
}

impl SentimentSource {
    /// True for the neutral stand-in.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Neutral(_))
    }
}

impl SentimentProvider for SentimentSource {
    fn name(&self) -> &str {
        match self {
            Self::Json(p) => p.name(),
            Self::Neutral(p) => p.name(),
        }
    }

    fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, DataError> {
        match self {
            Self::Json(p) => p.fetch_news(symbol),
            Self::Neutral(p) => p.fetch_news(symbol),
        }
    }
}

pub fn build_market_provider(settings: &ProviderSettings) -> MarketDataSource {
    match &settings.price_dir {
        Some(dir) => MarketDataSource::Csv(CsvPriceProvider::new(dir.clone())),
        None => MarketDataSource::Synthetic(SyntheticPrices::new()),
    }
}

pub fn build_sentiment_provider(settings: &ProviderSettings) -> SentimentSource {
    match &settings.news_dir {
        Some(dir) => SentimentSource::Json(JsonNewsProvider::new(dir.clone())),
        None => SentimentSource::Neutral(NeutralSentiment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unconfigured_settings_select_fallbacks() {
        let settings = ProviderSettings::default();
        assert!(build_market_provider(&settings).is_fallback());
        assert!(build_sentiment_provider(&settings).is_fallback());
        assert_eq!(build_market_provider(&settings).name(), "synthetic");
        assert_eq!(build_sentiment_provider(&settings).name(), "neutral");
    }

    #[test]
    fn configured_dirs_select_file_sources() {
        let settings = ProviderSettings {
            price_dir: Some(PathBuf::from("prices")),
            news_dir: Some(PathBuf::from("news")),
        };
        assert_eq!(
            build_market_provider(&settings),
            MarketDataSource::Csv(CsvPriceProvider::new("prices"))
        );
        assert_eq!(build_sentiment_provider(&settings).name(), "json");
    }
}
