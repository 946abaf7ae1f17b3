//! Data providers: offline price and news sources behind capability traits.

pub mod csv_prices;
pub mod derived;
pub mod factory;
pub mod json_news;
pub mod provider;
pub mod synthetic;

pub use csv_prices::{read_price_csv, CsvPriceProvider};
pub use derived::derive_fundamentals;
pub use factory::{build_market_provider, build_sentiment_provider, MarketDataSource, SentimentSource};
pub use json_news::{read_news_json, JsonNewsProvider};
pub use provider::{DataError, MarketDataProvider, SentimentProvider};
pub use synthetic::{NeutralSentiment, SyntheticPrices};

use crate::analysis::AnalysisInput;
use crate::domain::{FundamentalSnapshot, PriceSeries};
use crate::observe::{AnalysisObserver, Component};

/// Gathers an [`AnalysisInput`] for `symbol`.
///
/// Fetch failures never abort: a failed price fetch yields an empty series
/// and a failed news fetch an empty collection, each reported to the
/// observer. Without a supplied snapshot the fundamentals are derived from
/// the prices.
pub fn load_input(
    symbol: &str,
    market: &MarketDataSource,
    news: &SentimentSource,
    fundamentals: Option<FundamentalSnapshot>,
    observer: &dyn AnalysisObserver,
) -> AnalysisInput {
    if market.is_fallback() {
        observer.on_fallback(symbol, Component::MarketData, "using synthetic price history");
    }
    let prices = market.fetch_price_history(symbol).unwrap_or_else(|err| {
        observer.on_fallback(symbol, Component::MarketData, &err.to_string());
        PriceSeries::empty()
    });

    if news.is_fallback() {
        observer.on_fallback(symbol, Component::News, "no news source configured");
    }
    let news = news.fetch_news(symbol).unwrap_or_else(|err| {
        observer.on_fallback(symbol, Component::News, &err.to_string());
        Vec::new()
    });

    let fundamentals = fundamentals.unwrap_or_else(|| derive_fundamentals(symbol, &prices));

    AnalysisInput {
        symbol: symbol.to_string(),
        prices,
        fundamentals,
        news,
    }
}
