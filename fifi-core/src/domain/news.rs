//! News articles with a pre-normalized sentiment scalar.

use serde::{Deserialize, Serialize};

/// A single article. `sentiment` is in [-1, 1]; normalizing raw provider
/// values into that range is the provider's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub sentiment: f64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, sentiment: f64) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            sentiment,
            source: String::new(),
            url: String::new(),
        }
    }

    /// Placeholder item emitted when no sentiment source is configured.
    pub fn neutral(symbol: &str) -> Self {
        Self {
            title: format!("Neutral sentiment for {symbol}"),
            summary: "Configure a news source to get live sentiment.".to_string(),
            sentiment: 0.0,
            source: "mock".to_string(),
            url: String::new(),
        }
    }
}
