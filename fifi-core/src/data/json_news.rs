//! JSON news import.
//!
//! Reads `<dir>/<SYMBOL>.json`: an array of news items. Sentiment values are
//! clamped into [-1, 1] on the way in; non-finite values are rejected.

use super::provider::{open_symbol_file, symbol_path, DataError, SentimentProvider};
use crate::domain::NewsItem;
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn read_news_json<R: Read>(reader: R) -> Result<Vec<NewsItem>, DataError> {
    let mut items: Vec<NewsItem> = serde_json::from_reader(reader)?;
    for item in &mut items {
        if !item.sentiment.is_finite() {
            return Err(DataError::Parse(format!(
                "non-finite sentiment for '{}'",
                item.title
            )));
        }
        item.sentiment = item.sentiment.clamp(-1.0, 1.0);
    }
    Ok(items)
}

/// File-backed news provider rooted at a directory of per-symbol JSON files.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNewsProvider {
    dir: PathBuf,
}

impl JsonNewsProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SentimentProvider for JsonNewsProvider {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, DataError> {
        let path = symbol_path(&self.dir, symbol, "json");
        read_news_json(open_symbol_file(&path, symbol)?)
    }
}
