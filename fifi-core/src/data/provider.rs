//! Provider capability traits and structured error types.
//!
//! Providers supply already-parsed records to the engine. Each trait has a
//! small closed set of implementations, wrapped in an enum and chosen by a
//! factory in `data::factory`.

use crate::domain::{NewsItem, PriceSeries};
use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },
}

/// Supplies a price history sorted ascending by timestamp.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn fetch_price_history(&self, symbol: &str) -> Result<PriceSeries, DataError>;
}

/// Supplies news items whose sentiment is already in [-1, 1].
pub trait SentimentProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, DataError>;
}

/// Where a symbol's file lives inside a provider directory.
pub(crate) fn symbol_path(dir: &std::path::Path, symbol: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", symbol.to_uppercase()))
}

/// Opens a symbol file, mapping a missing file to `SymbolNotFound`.
pub(crate) fn open_symbol_file(path: &std::path::Path, symbol: &str) -> Result<std::fs::File, DataError> {
    std::fs::File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            }
        } else {
            DataError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
