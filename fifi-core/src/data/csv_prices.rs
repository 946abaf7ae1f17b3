//! CSV price import.
//!
//! Reads `<dir>/<SYMBOL>.csv` with the header
//! `timestamp,open,high,low,close,volume`. Timestamps are RFC 3339 or a bare
//! `YYYY-MM-DD` date (midnight UTC).

use super::provider::{open_symbol_file, symbol_path, DataError, MarketDataProvider};
use crate::domain::{PricePoint, PriceSeries};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DataError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| DataError::Parse(format!("unrecognized timestamp '{raw}'")))
}

/// Parses CSV rows into a canonical series (sorted, duplicates collapsed).
pub fn read_price_csv<R: Read>(reader: R) -> Result<PriceSeries, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut points = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        let row = row?;
        points.push(PricePoint::new(
            parse_timestamp(&row.timestamp)?,
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume,
        ));
    }
    Ok(PriceSeries::new(points))
}

/// File-backed price provider rooted at a directory of per-symbol CSV files.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvPriceProvider {
    dir: PathBuf,
}

impl CsvPriceProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MarketDataProvider for CsvPriceProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch_price_history(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let path = symbol_path(&self.dir, symbol, "csv");
        read_price_csv(open_symbol_file(&path, symbol)?)
    }
}
