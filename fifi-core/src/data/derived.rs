//! Proxy fundamentals derived from price history.
//!
//! Used when no fundamentals source is available: the valuation ratios are
//! fixed near their ideals and growth is approximated by the price change
//! over the most recent 60 closes.

use crate::domain::{FundamentalSnapshot, PriceSeries};

/// Closes considered for the growth proxy.
pub const GROWTH_LOOKBACK: usize = 60;

pub const PROXY_PE_RATIO: f64 = 20.0;
pub const PROXY_PEG_RATIO: f64 = 1.1;
pub const PROXY_DEBT_TO_EQUITY: f64 = 0.6;

/// Earnings growth is taken as this fraction of the price growth.
pub const EARNINGS_GROWTH_FACTOR: f64 = 0.8;

/// Builds a proxy snapshot; an empty series yields a snapshot with no metrics.
pub fn derive_fundamentals(symbol: &str, prices: &PriceSeries) -> FundamentalSnapshot {
    let points = prices.points();
    if points.is_empty() {
        return FundamentalSnapshot::new(symbol);
    }

    let recent = &points[points.len().saturating_sub(GROWTH_LOOKBACK)..];
    let growth = match (recent.first(), recent.last()) {
        (Some(first), Some(last)) if recent.len() > 1 => (last.close / first.close - 1.0) * 100.0,
        _ => 0.0,
    };

    FundamentalSnapshot::new(symbol)
        .with_pe_ratio(PROXY_PE_RATIO)
        .with_peg_ratio(PROXY_PEG_RATIO)
        .with_debt_to_equity(PROXY_DEBT_TO_EQUITY)
        .with_revenue_growth_pct(growth)
        .with_earnings_growth_pct(growth * EARNINGS_GROWTH_FACTOR)
}
