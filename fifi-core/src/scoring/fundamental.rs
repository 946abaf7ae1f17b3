//! Fundamental score from valuation, leverage and growth metrics.

use super::{clamp_unit, NEUTRAL_SCORE};
use crate::domain::FundamentalSnapshot;

/// Closeness-to-ideal target for a ratio: full credit at `ideal`, zero once
/// the value is `tolerance` away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTarget {
    pub ideal: f64,
    pub tolerance: f64,
}

impl RatioTarget {
    pub const fn new(ideal: f64, tolerance: f64) -> Self {
        Self { ideal, tolerance }
    }

    pub fn score(&self, value: f64) -> f64 {
        (1.0 - (value - self.ideal).abs() / self.tolerance).max(0.0)
    }
}

pub const PE_TARGET: RatioTarget = RatioTarget::new(20.0, 15.0);
pub const PEG_TARGET: RatioTarget = RatioTarget::new(1.0, 1.0);
pub const DEBT_TO_EQUITY_TARGET: RatioTarget = RatioTarget::new(0.5, 0.7);

/// Growth percentage that earns full credit.
pub const FULL_CREDIT_GROWTH_PCT: f64 = 20.0;

/// Growth contribution, capped at 1 but not floored: shrinking revenue or
/// earnings pulls the average down.
fn growth_score(growth_pct: f64) -> f64 {
    (growth_pct / FULL_CREDIT_GROWTH_PCT).min(1.0)
}

/// Mean contribution over the present metrics, clamped to [0, 1].
/// Returns 0.5 when no metric is present.
pub fn score_fundamentals(snapshot: &FundamentalSnapshot) -> f64 {
    let ratios = [
        (snapshot.pe_ratio, PE_TARGET),
        (snapshot.peg_ratio, PEG_TARGET),
        (snapshot.debt_to_equity, DEBT_TO_EQUITY_TARGET),
    ];
    let growth = [snapshot.revenue_growth_pct, snapshot.earnings_growth_pct];

    let contributions: Vec<f64> = ratios
        .iter()
        .filter_map(|(value, target)| value.map(|v| target.score(v)))
        .chain(growth.iter().flatten().map(|&g| growth_score(g)))
        .collect();

    if contributions.is_empty() {
        return NEUTRAL_SCORE;
    }
    clamp_unit(contributions.iter().sum::<f64>() / contributions.len() as f64)
}
