//! Sparse fundamental ratios for one symbol.

use serde::{Deserialize, Serialize};

/// Valuation and growth metrics. Each field is independently present or
/// absent; absence means "no information", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub symbol: String,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub peg_ratio: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    #[serde(default)]
    pub revenue_growth_pct: Option<f64>,
    #[serde(default)]
    pub earnings_growth_pct: Option<f64>,
}

impl FundamentalSnapshot {
    /// Snapshot with every metric absent.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_pe_ratio(mut self, value: f64) -> Self {
        self.pe_ratio = Some(value);
        self
    }

    pub fn with_peg_ratio(mut self, value: f64) -> Self {
        self.peg_ratio = Some(value);
        self
    }

    pub fn with_debt_to_equity(mut self, value: f64) -> Self {
        self.debt_to_equity = Some(value);
        self
    }

    pub fn with_revenue_growth_pct(mut self, value: f64) -> Self {
        self.revenue_growth_pct = Some(value);
        self
    }

    pub fn with_earnings_growth_pct(mut self, value: f64) -> Self {
        self.earnings_growth_pct = Some(value);
        self
    }

    /// Number of populated metrics.
    pub fn present_metrics(&self) -> usize {
        [
            self.pe_ratio,
            self.peg_ratio,
            self.debt_to_equity,
            self.revenue_growth_pct,
            self.earnings_growth_pct,
        ]
        .iter()
        .filter(|m| m.is_some())
        .count()
    }
}
