//! Position sizing — converts capital, entry price and risk settings into a
//! bounded position with protective price levels.
//!
//! Sizing is independent of the scores: it never looks at an `AnalysisResult`.

pub mod risk_budget;

pub use risk_budget::{compute_position_size, RiskBudgetSizer};
