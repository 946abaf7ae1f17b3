//! Output value objects.

use serde::{Deserialize, Serialize};

/// Per-dimension scores and their weighted blend, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub sentiment_score: f64,
    pub composite_score: f64,
}

/// Suggested position with its protective price levels. All fields are
/// non-negative for valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSizingResult {
    pub capital_at_risk: f64,
    pub position_size: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
}
