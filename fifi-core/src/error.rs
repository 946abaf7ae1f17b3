//! Engine error taxonomy.
//!
//! Only misconfiguration is an error. Missing or insufficient market data
//! degrades to a neutral score inside each component and never reaches here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Stop-loss settings leave no risk per unit, or a risk field is out of range.
    #[error("invalid risk parameters: {0}")]
    InvalidRiskParameters(String),

    /// Composite weights are out of range or do not sum to 1.0.
    #[error("invalid weights (technical={technical}, fundamental={fundamental}, sentiment={sentiment}): {reason}")]
    InvalidWeights {
        technical: f64,
        fundamental: f64,
        sentiment: f64,
        reason: String,
    },
}
