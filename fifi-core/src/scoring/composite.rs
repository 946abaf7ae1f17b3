//! Weighted composite of the three dimension scores.

use crate::domain::WeightSet;
use crate::error::EngineError;

/// `technical·w_t + fundamental·w_f + sentiment·w_s`.
///
/// Weights are not renormalized; the set is re-validated and an
/// `InvalidWeights` error is returned if it breaks the sum-to-one invariant.
pub fn compute_score(
    weights: &WeightSet,
    technical: f64,
    fundamental: f64,
    sentiment: f64,
) -> Result<f64, EngineError> {
    weights.validate()?;
    Ok(technical * weights.technical
        + fundamental * weights.fundamental
        + sentiment * weights.sentiment)
}
