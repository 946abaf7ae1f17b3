//! Composite weights.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Tolerance for the sum-to-one invariant.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Weights of the technical, fundamental and sentiment dimensions.
///
/// Invariant: each weight is in [0, 1] and the three sum to 1.0 within
/// [`WEIGHT_EPSILON`]. Fields are public so a configuration layer can build
/// one directly; [`WeightSet::validate`] re-checks the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub technical: f64,
    pub fundamental: f64,
    pub sentiment: f64,
}

impl WeightSet {
    pub fn new(technical: f64, fundamental: f64, sentiment: f64) -> Result<Self, EngineError> {
        let weights = Self {
            technical,
            fundamental,
            sentiment,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let all = [self.technical, self.fundamental, self.sentiment];
        if all.iter().any(|w| !w.is_finite() || !(0.0..=1.0).contains(w)) {
            return Err(self.invalid("each weight must be within [0, 1]"));
        }
        let total: f64 = all.iter().sum();
        if (total - 1.0).abs() > WEIGHT_EPSILON {
            return Err(self.invalid(&format!("weights sum to {total}, expected 1.0")));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> EngineError {
        EngineError::InvalidWeights {
            technical: self.technical,
            fundamental: self.fundamental,
            sentiment: self.sentiment,
            reason: reason.to_string(),
        }
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            technical: 0.6,
            fundamental: 0.25,
            sentiment: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        assert!(WeightSet::default().validate().is_ok());
    }

    #[test]
    fn weights_must_sum_to_one() {
        let err = WeightSet::new(0.5, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeights { .. }));
    }

    #[test]
    fn weights_within_epsilon_accepted() {
        assert!(WeightSet::new(0.1 + 0.2, 0.3, 0.4).is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        assert!(WeightSet::new(-0.2, 0.6, 0.6).is_err());
    }

    #[test]
    fn nan_weight_rejected() {
        assert!(WeightSet::new(f64::NAN, 0.5, 0.5).is_err());
    }
}
