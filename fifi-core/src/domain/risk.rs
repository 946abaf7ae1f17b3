//! Risk parameters consumed by the position sizer.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Fractional risk settings, each in [0, 1].
///
/// `max_daily_loss_pct` is carried for reporting only; sizing never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    pub max_position_size_pct: f64,
    pub max_daily_loss_pct: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
}

impl RiskParameters {
    pub fn new(
        max_position_size_pct: f64,
        max_daily_loss_pct: f64,
        stop_loss_pct: f64,
        take_profit_pct: f64,
    ) -> Result<Self, EngineError> {
        let risk = Self {
            max_position_size_pct,
            max_daily_loss_pct,
            stop_loss_pct,
            take_profit_pct,
        };
        risk.validate()?;
        Ok(risk)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("max_position_size_pct", self.max_position_size_pct),
            ("max_daily_loss_pct", self.max_daily_loss_pct),
            ("stop_loss_pct", self.stop_loss_pct),
            ("take_profit_pct", self.take_profit_pct),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidRiskParameters(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            max_position_size_pct: 0.05,
            max_daily_loss_pct: 0.02,
            stop_loss_pct: 0.03,
            take_profit_pct: 0.06,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RiskParameters::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_field_rejected() {
        let err = RiskParameters::new(0.05, 0.02, 1.5, 0.06).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRiskParameters(msg) if msg.contains("stop_loss_pct")));
    }
}
