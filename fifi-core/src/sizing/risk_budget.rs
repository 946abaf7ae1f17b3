//! Risk-budget sizer.

use crate::domain::{PositionSizingResult, RiskParameters};
use crate::error::EngineError;

/// Sizes a position by the capital it may lose before the stop triggers,
/// capped by what the capital can buy outright.
///
/// # Formula
/// ```text
/// capital_at_risk   = capital * max_position_size_pct
/// stop_loss_price   = price * (1 - stop_loss_pct)
/// take_profit_price = price * (1 + take_profit_pct)
/// risk_per_unit     = price - stop_loss_price
/// position_size     = min(capital_at_risk / risk_per_unit, capital / price)
/// ```
///
/// # Example
/// - Capital: $10,000, price: $100
/// - Max position 5% → $500 at risk
/// - Stop loss 3% → stop at $97, $3 risk per unit
/// - Risk bound: 500 / 3 ≈ 166.7 units; affordability bound: 100 units
/// - Position size: 100 units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBudgetSizer {
    risk: RiskParameters,
}

impl RiskBudgetSizer {
    pub fn new(risk: RiskParameters) -> Self {
        Self { risk }
    }

    pub fn size(&self, capital: f64, price: f64) -> Result<PositionSizingResult, EngineError> {
        if !capital.is_finite() || capital < 0.0 {
            return Err(EngineError::InvalidRiskParameters(format!(
                "capital must be a non-negative amount, got {capital}"
            )));
        }

        let capital_at_risk = capital * self.risk.max_position_size_pct;
        let stop_loss_price = price * (1.0 - self.risk.stop_loss_pct);
        let take_profit_price = price * (1.0 + self.risk.take_profit_pct);

        let risk_per_unit = price - stop_loss_price;
        if risk_per_unit.is_nan() || risk_per_unit <= 0.0 {
            return Err(EngineError::InvalidRiskParameters(format!(
                "stop loss leaves no risk per unit (price={price}, stop_loss_pct={})",
                self.risk.stop_loss_pct
            )));
        }

        let position_size = (capital_at_risk / risk_per_unit).min(capital / price);

        Ok(PositionSizingResult {
            capital_at_risk,
            position_size,
            stop_loss_price,
            take_profit_price,
        })
    }
}

/// Convenience wrapper around [`RiskBudgetSizer::size`].
pub fn compute_position_size(
    capital: f64,
    price: f64,
    risk: &RiskParameters,
) -> Result<PositionSizingResult, EngineError> {
    RiskBudgetSizer::new(*risk).size(capital, price)
}
