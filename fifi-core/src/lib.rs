//! FIFI Core — scoring and sizing engine.
//!
//! Turns three independent market signals into one bounded score and turns
//! capital plus a price into a risk-bounded position:
//! - Technical indicator engine (moving average, RSI, Bollinger Bands)
//! - Fundamental and sentiment normalizers
//! - Weighted composite combiner
//! - Risk-budget position sizer
//!
//! Every computation is a pure function over its inputs. Observability is
//! injected through [`observe::AnalysisObserver`]; data arrives through the
//! provider traits in [`data`]. The engine advises; it never places orders.

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod observe;
pub mod scoring;
pub mod sizing;

pub use analysis::{AnalysisInput, AnalysisReport, Analyzer};
pub use error::EngineError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the engine's value types and services can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();
        require_send::<domain::FundamentalSnapshot>();
        require_sync::<domain::FundamentalSnapshot>();
        require_send::<domain::NewsItem>();
        require_sync::<domain::NewsItem>();
        require_send::<domain::WeightSet>();
        require_sync::<domain::WeightSet>();
        require_send::<domain::RiskParameters>();
        require_sync::<domain::RiskParameters>();
        require_send::<Analyzer>();
        require_sync::<Analyzer>();
        require_send::<AnalysisInput>();
        require_sync::<AnalysisInput>();
        require_send::<sizing::RiskBudgetSizer>();
        require_sync::<sizing::RiskBudgetSizer>();
        require_send::<data::MarketDataSource>();
        require_sync::<data::MarketDataSource>();
        require_send::<data::SentimentSource>();
        require_sync::<data::SentimentSource>();
        require_send::<observe::RecordingObserver>();
        require_sync::<observe::RecordingObserver>();
    }
}
