//! Normalizers and the composite combiner.
//!
//! Each normalizer maps one market signal into [0, 1]. Missing data is not an
//! error: every normalizer returns [`NEUTRAL_SCORE`] when it has nothing to
//! measure, and that neutral value enters the composite like any other score.

pub mod composite;
pub mod fundamental;
pub mod sentiment;
pub mod technical;

pub use composite::compute_score;
pub use fundamental::score_fundamentals;
pub use sentiment::aggregate_sentiment;
pub use technical::{score_technical, technical_breakdown, TechnicalBreakdown};

/// Score returned for absent or uninformative input.
pub const NEUTRAL_SCORE: f64 = 0.5;

pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
