//! Domain value types for the scoring engine.
//!
//! Every type here is a transient value object: built by a caller, consumed
//! read-only by the engine, and never mutated behind the caller's back.

pub mod fundamentals;
pub mod news;
pub mod price;
pub mod result;
pub mod risk;
pub mod weights;

pub use fundamentals::FundamentalSnapshot;
pub use news::NewsItem;
pub use price::{PricePoint, PriceSeries};
pub use result::{AnalysisResult, PositionSizingResult};
pub use risk::RiskParameters;
pub use weights::{WeightSet, WEIGHT_EPSILON};
