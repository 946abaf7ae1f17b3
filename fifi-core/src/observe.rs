//! Observability channel for the analysis pipeline.
//!
//! The scoring functions never log. Callers that want a trace pass an
//! observer explicitly; the pipeline reports fallbacks and results through it.

use crate::domain::{AnalysisResult, PositionSizingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Which part of the pipeline an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Technical,
    Fundamental,
    Sentiment,
    MarketData,
    News,
    Sizing,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Technical => "technical",
            Self::Fundamental => "fundamental",
            Self::Sentiment => "sentiment",
            Self::MarketData => "market_data",
            Self::News => "news",
            Self::Sizing => "sizing",
        };
        f.write_str(name)
    }
}

/// Receives pipeline events. Implementations must be shareable across the
/// worker threads of a batch run.
pub trait AnalysisObserver: Send + Sync {
    /// A component degraded to its neutral default or a fallback source.
    fn on_fallback(&self, symbol: &str, component: Component, reason: &str);

    /// Scores for a symbol are complete.
    fn on_scores(&self, symbol: &str, result: &AnalysisResult);

    /// A position was sized for a symbol.
    fn on_position(&self, symbol: &str, position: &PositionSizingResult);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {
    fn on_fallback(&self, _symbol: &str, _component: Component, _reason: &str) {}
    fn on_scores(&self, _symbol: &str, _result: &AnalysisResult) {}
    fn on_position(&self, _symbol: &str, _position: &PositionSizingResult) {}
}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn on_fallback(&self, symbol: &str, component: Component, reason: &str) {
        tracing::warn!(symbol, %component, reason, "falling back to neutral input");
    }

    fn on_scores(&self, symbol: &str, result: &AnalysisResult) {
        tracing::info!(
            symbol,
            technical = result.technical_score,
            fundamental = result.fundamental_score,
            sentiment = result.sentiment_score,
            composite = result.composite_score,
            "scores computed"
        );
    }

    fn on_position(&self, symbol: &str, position: &PositionSizingResult) {
        tracing::debug!(
            symbol,
            size = position.position_size,
            capital_at_risk = position.capital_at_risk,
            stop_loss = position.stop_loss_price,
            take_profit = position.take_profit_price,
            "position sized"
        );
    }
}

/// An event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    Fallback {
        symbol: String,
        component: Component,
        reason: String,
    },
    Scores {
        symbol: String,
        result: AnalysisResult,
    },
    Position {
        symbol: String,
        position: PositionSizingResult,
    },
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.lock().clone()
    }

    /// Components that fell back for `symbol`.
    pub fn fallbacks(&self, symbol: &str) -> Vec<Component> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                ObservedEvent::Fallback {
                    symbol: s,
                    component,
                    ..
                } if s == symbol => Some(*component),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ObservedEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ObservedEvent>> {
        // A panicking observer thread cannot leave the Vec half-written.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AnalysisObserver for RecordingObserver {
    fn on_fallback(&self, symbol: &str, component: Component, reason: &str) {
        self.push(ObservedEvent::Fallback {
            symbol: symbol.to_string(),
            component,
            reason: reason.to_string(),
        });
    }

    fn on_scores(&self, symbol: &str, result: &AnalysisResult) {
        self.push(ObservedEvent::Scores {
            symbol: symbol.to_string(),
            result: *result,
        });
    }

    fn on_position(&self, symbol: &str, position: &PositionSizingResult) {
        self.push(ObservedEvent::Position {
            symbol: symbol.to_string(),
            position: *position,
        });
    }
}
