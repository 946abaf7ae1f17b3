//! Analysis pipeline: score each dimension, blend them, and size a position.

use crate::domain::{
    AnalysisResult, FundamentalSnapshot, NewsItem, PositionSizingResult, PriceSeries,
    RiskParameters, WeightSet,
};
use crate::error::EngineError;
use crate::observe::{AnalysisObserver, Component};
use crate::scoring::{
    aggregate_sentiment, compute_score, score_fundamentals, technical_breakdown,
    TechnicalBreakdown, NEUTRAL_SCORE,
};
use crate::sizing::RiskBudgetSizer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to score one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub symbol: String,
    pub prices: PriceSeries,
    pub fundamentals: FundamentalSnapshot,
    pub news: Vec<NewsItem>,
}

impl AnalysisInput {
    /// Input with no data at all; every dimension will fall back to neutral.
    pub fn empty(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            fundamentals: FundamentalSnapshot::new(symbol.clone()),
            symbol,
            prices: PriceSeries::empty(),
            news: Vec::new(),
        }
    }
}

/// Scores plus the technical breakdown and an optional sized position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub analysis: AnalysisResult,
    pub technical: TechnicalBreakdown,
    pub entry_price: Option<f64>,
    pub position: Option<PositionSizingResult>,
    pub risk: RiskParameters,
}

/// Composite scorer bound to a weight set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    weights: WeightSet,
}

impl Analyzer {
    pub fn new(weights: WeightSet) -> Result<Self, EngineError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    pub fn analyze(
        &self,
        input: &AnalysisInput,
        observer: &dyn AnalysisObserver,
    ) -> Result<AnalysisResult, EngineError> {
        self.score(input, observer).map(|(result, _)| result)
    }

    fn score(
        &self,
        input: &AnalysisInput,
        observer: &dyn AnalysisObserver,
    ) -> Result<(AnalysisResult, TechnicalBreakdown), EngineError> {
        let symbol = input.symbol.as_str();

        let breakdown = technical_breakdown(&input.prices);
        let technical = if input.prices.is_empty() {
            observer.on_fallback(symbol, Component::Technical, "empty price history");
            NEUTRAL_SCORE
        } else {
            if breakdown.computed() == 0 {
                observer.on_fallback(symbol, Component::Technical, "no computable sub-score");
            }
            breakdown.score()
        };

        if input.fundamentals.present_metrics() == 0 {
            observer.on_fallback(symbol, Component::Fundamental, "no fundamental metrics");
        }
        let fundamental = score_fundamentals(&input.fundamentals);

        if input.news.is_empty() {
            observer.on_fallback(symbol, Component::Sentiment, "no news items");
        }
        let sentiment = aggregate_sentiment(&input.news);

        let composite = compute_score(&self.weights, technical, fundamental, sentiment)?;
        let result = AnalysisResult {
            technical_score: technical,
            fundamental_score: fundamental,
            sentiment_score: sentiment,
            composite_score: composite,
        };
        observer.on_scores(symbol, &result);
        Ok((result, breakdown))
    }

    /// Scores `input` and sizes a position at `entry_price`, or at the last
    /// close when no price is given. Without either, no position is sized.
    pub fn report(
        &self,
        input: &AnalysisInput,
        capital: f64,
        entry_price: Option<f64>,
        risk: &RiskParameters,
        observer: &dyn AnalysisObserver,
    ) -> Result<AnalysisReport, EngineError> {
        let (analysis, technical) = self.score(input, observer)?;

        let entry_price = entry_price.or_else(|| input.prices.last().map(|p| p.close));
        let position = match entry_price {
            Some(price) => {
                let position = RiskBudgetSizer::new(*risk).size(capital, price)?;
                observer.on_position(&input.symbol, &position);
                Some(position)
            }
            None => {
                observer.on_fallback(&input.symbol, Component::Sizing, "no entry price");
                None
            }
        };

        Ok(AnalysisReport {
            symbol: input.symbol.clone(),
            analysis,
            technical,
            entry_price,
            position,
            risk: *risk,
        })
    }

    /// Analyzes every input in parallel. Results keep input order.
    pub fn analyze_batch(
        &self,
        inputs: &[AnalysisInput],
        observer: &dyn AnalysisObserver,
    ) -> Vec<Result<AnalysisResult, EngineError>> {
        inputs
            .par_iter()
            .map(|input| self.analyze(input, observer))
            .collect()
    }
}
