//! End-to-end pipeline behavior through the public API.
//!
//! Covers:
//! 1. File-backed providers feeding the analyzer
//! 2. Degraded inputs falling back to neutral scores
//! 3. Configuration driving weights, risk and provider selection

use chrono::{Duration, TimeZone, Utc};
use fifi_core::config::{AppConfig, ProviderSettings};
use fifi_core::data::{
    build_market_provider, build_sentiment_provider, load_input, DataError, MarketDataProvider,
};
use fifi_core::domain::{FundamentalSnapshot, RiskParameters, WeightSet};
use fifi_core::observe::{Component, NoopObserver, ObservedEvent, RecordingObserver};
use fifi_core::{AnalysisInput, Analyzer, EngineError};
use std::fmt::Write as _;
use std::fs;

// ── Helpers ──────────────────────────────────────────────────────────

fn write_price_csv(dir: &std::path::Path, symbol: &str, closes: &[f64]) {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let mut csv = String::from("timestamp,open,high,low,close,volume\n");
    for (i, close) in closes.iter().enumerate() {
        let date = (base + Duration::days(i as i64)).format("%Y-%m-%d");
        writeln!(csv, "{date},{close},{},{},{close},1000", close + 1.0, close - 1.0).unwrap();
    }
    fs::write(dir.join(format!("{symbol}.csv")), csv).unwrap();
}

fn write_news_json(dir: &std::path::Path, symbol: &str, sentiments: &[f64]) {
    let items: Vec<String> = sentiments
        .iter()
        .enumerate()
        .map(|(i, s)| format!(r#"{{"title": "headline {i}", "sentiment": {s}}}"#))
        .collect();
    fs::write(dir.join(format!("{symbol}.json")), format!("[{}]", items.join(","))).unwrap();
}

fn file_settings(root: &std::path::Path) -> ProviderSettings {
    let prices = root.join("prices");
    let news = root.join("news");
    fs::create_dir_all(&prices).unwrap();
    fs::create_dir_all(&news).unwrap();
    ProviderSettings {
        price_dir: Some(prices),
        news_dir: Some(news),
    }
}

// ── 1. File-backed providers ─────────────────────────────────────────

#[test]
fn csv_and_json_sources_feed_the_analyzer() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = file_settings(tmp.path());
    let closes: Vec<f64> = (0..60).map(|d| 100.0 + d as f64).collect();
    write_price_csv(settings.price_dir.as_ref().unwrap(), "AAPL", &closes);
    write_news_json(settings.news_dir.as_ref().unwrap(), "AAPL", &[1.0, 0.0]);

    let market = build_market_provider(&settings);
    let news = build_sentiment_provider(&settings);
    let observer = RecordingObserver::new();
    let snapshot = FundamentalSnapshot::new("AAPL").with_revenue_growth_pct(20.0);
    let input = load_input("aapl", &market, &news, Some(snapshot), &observer);

    assert_eq!(input.prices.len(), 60);
    assert_eq!(input.news.len(), 2);
    assert!(observer.fallbacks("aapl").is_empty());

    let analyzer = Analyzer::new(WeightSet::default()).unwrap();
    let result = analyzer.analyze(&input, &observer).unwrap();
    assert_eq!(result.fundamental_score, 1.0);
    assert_eq!(result.sentiment_score, 0.75);
    assert!(result.technical_score > 0.0 && result.technical_score < 1.0);
    assert!(observer
        .events()
        .iter()
        .any(|e| matches!(e, ObservedEvent::Scores { symbol, .. } if symbol == "aapl")));
}

#[test]
fn missing_symbol_files_degrade_to_neutral() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = file_settings(tmp.path());
    let market = build_market_provider(&settings);

    assert!(matches!(
        market.fetch_price_history("NOPE"),
        Err(DataError::SymbolNotFound { .. })
    ));

    let observer = RecordingObserver::new();
    let input = load_input(
        "NOPE",
        &market,
        &build_sentiment_provider(&settings),
        None,
        &observer,
    );
    assert!(input.prices.is_empty());
    assert!(input.news.is_empty());
    assert_eq!(input.fundamentals.present_metrics(), 0);

    let result = Analyzer::new(WeightSet::default())
        .unwrap()
        .analyze(&input, &observer)
        .unwrap();
    assert!((result.composite_score - 0.5).abs() < 1e-12);

    let fallbacks = observer.fallbacks("NOPE");
    for component in [
        Component::MarketData,
        Component::News,
        Component::Technical,
        Component::Fundamental,
        Component::Sentiment,
    ] {
        assert!(fallbacks.contains(&component), "missing fallback {component}");
    }
}

// ── 2. Fallback providers ────────────────────────────────────────────

#[test]
fn fallback_providers_produce_usable_input() {
    let settings = ProviderSettings::default();
    let observer = RecordingObserver::new();
    let input = load_input(
        "MSFT",
        &build_market_provider(&settings),
        &build_sentiment_provider(&settings),
        None,
        &observer,
    );

    assert_eq!(input.prices.len(), 60);
    assert_eq!(input.news.len(), 1);
    // Derived fundamentals: 3 proxy ratios + 2 growth metrics
    assert_eq!(input.fundamentals.present_metrics(), 5);

    let fallbacks = observer.fallbacks("MSFT");
    assert_eq!(fallbacks, vec![Component::MarketData, Component::News]);

    let result = Analyzer::new(WeightSet::default())
        .unwrap()
        .analyze(&input, &NoopObserver)
        .unwrap();
    assert_eq!(result.sentiment_score, 0.5);
    for score in [
        result.technical_score,
        result.fundamental_score,
        result.composite_score,
    ] {
        assert!((0.0..=1.0).contains(&score));
    }
}

// ── 3. Configuration ─────────────────────────────────────────────────

#[test]
fn config_file_drives_weights_and_risk() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("fifi.toml");
    fs::write(
        &path,
        r#"
[weights]
technical = 0.0
fundamental = 0.0
sentiment = 1.0

[risk]
max_position_size_pct = 0.05
stop_loss_pct = 0.10

[account]
capital = 10000.0
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let analyzer = Analyzer::new(config.weight_set().unwrap()).unwrap();
    let mut input = AnalysisInput::empty("AAPL");
    input.news = vec![fifi_core::domain::NewsItem::new("upgrade", 0.6)];

    let report = analyzer
        .report(
            &input,
            config.account.capital,
            Some(100.0),
            &config.risk_parameters().unwrap(),
            &NoopObserver,
        )
        .unwrap();
    assert!((report.analysis.composite_score - 0.8).abs() < 1e-12);
    let position = report.position.unwrap();
    assert!((position.position_size - 50.0).abs() < 1e-9);
    assert!((position.stop_loss_price - 90.0).abs() < 1e-9);
}

#[test]
fn missing_config_file_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = AppConfig::load(&tmp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn zero_stop_loss_surfaces_error() {
    let risk = RiskParameters::new(0.05, 0.02, 0.0, 0.06).unwrap();
    let err = fifi_core::sizing::compute_position_size(10_000.0, 100.0, &risk).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRiskParameters(_)));
}
