//! FIFI CLI — score symbols and size positions from the command line.
//!
//! Commands:
//! - `analyze` — score one symbol and size a position, print a JSON report
//! - `batch` — score several symbols in parallel, print a JSON array
//! - `size` — position sizing only
//!
//! Prices and news come from the directories named in the config's
//! `[providers]` section; without them the synthetic and neutral fallbacks
//! are used. Logs go to stderr (`RUST_LOG` overrides the level).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fifi_core::config::AppConfig;
use fifi_core::data::{build_market_provider, build_sentiment_provider, load_input};
use fifi_core::domain::FundamentalSnapshot;
use fifi_core::observe::TracingObserver;
use fifi_core::sizing::compute_position_size;
use fifi_core::Analyzer;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fifi",
    about = "FIFI — composite market scoring and risk-bounded position sizing"
)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one symbol and size a position.
    Analyze {
        /// Symbol to analyze (e.g., AAPL).
        #[arg(long)]
        symbol: String,

        /// JSON file holding a fundamentals snapshot. Derived from prices when omitted.
        #[arg(long)]
        fundamentals: Option<PathBuf>,

        /// Capital to size against. Defaults to the config's account capital.
        #[arg(long)]
        capital: Option<f64>,

        /// Entry price. Defaults to the last close.
        #[arg(long)]
        price: Option<f64>,
    },
    /// Score several symbols in parallel.
    Batch {
        /// Symbols to analyze (e.g., AAPL MSFT NVDA).
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Size a position without scoring.
    Size {
        /// Capital to size against. Defaults to the config's account capital.
        #[arg(long)]
        capital: Option<f64>,

        /// Entry price.
        #[arg(long)]
        price: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            symbol,
            fundamentals,
            capital,
            price,
        } => run_analyze(&config, &symbol, fundamentals.as_deref(), capital, price),
        Commands::Batch { symbols } => run_batch(&config, &symbols),
        Commands::Size { capital, price } => run_size(&config, capital, price),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn load_fundamentals(path: &Path, symbol: &str) -> Result<FundamentalSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading fundamentals {}", path.display()))?;
    let snapshot: FundamentalSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("parsing fundamentals {}", path.display()))?;
    if !snapshot.symbol.eq_ignore_ascii_case(symbol) {
        bail!(
            "fundamentals file is for '{}', not '{symbol}'",
            snapshot.symbol
        );
    }
    Ok(snapshot)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_analyze(
    config: &AppConfig,
    symbol: &str,
    fundamentals: Option<&Path>,
    capital: Option<f64>,
    price: Option<f64>,
) -> Result<()> {
    let fundamentals = fundamentals
        .map(|path| load_fundamentals(path, symbol))
        .transpose()?;

    let analyzer = Analyzer::new(config.weight_set()?)?;
    let risk = config.risk_parameters()?;
    let market = build_market_provider(&config.providers);
    let news = build_sentiment_provider(&config.providers);
    tracing::info!(symbol, market = ?market, news = ?news, "analyzing");

    let observer = TracingObserver;
    let input = load_input(symbol, &market, &news, fundamentals, &observer);
    let report = analyzer.report(
        &input,
        capital.unwrap_or(config.account.capital),
        price,
        &risk,
        &observer,
    )?;
    print_json(&report)
}

fn run_batch(config: &AppConfig, symbols: &[String]) -> Result<()> {
    let analyzer = Analyzer::new(config.weight_set()?)?;
    let market = build_market_provider(&config.providers);
    let news = build_sentiment_provider(&config.providers);
    let observer = TracingObserver;

    let inputs: Vec<_> = symbols
        .iter()
        .map(|symbol| load_input(symbol, &market, &news, None, &observer))
        .collect();

    #[derive(Serialize)]
    struct BatchEntry<'a> {
        symbol: &'a str,
        #[serde(flatten)]
        analysis: fifi_core::domain::AnalysisResult,
    }

    let mut entries = Vec::with_capacity(inputs.len());
    for (input, result) in inputs.iter().zip(analyzer.analyze_batch(&inputs, &observer)) {
        entries.push(BatchEntry {
            symbol: &input.symbol,
            analysis: result?,
        });
    }
    print_json(&entries)
}

fn run_size(config: &AppConfig, capital: Option<f64>, price: f64) -> Result<()> {
    let risk = config.risk_parameters()?;
    let position = compute_position_size(capital.unwrap_or(config.account.capital), price, &risk)?;
    print_json(&position)
}
