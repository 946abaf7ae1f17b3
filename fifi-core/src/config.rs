//! TOML configuration.
//!
//! ```toml
//! [weights]
//! technical = 0.6
//! fundamental = 0.25
//! sentiment = 0.15
//!
//! [risk]
//! max_position_size_pct = 0.05
//! max_daily_loss_pct = 0.02
//! stop_loss_pct = 0.03
//! take_profit_pct = 0.06
//!
//! [providers]
//! price_dir = "data/prices"
//! news_dir = "data/news"
//!
//! [account]
//! capital = 10000.0
//! ```
//!
//! Every section and field is optional and falls back to the defaults above
//! (providers default to none). Configuration is read-only here; nothing is
//! written back.

use crate::domain::{RiskParameters, WeightSet};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub technical: f64,
    pub fundamental: f64,
    pub sentiment: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        let w = WeightSet::default();
        Self {
            technical: w.technical,
            fundamental: w.fundamental,
            sentiment: w.sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub max_position_size_pct: f64,
    pub max_daily_loss_pct: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        let r = RiskParameters::default();
        Self {
            max_position_size_pct: r.max_position_size_pct,
            max_daily_loss_pct: r.max_daily_loss_pct,
            stop_loss_pct: r.stop_loss_pct,
            take_profit_pct: r.take_profit_pct,
        }
    }
}

/// Directories backing the file providers. `None` selects the fallback source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub price_dir: Option<PathBuf>,
    pub news_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub capital: f64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self { capital: 10_000.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub weights: WeightConfig,
    pub risk: RiskConfig,
    pub providers: ProviderSettings,
    pub account: AccountConfig,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weight_set()?;
        self.risk_parameters()?;
        Ok(())
    }

    pub fn weight_set(&self) -> Result<WeightSet, EngineError> {
        WeightSet::new(
            self.weights.technical,
            self.weights.fundamental,
            self.weights.sentiment,
        )
    }

    pub fn risk_parameters(&self) -> Result<RiskParameters, EngineError> {
        RiskParameters::new(
            self.risk.max_position_size_pct,
            self.risk.max_daily_loss_pct,
            self.risk.stop_loss_pct,
            self.risk.take_profit_pct,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.weight_set().unwrap(), WeightSet::default());
        assert_eq!(config.risk_parameters().unwrap(), RiskParameters::default());
        assert_eq!(config.account.capital, 10_000.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
[risk]
stop_loss_pct = 0.1

[providers]
price_dir = "prices"
"#,
        )
        .unwrap();
        assert_eq!(config.risk.stop_loss_pct, 0.1);
        assert_eq!(config.risk.take_profit_pct, 0.06);
        assert_eq!(config.providers.price_dir, Some(PathBuf::from("prices")));
        assert_eq!(config.providers.news_dir, None);
    }

    #[test]
    fn weights_not_summing_to_one_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
[weights]
technical = 0.5
fundamental = 0.5
sentiment = 0.5
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(EngineError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[weights"),
            Err(ConfigError::Parse(_))
        ));
    }
}
