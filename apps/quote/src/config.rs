//! # Quote Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (--format)                        (highest priority)  │
//! │  2. Environment Variables                                              │
//! │     PRINTWORKS_LOG_LEVEL=debug                                         │
//! │     PRINTWORKS_OUTPUT_FORMAT=json                                      │
//! │  3. TOML Config File (--config, or the platform default)               │
//! │     ~/.config/printworks/quote.toml (Linux)                            │
//! │  4. Default Values                                 (lowest priority)   │
//! │     log level "warn", text output, standard rate card                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [log]
//! level = "info"
//!
//! [output]
//! format = "json"
//!
//! # Optional; omit to use the published rates. Amounts in cents.
//! [rates]
//! beyond_tiers_per_page = 5
//! hard_cover_per_copy = 600
//! soft_cover_per_copy = 300
//! coated_paper_per_page = 7
//! tiers = [{ up_to = 100, per_page = 7 }, { up_to = 200, per_page = 6 }]
//! ```

use printworks_core::RateCard;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Output Format
// =============================================================================

/// How the quote is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned breakdown for humans.
    #[default]
    Text,
    /// Single JSON object for scripts.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "output format".to_string(),
                reason: format!("unknown format '{other}', expected text or json"),
            }),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber` filter directive, e.g. `"info"` or
    /// `"warn,printworks_core=debug"`. `RUST_LOG` wins over this.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete quote tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub output: OutputSettings,

    /// Rate card override; `None` means the standard rates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateCard>,

    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit `config_path` must exist; the platform
    ///    default path is optional)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path)),
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config = Self::from_toml(&contents)?;
        config.source = Some(path);
        Ok(config)
    }

    /// Applies `PRINTWORKS_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PRINTWORKS_LOG_LEVEL") {
            self.log.level = level;
        }

        if let Some(format) = lookup("PRINTWORKS_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log.level).map_err(|e| ConfigError::InvalidValue {
            key: "log.level".to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Rate card to price with.
    pub fn rate_card(&self) -> RateCard {
        self.rates.clone().unwrap_or_default()
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "printworks", "printworks")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use printworks_core::Money;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.rate_card(), RateCard::standard());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = QuoteConfig::from_toml("").unwrap();
        assert_eq!(config.log.level, "warn");
        assert!(config.rates.is_none());
    }

    #[test]
    fn test_toml_with_rate_card() {
        let config = QuoteConfig::from_toml(
            r#"
            [log]
            level = "debug"

            [output]
            format = "json"

            [rates]
            beyond_tiers_per_page = 4
            hard_cover_per_copy = 700
            soft_cover_per_copy = 350
            coated_paper_per_page = 8
            tiers = [{ up_to = 50, per_page = 9 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        let rates = config.rate_card();
        assert_eq!(rates.unit_rate(50), Money::from_cents(9));
        assert_eq!(rates.unit_rate(51), Money::from_cents(4));
    }

    #[test]
    fn test_broken_rate_card_is_rejected() {
        let result = QuoteConfig::from_toml(
            r#"
            [rates]
            beyond_tiers_per_page = 5
            hard_cover_per_copy = -600
            soft_cover_per_copy = 300
            coated_paper_per_page = 7
            tiers = []
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = QuoteConfig::default();
        config
            .apply_overrides(env(&[
                ("PRINTWORKS_LOG_LEVEL", "info"),
                ("PRINTWORKS_OUTPUT_FORMAT", "json"),
            ]))
            .unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.output.format, OutputFormat::Json);

        let mut config = QuoteConfig::default();
        assert!(config
            .apply_overrides(env(&[("PRINTWORKS_OUTPUT_FORMAT", "xml")]))
            .is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = QuoteConfig::default();
        config.log.level = "warn,printworks_core=debug".to_string();
        assert!(config.validate().is_ok());

        config.log.level = "printworks=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = QuoteConfig::load(Some(PathBuf::from("/definitely/not/here/quote.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
