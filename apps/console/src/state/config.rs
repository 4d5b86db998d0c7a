//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`, e.g. `STOCKROOM_CURRENCY_SYMBOL`)
//! 2. Config file (`--config <file>`, or `./stockroom.toml` when present)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Largest number of decimals a price is rendered with.
const MAX_CURRENCY_DECIMALS: u8 = 6;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the main menu banner.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for prices
    pub currency_decimals: u8,

    /// JSON seed catalog used instead of the built-in products.
    pub seed_path: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Store: "Stockroom"
    /// - Currency: $ with 2 decimals
    /// - Seed: built-in products
    /// - Logging: warnings only
    fn default() -> Self {
        ConfigState {
            store_name: "Stockroom".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            seed_path: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from an optional file and the environment.
    ///
    /// An explicit `file` must exist and is read as TOML whatever its
    /// extension; the implicit `stockroom.toml` is optional.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name("stockroom").required(false),
        };

        let config: ConfigState = Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix("STOCKROOM"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue(format!(
                "currency_decimals must be at most {}",
                MAX_CURRENCY_DECIMALS
            )));
        }

        Ok(())
    }

    /// Formats a price with the configured symbol and decimals.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_console_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(19.99), "$19.99");
    /// ```
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol,
            self.currency_decimals as usize,
            price
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
