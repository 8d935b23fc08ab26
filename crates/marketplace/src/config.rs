//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MARKETPLACE_DATA_DIR` - root directory for the file store
//!   (default: `.society-marketplace`)
//! - `MARKETPLACE_SIMULATED_LATENCY_MS` - artificial delay applied to
//!   login, signup, and product-save operations (default: 500)
//! - `RUST_LOG` - standard tracing env-filter

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".society-marketplace";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid value for {name}: {value}")]
    InvalidNumber {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Marketplace configuration.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Root directory of the file store.
    pub data_dir: PathBuf,
    /// Artificial delay before login/signup/product-save complete, to
    /// emulate network latency. Zero disables it.
    pub simulated_latency: Duration,
}

impl MarketplaceConfig {
    /// Load configuration from the environment.
    ///
    /// Call `dotenvy::dotenv().ok()` first if a `.env` file should be
    /// honored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if
    /// `MARKETPLACE_SIMULATED_LATENCY_MS` is set to a non-integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("MARKETPLACE_DATA_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let latency_ms = match std::env::var("MARKETPLACE_SIMULATED_LATENCY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "MARKETPLACE_SIMULATED_LATENCY_MS",
                    value: raw,
                })?,
            Err(_) => DEFAULT_SIMULATED_LATENCY_MS,
        };

        Ok(Self {
            data_dir,
            simulated_latency: Duration::from_millis(latency_ms),
        })
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }
}
