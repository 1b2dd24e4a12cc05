//! Configuration management for the FarmHelp client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARMHELP__ prefix

use config::{Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Prediction service configuration
    pub service: ServiceConfig,

    /// Output configuration
    pub display: DisplayConfig,

    /// Log output format
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Site root hosting `/predict`
    pub base_url: String,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Add N/P/K commentary to description and tips
    pub enrich: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let environment =
            std::env::var("FARMHELP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        Self::load_for(&environment)
    }

    /// Load configuration for a named environment
    pub fn load_for(environment: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment)?
            .set_default("service.base_url", "http://127.0.0.1:5000")?
            .set_default("display.enrich", true)?
            .set_default("log_format", "pretty")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMHELP__ prefix)
            .add_source(
                Environment::with_prefix("FARMHELP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Log the loaded configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  environment  : {}", self.environment);
        tracing::info!("  base_url     : {}", self.service.base_url);
        match self.service.timeout_secs {
            Some(secs) => tracing::info!("  timeout_secs : {}", secs),
            None => tracing::info!("  timeout_secs : (none)"),
        }
        tracing::info!("  enrich       : {}", self.display.enrich);
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: None,
        }
    }
}
