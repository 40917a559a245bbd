//! Configuration management for `akweather`
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `AKWEATHER_`-prefixed environment variables, in increasing priority.

use crate::WeatherReportError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Weather Underground API key
    pub api_key: Option<String>,
    /// Base URL the key, feature and query are appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Plain-text marine forecast feed
    #[serde(default = "default_marine_forecast_url")]
    pub marine_forecast_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_api_base_url() -> String {
    "http://api.wunderground.com/api".to_string()
}

fn default_marine_forecast_url() -> String {
    "http://tgftp.nws.noaa.gov/data/raw/fz/fzak51.pafc.cwf.aer.txt".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            marine_forecast_url: default_marine_forecast_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from `config_path`, or from the default location
    /// when none is given, with environment overrides on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                // An explicitly requested file has to exist.
                builder = builder.add_source(
                    File::from(path)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                if let Some(path) = Self::get_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(
                        File::from(path)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("AKWEATHER")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: ReportConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("akweather").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(WeatherReportError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                ));
            }
        }

        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(WeatherReportError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            ));
        }

        for (name, url) in [
            ("api_base_url", &self.weather.api_base_url),
            ("marine_forecast_url", &self.weather.marine_forecast_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherReportError::config(format!(
                    "weather.{name} must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherReportError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherReportError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }

    /// The API key, or a configuration error naming how to supply it
    pub fn require_api_key(&self) -> crate::Result<&str> {
        self.weather.api_key.as_deref().ok_or_else(|| {
            WeatherReportError::config(
                "Weather API key is required. Set AKWEATHER_WEATHER__API_KEY or weather.api_key in the config file.",
            )
        })
    }
}
