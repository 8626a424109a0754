//! Configuration management for `cuaca`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::CuacaError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuacaConfig {
    /// Weather provider configuration
    pub weather: WeatherConfig,
    /// Administrative-division API configuration
    pub regions: RegionsConfig,
    /// Location fallback settings
    pub lookup: LookupConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the weather API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Administrative-division API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    /// Base URL serving `provinces.json` and `regencies/{id}.json`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Location fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Name queried when neither the regency nor the province resolves
    pub country_fallback: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_regions_base_url() -> String {
    "https://emsifa.github.io/api-wilayah-indonesia/api".to_string()
}

fn default_country_fallback() -> String {
    "Indonesia".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_regions_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            country_fallback: default_country_fallback(),
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

impl CuacaConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<&Path>) -> crate::Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.map(Path::to_path_buf).unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        } else if config_path.is_some() {
            return Err(CuacaError::config(format!(
                "Config file not found: {}",
                config_file.display()
            )));
        }

        // CUACA_WEATHER__API_KEY -> weather.api_key
        builder = builder.add_source(
            Environment::with_prefix("CUACA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CuacaError::config(format!("Failed to build configuration: {e}")))?;

        let mut config: CuacaConfig = settings
            .try_deserialize()
            .map_err(|e| CuacaError::config(format!("Failed to deserialize configuration: {e}")))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cuaca").join("config.toml"))
    }

    /// Apply default values to empty or zeroed fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_timeout();
        }
        if self.regions.base_url.is_empty() {
            self.regions.base_url = default_regions_base_url();
        }
        if self.regions.timeout_seconds == 0 {
            self.regions.timeout_seconds = default_timeout();
        }
        if self.lookup.country_fallback.trim().is_empty() {
            self.lookup.country_fallback = default_country_fallback();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the weather API key when one is provided
    pub fn validate_api_key(&self) -> crate::Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(CuacaError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                ));
            }

            if api_key.len() < 8 {
                return Err(CuacaError::config(
                    "Weather API key appears to be invalid (too short). Please check your API key.",
                ));
            }

            if api_key.len() > 100 {
                return Err(CuacaError::config(
                    "Weather API key appears to be invalid (too long). Please check your API key.",
                ));
            }
        }

        Ok(())
    }

    /// The API key, or a configuration error when it is missing
    pub fn require_api_key(&self) -> crate::Result<&str> {
        self.weather.api_key.as_deref().ok_or_else(|| {
            CuacaError::config(
                "Missing weather API key. Set weather.api_key or CUACA_WEATHER__API_KEY.",
            )
        })
    }

    fn validate_numeric_ranges(&self) -> crate::Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(CuacaError::config(
                "Weather API timeout cannot exceed 300 seconds",
            ));
        }

        if self.regions.timeout_seconds > 300 {
            return Err(CuacaError::config(
                "Region API timeout cannot exceed 300 seconds",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CuacaError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(CuacaError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        for (label, url) in [
            ("Weather API", &self.weather.base_url),
            ("Region API", &self.regions.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CuacaError::config(format!(
                    "{label} base URL must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        Ok(())
    }
}
