//! Error types and handling for the `cuaca` library

use thiserror::Error;

/// Main error type for weather and region lookups
#[derive(Error, Debug)]
pub enum CuacaError {
    /// A request URL could not be constructed
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Transport-level failures (connection refused, timeout, TLS)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body did not have the expected shape
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Every tier of the location fallback chain failed
    #[error("Location lookup failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: Box<CuacaError>,
    },

    /// A newer lookup was started before this one finished
    #[error("Lookup {generation} was superseded by a newer request")]
    Superseded { generation: u64 },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl CuacaError {
    /// Create a new invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the location resolver should move on to the next tier.
    #[must_use]
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Decode { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CuacaError::InvalidRequest { .. } => {
                "Could not build the weather request. Please check the location name.".to_string()
            }
            CuacaError::Network { .. } => {
                "Unable to connect to the weather service. Please check your internet connection."
                    .to_string()
            }
            CuacaError::Decode { .. } => {
                "The weather service returned data that could not be read.".to_string()
            }
            CuacaError::Exhausted { .. } => {
                "Weather is not available for this location or any of its fallbacks.".to_string()
            }
            CuacaError::Superseded { .. } => "A newer lookup replaced this one.".to_string(),
            CuacaError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            CuacaError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
