//! `cuaca` - weather for Indonesian regencies
//!
//! This library resolves a province/regency selection into current weather
//! conditions and a daily forecast from OpenWeatherMap, falling back from the
//! regency to its province and then to the whole country when a name is not
//! known to the provider.

pub mod config;
pub mod error;
pub mod greeting;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod regions;
pub mod service;
pub mod weather;

// Re-export core types for public API
pub use config::CuacaConfig;
pub use error::CuacaError;
pub use greeting::Greeting;
pub use location_resolver::{LocationResolver, Resolution, ResolutionTier};
pub use models::{Coordinates, CurrentConditions, ForecastEntry, LocationQuery, Province, Regency};
pub use normalize::{normalize_province, normalize_regency};
pub use regions::{RegionClient, RegionSelection};
pub use service::{LookupState, WeatherEvent, WeatherReport, WeatherService, WeatherUpdate};
pub use weather::{OpenWeatherClient, WeatherProvider, fetch_forecast};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CuacaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
