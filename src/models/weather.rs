//! Current conditions model and display methods

use super::Coordinates;
use serde::{Deserialize, Serialize};

/// Current weather for a resolved place. Temperatures are Celsius
/// because every request is sent with `units=metric`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Perceived temperature in Celsius
    pub feels_like_c: f64,
    /// Minimum currently observed temperature in Celsius
    pub temp_min_c: f64,
    /// Maximum currently observed temperature in Celsius
    pub temp_max_c: f64,
    /// Relative humidity in percent
    pub humidity_pct: i64,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: i64,
    /// Condition group (e.g. "Rain", "Clouds")
    pub condition_main: String,
    /// Condition detail (e.g. "light rain")
    pub condition_description: String,
    /// City name as reported by the provider
    pub city_name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
    /// Coordinates of the place the provider matched; drives the forecast fetch
    pub coordinates: Coordinates,
}

impl CurrentConditions {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    /// Format the min/max range with unit
    #[must_use]
    pub fn format_range(&self) -> String {
        format!("{:.1}°C / {:.1}°C", self.temp_min_c, self.temp_max_c)
    }

    /// Format atmospheric pressure with unit
    #[must_use]
    pub fn format_pressure(&self) -> String {
        format!("{} hPa", self.pressure_hpa)
    }

    /// City name with country suffix when known
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.city_name, country),
            _ => self.city_name.clone(),
        }
    }
}
