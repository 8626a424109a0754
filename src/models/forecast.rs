//! Forecast models and the one-entry-per-day normalizer

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One 3-hour sample from the provider's forecast series
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastPoint {
    /// Unix timestamp of the sample
    pub timestamp: i64,
    /// Provider timestamp text, `"YYYY-MM-DD HH:MM:SS"`
    pub timestamp_text: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Primary condition group, if the provider sent one
    pub condition_main: Option<String>,
    /// Icon id (e.g. "10d"), if the provider sent one
    pub icon_id: Option<String>,
}

impl ForecastPoint {
    /// Date portion of the timestamp: everything before the first space.
    #[must_use]
    pub fn date(&self) -> &str {
        self.timestamp_text
            .split(' ')
            .next()
            .unwrap_or_default()
    }
}

/// Representative forecast for one calendar date
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Date as `YYYY-MM-DD`
    pub date: String,
    /// Temperature in Celsius of the first sample of the day
    pub temperature_c: f64,
    /// Condition group of the first sample of the day
    pub condition_main: String,
    /// Icon id of the first sample of the day
    pub icon_id: String,
}

impl ForecastEntry {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }
}

impl From<&ForecastPoint> for ForecastEntry {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: point.date().to_string(),
            temperature_c: point.temperature_c,
            condition_main: point
                .condition_main
                .clone()
                .unwrap_or_else(|| "No description".to_string()),
            icon_id: point.icon_id.clone().unwrap_or_default(),
        }
    }
}

/// Reduce a forecast series to one entry per date.
///
/// The first point seen for a date wins; later points for that date are
/// dropped. Output order follows first appearance in `points`.
#[must_use]
pub fn normalize_daily(points: &[ForecastPoint]) -> Vec<ForecastEntry> {
    let mut seen: HashSet<&str> = HashSet::new();

    points
        .iter()
        .filter(|point| seen.insert(point.date()))
        .map(ForecastEntry::from)
        .collect()
}
