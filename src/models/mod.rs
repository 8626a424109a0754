//! Data models for the cuaca library
//!
//! This module contains the core domain models organized by concern:
//! - Location: lookup queries and coordinates
//! - Weather: current conditions returned by the provider
//! - Forecast: per-day forecast entries and the daily normalizer
//! - Region: Indonesian provinces and regencies

pub mod forecast;
pub mod location;
pub mod region;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{ForecastEntry, ForecastPoint, normalize_daily};
pub use location::{Coordinates, LocationQuery};
pub use region::{Province, Regency};
pub use weather::CurrentConditions;
