//! Location query and coordinate models

use crate::CuacaError;
use serde::{Deserialize, Serialize};

/// A regency to look up, optionally with the province it belongs to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// Regency name as shown by the region directory (e.g. "KABUPATEN BANDUNG")
    pub regency_name: String,
    /// Province name used by the first fallback tier
    pub province_name: Option<String>,
}

impl LocationQuery {
    /// Create a query, rejecting blank regency names
    pub fn new(
        regency_name: impl Into<String>,
        province_name: Option<String>,
    ) -> crate::Result<Self> {
        let regency_name = regency_name.into();
        if regency_name.trim().is_empty() {
            return Err(CuacaError::validation("Regency name cannot be empty"));
        }

        Ok(Self {
            regency_name,
            province_name: province_name.filter(|p| !p.trim().is_empty()),
        })
    }
}

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
