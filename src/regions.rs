//! Region directory: provinces and regencies of Indonesia
//!
//! Backed by the static `api-wilayah-indonesia` JSON files. `RegionSelection`
//! holds what a picker UI needs: the loaded lists, the current choice and the
//! input check that gates a weather lookup.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::config::CuacaConfig;
use crate::models::{LocationQuery, Province, Regency};
use crate::CuacaError;

/// Administrative-division API client
#[derive(Debug, Clone)]
pub struct RegionClient {
    client: Client,
    base_url: String,
}

impl RegionClient {
    pub fn new(config: &CuacaConfig) -> crate::Result<Self> {
        Self::build(
            &config.regions.base_url,
            Duration::from_secs(config.regions.timeout_seconds.into()),
        )
    }

    pub fn with_base_url(base_url: &str) -> crate::Result<Self> {
        Self::build(base_url, Duration::from_secs(30))
    }

    fn build(base_url: &str, timeout: Duration) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cuaca/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CuacaError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// All provinces
    #[instrument(skip(self))]
    pub async fn provinces(&self) -> crate::Result<Vec<Province>> {
        let provinces: Vec<Province> = self.get_json("provinces.json").await?;
        info!("Loaded {} provinces", provinces.len());
        Ok(provinces)
    }

    /// Regencies and cities of one province
    #[instrument(skip(self))]
    pub async fn regencies(&self, province_id: &str) -> crate::Result<Vec<Regency>> {
        if province_id.trim().is_empty() {
            return Err(CuacaError::validation("Province id cannot be empty"));
        }

        let path = format!("regencies/{}.json", urlencoding::encode(province_id));
        let regencies: Vec<Regency> = self.get_json(&path).await?;
        info!("Loaded {} regencies for province {}", regencies.len(), province_id);
        Ok(regencies)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("Region API request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CuacaError::network(format!("Error fetching data: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CuacaError::network(format!(
                "Region API returned status: {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CuacaError::decode(format!("Error decoding JSON: {e}")))
    }
}

/// Province/regency choice backing a picker
#[derive(Debug, Clone, Default)]
pub struct RegionSelection {
    provinces: Vec<Province>,
    regencies: Vec<Regency>,
    selected_province: Option<usize>,
    selected_regency: Option<usize>,
}

impl RegionSelection {
    #[must_use]
    pub fn new(provinces: Vec<Province>) -> Self {
        Self {
            provinces,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    #[must_use]
    pub fn regencies(&self) -> &[Regency] {
        &self.regencies
    }

    /// Select a province by index. Clears any regency choice; the caller
    /// loads that province's regencies and hands them to `set_regencies`.
    pub fn select_province(&mut self, index: usize) -> crate::Result<&Province> {
        let province = self.provinces.get(index).ok_or_else(|| {
            CuacaError::validation(format!(
                "Province index {index} out of range ({} provinces)",
                self.provinces.len()
            ))
        })?;

        self.selected_province = Some(index);
        self.selected_regency = None;
        self.regencies.clear();
        Ok(province)
    }

    pub fn set_regencies(&mut self, regencies: Vec<Regency>) {
        self.regencies = regencies;
        self.selected_regency = None;
    }

    pub fn select_regency(&mut self, index: usize) -> crate::Result<&Regency> {
        let regency = self.regencies.get(index).ok_or_else(|| {
            CuacaError::validation(format!(
                "Regency index {index} out of range ({} regencies)",
                self.regencies.len()
            ))
        })?;

        self.selected_regency = Some(index);
        Ok(regency)
    }

    #[must_use]
    pub fn selected_province(&self) -> Option<&Province> {
        self.selected_province.and_then(|i| self.provinces.get(i))
    }

    #[must_use]
    pub fn selected_regency(&self) -> Option<&Regency> {
        self.selected_regency.and_then(|i| self.regencies.get(i))
    }

    /// A lookup may start once the user entered a name and picked both a
    /// province and a regency.
    #[must_use]
    pub fn validate(&self, name: Option<&str>) -> bool {
        matches!(name, Some(n) if !n.is_empty())
            && self.selected_province().is_some()
            && self.selected_regency().is_some()
    }

    /// Build the lookup query for the current selection.
    pub fn to_query(&self) -> crate::Result<LocationQuery> {
        let regency = self
            .selected_regency()
            .ok_or_else(|| CuacaError::validation("No regency selected"))?;
        let province = self.selected_province().map(|p| p.name.clone());
        LocationQuery::new(regency.name.clone(), province)
    }
}
