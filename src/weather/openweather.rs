//! OpenWeatherMap client
//!
//! Current conditions come from `/weather?q=` and the 5 day / 3 hour series
//! from `/forecast?lat=&lon=`. Both are requested with `units=metric`, so
//! every temperature the client returns is Celsius.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::WeatherProvider;
use crate::config::CuacaConfig;
use crate::models::{Coordinates, CurrentConditions, ForecastPoint};
use crate::CuacaError;

const USER_AGENT: &str = concat!("cuaca/", env!("CARGO_PKG_VERSION"));

/// OpenWeatherMap API client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Create a client from configuration. Fails when no API key is configured.
    pub fn new(config: &CuacaConfig) -> crate::Result<Self> {
        let api_key = config.require_api_key()?;
        Self::build(
            api_key,
            &config.weather.base_url,
            Duration::from_secs(config.weather.timeout_seconds.into()),
        )
    }

    /// Create a client against an explicit base URL (mock servers, proxies).
    pub fn with_base_url(api_key: &str, base_url: &str) -> crate::Result<Self> {
        Self::build(api_key, base_url, Duration::from_secs(30))
    }

    fn build(api_key: &str, base_url: &str, timeout: Duration) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CuacaError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/{endpoint}` with every query pair form-encoded, the API key included.
    fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> crate::Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| CuacaError::invalid_request(format!("{e}: {endpoint}")))?;

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("units", "metric")
            .append_pair("appid", &self.api_key);
        Ok(url)
    }

    fn current_url(&self, city: &str) -> crate::Result<Url> {
        self.endpoint_url("weather", &[("q", city)])
    }

    fn forecast_url(&self, coordinates: Coordinates) -> crate::Result<Url> {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        self.endpoint_url("forecast", &[("lat", &lat), ("lon", &lon)])
    }

    /// GET `url` and decode the JSON body. `label` is logged instead of the
    /// URL so the API key never reaches the logs.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, label: &str) -> crate::Result<T> {
        let start_time = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CuacaError::network(format!("{label}: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| CuacaError::network(format!("{label}: failed to read body: {e}")))?;

        debug!(
            "{} answered {} in {:.3}s ({} bytes)",
            label,
            status,
            start_time.elapsed().as_secs_f64(),
            body.len()
        );

        // error payloads ({"cod":"404","message":"city not found"}) do not match
        // the expected shape and are reported as decode failures
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            warn!("{} returned HTTP {}: {}", label, status, text);
            return Err(CuacaError::decode(format!(
                "{label}: HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        serde_json::from_slice(&body)
            .map_err(|e| CuacaError::decode(format!("{label}: {e}")))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> crate::Result<CurrentConditions> {
        let url = self.current_url(city)?;
        let response: wire::CurrentResponse = self
            .get_json(url, &format!("current weather for '{city}'"))
            .await?;

        let conditions = CurrentConditions::from(response);
        info!(
            "Current weather for '{}': {} at ({})",
            city,
            conditions.city_name,
            conditions.coordinates.format_coordinates()
        );
        Ok(conditions)
    }

    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn forecast_series(&self, coordinates: Coordinates) -> crate::Result<Vec<ForecastPoint>> {
        let url = self.forecast_url(coordinates)?;
        let response: wire::ForecastResponse = self
            .get_json(
                url,
                &format!("forecast for ({})", coordinates.format_coordinates()),
            )
            .await?;

        let points: Vec<ForecastPoint> = response.list.into_iter().map(ForecastPoint::from).collect();
        info!("Retrieved {} forecast points", points.len());
        Ok(points)
    }
}

/// OpenWeatherMap response structures and conversion to the internal models
mod wire {
    use crate::models::{Coordinates, CurrentConditions, ForecastPoint};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub coord: Coord,
        pub name: String,
        #[serde(default)]
        pub weather: Vec<Condition>,
        pub main: Main,
        pub sys: Sys,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub main: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub icon: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        pub feels_like: f64,
        pub temp_min: f64,
        pub temp_max: f64,
        pub pressure: i64,
        pub humidity: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        pub country: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt: i64,
        pub dt_txt: String,
        pub main: ForecastMain,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }

    impl From<CurrentResponse> for CurrentConditions {
        fn from(response: CurrentResponse) -> Self {
            let condition = response.weather.into_iter().next();
            let (condition_main, condition_description) = match condition {
                Some(c) => (c.main, c.description),
                None => ("Unknown".to_string(), "No description".to_string()),
            };

            Self {
                temperature_c: response.main.temp,
                feels_like_c: response.main.feels_like,
                temp_min_c: response.main.temp_min,
                temp_max_c: response.main.temp_max,
                humidity_pct: response.main.humidity,
                pressure_hpa: response.main.pressure,
                condition_main,
                condition_description,
                city_name: response.name,
                country: Some(response.sys.country),
                coordinates: Coordinates::new(response.coord.lat, response.coord.lon),
            }
        }
    }

    impl From<ForecastItem> for ForecastPoint {
        fn from(item: ForecastItem) -> Self {
            let condition = item.weather.into_iter().next();
            Self {
                timestamp: item.dt,
                timestamp_text: item.dt_txt,
                temperature_c: item.main.temp,
                condition_main: condition.as_ref().map(|c| c.main.clone()),
                icon_id: condition.and_then(|c| c.icon),
            }
        }
    }
}
