//! Weather provider seam and forecast fetching
//!
//! `WeatherProvider` abstracts the third-party weather API so the resolver
//! and the facade can run against OpenWeatherMap or a test double.

use async_trait::async_trait;
use tracing::debug;

use crate::models::{Coordinates, CurrentConditions, ForecastEntry, ForecastPoint, normalize_daily};

pub mod openweather;

pub use openweather::OpenWeatherClient;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a place name. The name is sent as-is
    /// (callers normalize it first).
    async fn current_by_city(&self, city: &str) -> crate::Result<CurrentConditions>;

    /// Raw 3-hour forecast series for a coordinate pair, in provider order.
    async fn forecast_series(&self, coordinates: Coordinates) -> crate::Result<Vec<ForecastPoint>>;
}

/// Fetch the forecast for `coordinates` and reduce it to one entry per day.
///
/// There is no fallback here: any provider error is returned unchanged.
pub async fn fetch_forecast<P>(provider: &P, coordinates: Coordinates) -> crate::Result<Vec<ForecastEntry>>
where
    P: WeatherProvider + ?Sized,
{
    let series = provider.forecast_series(coordinates).await?;
    let daily = normalize_daily(&series);
    debug!(
        "Reduced {} forecast points to {} days for ({})",
        series.len(),
        daily.len(),
        coordinates.format_coordinates()
    );
    Ok(daily)
}
