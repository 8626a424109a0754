//! Shared fixtures for the wiremock-backed tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test_api_key_123";

/// An OpenWeatherMap `/weather` body for `name` at (`lat`, `lon`)
pub fn current_body(name: &str, lat: f64, lon: f64) -> Value {
    json!({
        "coord": {"lon": lon, "lat": lat},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 27.4,
            "feels_like": 30.2,
            "temp_min": 26.9,
            "temp_max": 28.1,
            "pressure": 1009,
            "humidity": 78
        },
        "sys": {"country": "ID"},
        "name": name,
        "cod": 200
    })
}

/// A `/forecast` body spanning two dates, three points
pub fn forecast_body() -> Value {
    json!({
        "cod": "200",
        "cnt": 3,
        "list": [
            {
                "dt": 1_733_529_600,
                "main": {"temp": 24.1, "feels_like": 24.9, "temp_min": 24.1, "temp_max": 24.1,
                         "pressure": 1010, "humidity": 88},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10n"}],
                "dt_txt": "2024-12-07 00:00:00"
            },
            {
                "dt": 1_733_540_400,
                "main": {"temp": 29.3, "feels_like": 32.0, "temp_min": 29.3, "temp_max": 29.3,
                         "pressure": 1009, "humidity": 70},
                "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
                "dt_txt": "2024-12-07 03:00:00"
            },
            {
                "dt": 1_733_616_000,
                "main": {"temp": 23.8, "feels_like": 24.5, "temp_min": 23.8, "temp_max": 23.8,
                         "pressure": 1011, "humidity": 90},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01n"}],
                "dt_txt": "2024-12-08 00:00:00"
            }
        ]
    })
}

pub fn city_not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"}))
}

/// Mount a `/weather?q=<city>` mock expected to be hit exactly `times` times
pub async fn mount_current(server: &MockServer, city: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mount a `/forecast` mock for exact coordinates
pub async fn mount_forecast(server: &MockServer, lat: &str, lon: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", lat))
        .and(query_param("lon", lon))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
