// src/lookups/weather.rs

use crate::lookups::{get_json, GeoPoint, LookupOutcome, Units};

/// Client for the OpenWeather current-conditions API.
pub struct WeatherClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openweathermap.org";

    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Current weather at the given coordinates.
    pub fn current(&self, point: GeoPoint, units: Units) -> LookupOutcome {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let lat = point.lat.to_string();
        let lon = point.lon.to_string();
        match get_json(
            &self.http,
            &url,
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", units.as_str()),
            ],
        ) {
            Some(payload) => LookupOutcome::success(payload),
            None => LookupOutcome::failure(),
        }
    }
}
