// src/lookups/mod.rs

use serde_json::Value;

/// The outcome of one external lookup. `ok=false` covers transport errors,
/// non-success statuses, and empty result sets alike; the payload must not
/// be trusted unless `ok` is true. Lookups never raise.
#[derive(Clone, Debug)]
pub struct LookupOutcome {
    pub ok: bool,
    pub payload: Value,
}

impl LookupOutcome {
    pub fn success(payload: Value) -> Self {
        Self { ok: true, payload }
    }

    pub fn failure() -> Self {
        Self {
            ok: false,
            payload: Value::Null,
        }
    }
}

/// Coordinates from a successful geocode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Unit system for the weather lookup. Anything unrecognized falls back to
/// metric, matching the entry point's default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "imperial" => Units::Imperial,
            _ => Units::Metric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

/// GET the url with the given query pairs and decode the body as JSON.
/// Any failure along the way becomes `None`.
fn get_json(http: &reqwest::blocking::Client, url: &str, query: &[(&str, &str)]) -> Option<Value> {
    let response = match http.get(url).query(query).send() {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(url, error = %err, "lookup request failed");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(url, status = %response.status(), "lookup returned non-success status");
        return None;
    }

    match response.json::<Value>() {
        Ok(payload) => Some(payload),
        Err(err) => {
            tracing::debug!(url, error = %err, "lookup body was not JSON");
            None
        }
    }
}

pub mod maps;
pub mod weather;

pub use maps::{Geocoded, MapsClient};
pub use weather::WeatherClient;
