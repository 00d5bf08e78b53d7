// src/lookups/maps.rs

use serde_json::Value;

use crate::lookups::{get_json, GeoPoint, LookupOutcome};

/// Result of a geocode lookup. Carries the point separately from `ok` so
/// callers can short-circuit downstream lookups on `ok=false` without
/// touching the payload.
#[derive(Clone, Debug)]
pub struct Geocoded {
    pub ok: bool,
    pub point: Option<GeoPoint>,
}

impl Geocoded {
    fn failure() -> Self {
        Self {
            ok: false,
            point: None,
        }
    }
}

/// Client for the Google Maps geocoding, directions, and nearby-search APIs.
pub struct MapsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl MapsClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com";
    pub const DEFAULT_RADIUS: u32 = 3000;
    pub const DEFAULT_CATEGORY: &'static str = "tourist_attraction";

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

    /// Resolves a place name to coordinates via the first geocode result.
    /// An empty result set counts as failure.
    pub fn geocode(&self, address: &str) -> Geocoded {
        let url = format!("{}/maps/api/geocode/json", self.base_url);
        let Some(payload) = get_json(
            &self.http,
            &url,
            &[("address", address), ("key", &self.api_key)],
        ) else {
            return Geocoded::failure();
        };

        match first_result_location(&payload) {
            Some(point) => Geocoded {
                ok: true,
                point: Some(point),
            },
            None => {
                tracing::debug!(address, "geocode returned no usable results");
                Geocoded::failure()
            }
        }
    }

    /// Confirms a drivable route exists between two place names.
    pub fn route(&self, origin: &str, destination: &str) -> LookupOutcome {
        let url = format!("{}/maps/api/directions/json", self.base_url);
        match get_json(
            &self.http,
            &url,
            &[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("key", &self.api_key),
            ],
        ) {
            Some(payload) => LookupOutcome::success(payload),
            None => LookupOutcome::failure(),
        }
    }

    /// Nearby points of interest around the given coordinates.
    pub fn places(&self, point: GeoPoint, radius: u32, category: &str) -> LookupOutcome {
        let url = format!("{}/maps/api/place/nearbysearch/json", self.base_url);
        let location = format!("{},{}", point.lat, point.lon);
        let radius = radius.to_string();
        match get_json(
            &self.http,
            &url,
            &[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", category),
                ("key", &self.api_key),
            ],
        ) {
            Some(payload) => LookupOutcome::success(payload),
            None => LookupOutcome::failure(),
        }
    }
}

fn first_result_location(payload: &Value) -> Option<GeoPoint> {
    let location = payload
        .get("results")?
        .as_array()?
        .first()?
        .get("geometry")?
        .get("location")?;
    Some(GeoPoint {
        lat: location.get("lat")?.as_f64()?,
        lon: location.get("lng")?.as_f64()?,
    })
}
