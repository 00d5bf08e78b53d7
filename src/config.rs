// src/config.rs

/// API keys for the external collaborators. A missing variable becomes an
/// empty string — nothing is validated locally; the corresponding calls
/// simply fail at the collaborator boundary.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub openai_api_key: String,
    pub maps_key: String,
    pub weather_key: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            maps_key: std::env::var("GOOGLE_MAPS_KEY").unwrap_or_default(),
            weather_key: std::env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
        }
    }
}
