//! Forward geocoding: free-text city name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::{WeatherError, truncate_body},
    model::City,
};

pub const DEFAULT_BASE_URL: &str = "https://geocoding-api.open-meteo.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    /// State or region, when the API knows it.
    #[serde(default)]
    pub admin1: Option<String>,
}

impl GeocodingResult {
    pub fn city(&self) -> City {
        City::new(self.name.clone(), self.latitude, self.longitude)
    }

    /// "Name, Region, Country", skipping empty parts.
    pub fn display_name(&self) -> String {
        [Some(self.name.as_str()), self.admin1.as_deref(), Some(self.country.as_str())]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    base_url: String,
    http: Client,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Geocoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http: Client::new() }
    }

    /// Best match for `name`, or `None` when nothing matched or the lookup failed.
    pub async fn geocode(&self, name: &str) -> Option<GeocodingResult> {
        match self.search(name).await {
            Ok(Some(found)) => {
                info!(
                    query = name,
                    "found {}, {} at {}, {}", found.name, found.country, found.latitude, found.longitude
                );
                Some(found)
            }
            Ok(None) => {
                debug!(query = name, "no geocoding results");
                None
            }
            Err(e) => {
                warn!(query = name, error = %e, "geocoding failed");
                None
            }
        }
    }

    async fn search(&self, name: &str) -> Result<Option<GeocodingResult>, WeatherError> {
        let url = format!("{}/v1/search", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("name", name), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        let parsed: GeocodingResponse = serde_json::from_str(&body)?;
        Ok(parsed.results.and_then(|r| r.into_iter().next()))
    }
}
