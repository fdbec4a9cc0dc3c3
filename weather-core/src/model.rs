use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codes;

/// A named place with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }
}

/// What the provider is asked for: a display name plus the coordinates to query.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&City> for WeatherRequest {
    fn from(city: &City) -> Self {
        Self { city: city.name.clone(), latitude: city.latitude, longitude: city.longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub code: i32,
    pub description: String,
}

impl WeatherCondition {
    /// Build a condition, resolving the description from the WMO code table.
    pub fn from_code(code: i32) -> Self {
        Self { code, description: codes::description(code).to_string() }
    }

    pub fn icon(&self) -> &'static str {
        codes::icon(self.code)
    }
}

/// Current conditions. Temperatures in °F, wind in mph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub wind_speed: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub max_temp: i32,
    pub min_temp: i32,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}

/// Where a [`WeatherData`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub source: DataSource,
    #[serde(flatten)]
    pub weather: WeatherData,
}

impl WeatherReport {
    pub fn is_sample(&self) -> bool {
        self.source == DataSource::Sample
    }
}

/// Round an upstream temperature to the integer the app works with.
pub(crate) fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_resolves_description() {
        let c = WeatherCondition::from_code(61);
        assert_eq!(c.description, "Slight rain");
        assert_eq!(WeatherCondition::from_code(1000).description, "Unknown");
    }

    #[test]
    fn round_temp_rounds_half_away_from_zero() {
        assert_eq!(round_temp(71.5), 72);
        assert_eq!(round_temp(71.49), 71);
        assert_eq!(round_temp(-0.5), -1);
        assert_eq!(round_temp(-3.4), -3);
    }

    #[test]
    fn request_from_city() {
        let city = City::new("Tokyo", 35.6762, 139.6503);
        let req = WeatherRequest::from(&city);
        assert_eq!(req.city, "Tokyo");
        assert_eq!(req.latitude, 35.6762);
    }
}
