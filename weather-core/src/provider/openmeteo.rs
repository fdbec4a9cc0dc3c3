use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{WeatherError, truncate_body},
    model::{CurrentWeather, DailyForecast, WeatherCondition, WeatherData, WeatherRequest, round_temp},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: &str = "3";

/// Live forecasts from the Open-Meteo API (no key required).
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http: Client::new() }
    }

    async fn fetch_forecast(&self, request: &WeatherRequest) -> Result<OmForecastResponse, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let latitude = request.latitude.to_string();
        let longitude = request.longitude.to_string();

        debug!(city = %request.city, %latitude, %longitude, "requesting Open-Meteo forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("temperature_unit", "fahrenheit"),
                ("wind_speed_unit", "mph"),
                ("timezone", "auto"),
                ("forecast_days", FORECAST_DAYS),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

/// Daily values come as parallel arrays indexed by day.
#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: OmDaily,
}

impl OmForecastResponse {
    fn into_weather(self, request: &WeatherRequest) -> Result<WeatherData, WeatherError> {
        let OmDaily { time, weather_code, temperature_2m_max, temperature_2m_min } = self.daily;

        let days = time.len();
        if weather_code.len() != days || temperature_2m_max.len() != days || temperature_2m_min.len() != days {
            return Err(WeatherError::Malformed(format!(
                "daily arrays differ in length: time={}, weather_code={}, max={}, min={}",
                days,
                weather_code.len(),
                temperature_2m_max.len(),
                temperature_2m_min.len()
            )));
        }

        let forecast = time
            .iter()
            .zip(weather_code)
            .zip(temperature_2m_max.iter().zip(temperature_2m_min.iter()))
            .map(|((date, code), (max, min))| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|e| WeatherError::Malformed(format!("bad daily date '{date}': {e}")))?;
                Ok(DailyForecast {
                    date,
                    max_temp: round_temp(*max),
                    min_temp: round_temp(*min),
                    condition: WeatherCondition::from_code(code),
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        let current = self.current;

        Ok(WeatherData {
            city: request.city.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            current: CurrentWeather {
                temperature: round_temp(current.temperature_2m),
                feels_like: round_temp(current.apparent_temperature),
                humidity: current.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
                wind_speed: current.wind_speed_10m,
                condition: WeatherCondition::from_code(current.weather_code),
            },
            forecast,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherData, WeatherError> {
        self.fetch_forecast(request).await?.into_weather(request)
    }
}
