//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Shared domain models (cities, conditions, current weather, forecasts)
//! - The Open-Meteo client and the offline sample provider
//! - Fetch-with-fallback and geocoding helpers
//! - Preferences (units, theme) and their on-disk configuration
//! - Calendar and world clock helpers
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod calendar;
pub mod cities;
pub mod codes;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod geocode;
pub mod model;
pub mod provider;
pub mod sample;
pub mod units;

pub use config::Config;
pub use error::WeatherError;
pub use fetcher::WeatherFetcher;
pub use geocode::{Geocoder, GeocodingResult};
pub use model::{
    City, CurrentWeather, DailyForecast, DataSource, WeatherCondition, WeatherData, WeatherReport,
    WeatherRequest,
};
pub use provider::{ProviderId, WeatherProvider};
pub use units::{TemperatureUnit, Theme};
