//! Fetch-or-fallback: live weather when possible, sample data otherwise.
//!
//! Every public method here returns `Option` and never an error. A failed
//! request is logged and replaced by the sample entry for the same city
//! name; only a city with neither live nor sample data yields `None`.

use chrono::{Local, NaiveDate};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::{
    cities,
    model::{City, DataSource, WeatherData, WeatherReport, WeatherRequest},
    provider::WeatherProvider,
    sample,
};

#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Box<dyn WeatherProvider>,
    today: Option<NaiveDate>,
}

impl WeatherFetcher {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, today: None }
    }

    /// Pin the date sample forecasts are computed from instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Weather for a seed city by name, or `None` if nothing is available.
    pub async fn fetch(&self, name: &str) -> Option<WeatherData> {
        self.fetch_report(name).await.map(|r| r.weather)
    }

    /// Weather for explicit coordinates; `name` is used for display and for the fallback.
    pub async fn fetch_at(&self, name: &str, latitude: f64, longitude: f64) -> Option<WeatherData> {
        self.fetch_report_at(name, latitude, longitude).await.map(|r| r.weather)
    }

    pub async fn fetch_report(&self, name: &str) -> Option<WeatherReport> {
        match cities::find(name) {
            Some(city) => self.fetch_report_at(&city.name, city.latitude, city.longitude).await,
            None => {
                debug!(city = name, "city not in seed list, using sample data");
                self.fallback(name)
            }
        }
    }

    pub async fn fetch_report_at(&self, name: &str, latitude: f64, longitude: f64) -> Option<WeatherReport> {
        let request = WeatherRequest { city: name.to_string(), latitude, longitude };

        match self.provider.get_weather(&request).await {
            Ok(weather) => {
                info!(city = name, "fetched live weather");
                Some(WeatherReport { source: DataSource::Live, weather })
            }
            Err(e) => {
                warn!(city = name, error = %e, "weather request failed, falling back to sample data");
                self.fallback(name)
            }
        }
    }

    /// Fetch several cities at once. Results keep the input order.
    pub async fn fetch_many(&self, cities: &[City]) -> Vec<(City, Option<WeatherReport>)> {
        let reports = join_all(
            cities.iter().map(|c| self.fetch_report_at(&c.name, c.latitude, c.longitude)),
        )
        .await;

        cities.iter().cloned().zip(reports).collect()
    }

    fn fallback(&self, name: &str) -> Option<WeatherReport> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let weather = sample::lookup(name, today);
        if weather.is_none() {
            warn!(city = name, "no live or sample weather available");
        }
        weather.map(|weather| WeatherReport { source: DataSource::Sample, weather })
    }
}
