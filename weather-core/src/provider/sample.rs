use async_trait::async_trait;
use chrono::Local;

use crate::{WeatherData, WeatherRequest, error::WeatherError, sample};

use super::WeatherProvider;

/// Offline provider that answers from the static sample table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

#[async_trait]
impl WeatherProvider for SampleProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherData, WeatherError> {
        sample::lookup(&request.city, Local::now().date_naive())
            .ok_or_else(|| WeatherError::NoSampleData(request.city.clone()))
    }
}
