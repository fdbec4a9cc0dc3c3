//! Hand-authored weather for the seed cities, used when live data is unavailable.
//!
//! Temperatures in °F, wind in mph. Forecast days start tomorrow.

use chrono::{Days, NaiveDate};

use crate::model::{CurrentWeather, DailyForecast, WeatherCondition, WeatherData};

struct SampleCity {
    key: &'static str,
    city: &'static str,
    latitude: f64,
    longitude: f64,
    /// temperature, feels like, humidity, wind, code
    current: (i32, i32, u8, f64, i32),
    /// max, min, code for tomorrow onward
    days: [(i32, i32, i32); 3],
}

const SAMPLES: &[SampleCity] = &[
    SampleCity {
        key: "durham",
        city: "Durham",
        latitude: 35.9940,
        longitude: -78.8986,
        current: (64, 61, 65, 7.0, 2),
        days: [(72, 57, 1), (75, 61, 0), (68, 59, 61)],
    },
    SampleCity {
        key: "new york",
        city: "New York",
        latitude: 40.7128,
        longitude: -74.0060,
        current: (59, 55, 72, 11.0, 3),
        days: [(63, 54, 61), (66, 55, 2), (70, 57, 1)],
    },
    SampleCity {
        key: "tokyo",
        city: "Tokyo",
        latitude: 35.6762,
        longitude: 139.6503,
        current: (72, 70, 58, 5.0, 1),
        days: [(77, 66, 0), (79, 68, 2), (73, 64, 63)],
    },
    SampleCity {
        key: "accra",
        city: "Accra",
        latitude: 5.6037,
        longitude: -0.1870,
        current: (86, 91, 78, 9.0, 2),
        days: [(88, 77, 61), (87, 76, 3), (85, 75, 80)],
    },
    SampleCity {
        key: "lausanne",
        city: "Lausanne",
        latitude: 46.5197,
        longitude: 6.6323,
        current: (52, 48, 68, 8.0, 3),
        days: [(55, 45, 61), (59, 48, 2), (61, 50, 1)],
    },
    SampleCity {
        key: "santorini",
        city: "Santorini",
        latitude: 36.3932,
        longitude: 25.4615,
        current: (68, 66, 62, 12.0, 1),
        days: [(71, 63, 0), (73, 65, 1), (70, 64, 2)],
    },
];

/// Names of every city that has a sample entry.
pub fn cities() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|s| s.city)
}

/// Sample weather for `name` (case-insensitive), with forecast dates relative to `today`.
pub fn lookup(name: &str, today: NaiveDate) -> Option<WeatherData> {
    let key = name.trim().to_lowercase();
    SAMPLES.iter().find(|s| s.key == key).map(|s| s.to_weather(today))
}

impl SampleCity {
    fn to_weather(&self, today: NaiveDate) -> WeatherData {
        let (temperature, feels_like, humidity, wind_speed, code) = self.current;

        let forecast = self
            .days
            .iter()
            .zip(1u64..)
            .map(|(&(max_temp, min_temp, code), offset)| DailyForecast {
                date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                max_temp,
                min_temp,
                condition: WeatherCondition::from_code(code),
            })
            .collect();

        WeatherData {
            city: self.city.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            current: CurrentWeather {
                temperature,
                feels_like,
                humidity,
                wind_speed,
                condition: WeatherCondition::from_code(code),
            },
            forecast,
        }
    }
}
