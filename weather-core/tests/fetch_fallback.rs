//! End-to-end fetcher behaviour against a mock Open-Meteo server.

use chrono::NaiveDate;
use serde_json::json;
use weather_core::{DataSource, WeatherFetcher, provider::openmeteo::OpenMeteoProvider, sample};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn fetcher(server: &MockServer) -> WeatherFetcher {
    WeatherFetcher::new(Box::new(OpenMeteoProvider::new(server.uri()))).with_today(today())
}

#[tokio::test]
async fn live_response_is_rounded_and_ordered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "35.6762"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {
                "temperature_2m": 68.44,
                "relative_humidity_2m": 71,
                "apparent_temperature": 67.51,
                "weather_code": 80,
                "wind_speed_10m": 4.3
            },
            "daily": {
                "time": ["2026-10-17", "2026-10-18", "2026-10-19"],
                "weather_code": [3, 95, 0],
                "temperature_2m_max": [70.25, 72.5, 66.01],
                "temperature_2m_min": [60.6, 61.49, 59.5]
            }
        })))
        .mount(&server)
        .await;

    let report = fetcher(&server).fetch_report("Tokyo").await.unwrap();
    assert_eq!(report.source, DataSource::Live);

    let w = report.weather;
    assert_eq!(w.city, "Tokyo");
    assert_eq!(w.current.temperature, 68);
    assert_eq!(w.current.feels_like, 68);
    assert_eq!(w.current.condition.description, "Slight rain showers");

    let days: Vec<(String, i32, i32, i32)> = w
        .forecast
        .iter()
        .map(|d| (d.date.to_string(), d.max_temp, d.min_temp, d.condition.code))
        .collect();
    assert_eq!(
        days,
        [
            ("2026-10-17".to_string(), 70, 61, 3),
            ("2026-10-18".to_string(), 73, 61, 95),
            ("2026-10-19".to_string(), 66, 60, 0),
        ]
    );
}

#[tokio::test]
async fn server_error_falls_back_to_sample_for_every_seed_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server);
    for name in sample::cities() {
        let report = fetcher.fetch_report(name).await.unwrap();
        assert_eq!(report.source, DataSource::Sample);
        assert_eq!(Some(report.weather), sample::lookup(name, today()));
    }
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "current": {} })))
        .mount(&server)
        .await;

    let data = fetcher(&server).fetch("santorini").await.unwrap();
    assert_eq!(data.city, "Santorini");
    assert_eq!(data.current.wind_speed, 12.0);
}

#[tokio::test]
async fn unknown_city_is_none_and_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(fetcher(&server).fetch("Gotham").await.is_none());
}

#[tokio::test]
async fn unreachable_api_falls_back() {
    let fetcher = WeatherFetcher::new(Box::new(OpenMeteoProvider::new("http://127.0.0.1:1"))).with_today(today());
    let data = fetcher.fetch("Durham").await.unwrap();
    assert_eq!(data.current.temperature, 64);
}
