//! Integration tests for WeatherClient and WeatherProvider using wiremock.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use skyglass_weather::{
    Backoff, DataSource, LocationQuery, WeatherCache, WeatherClient, WeatherError,
    WeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a forecast.json body
fn forecast_body(name: &str, condition: &str, temp_c: f64) -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": name,
            "region": "",
            "country": "United Kingdom",
            "lat": 51.52,
            "lon": -0.11,
            "localtime": "2025-05-17 14:05"
        },
        "current": {
            "temp_c": temp_c,
            "feelslike_c": temp_c - 1.0,
            "is_day": 1,
            "condition": { "text": condition },
            "wind_kph": 9.0,
            "wind_dir": "SW",
            "pressure_mb": 1012.0,
            "precip_mm": 0.1,
            "humidity": 70,
            "vis_km": 10.0,
            "uv": 3.0
        },
        "forecast": { "forecastday": [
            {
                "date": "2025-05-17",
                "day": { "maxtemp_c": 22.0, "mintemp_c": 11.0, "condition": { "text": condition } },
                "hour": [
                    { "time": "2025-05-17 14:00", "temp_c": 21.0, "condition": { "text": condition } },
                    { "time": "2025-05-17 15:00", "temp_c": 21.5, "condition": { "text": "Cloudy" } }
                ]
            },
            {
                "date": "2025-05-18",
                "day": { "maxtemp_c": 18.0, "mintemp_c": 9.0, "condition": { "text": "Light rain" } },
                "hour": []
            }
        ]}
    })
}

fn client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(&server.uri(), "test-key", Duration::from_secs(5))
        .unwrap()
        .with_backoff(Backoff::new(2, Duration::from_millis(1), Duration::from_millis(5)))
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "London"))
        .and(query_param("days", "3"))
        .and(query_param("aqi", "no"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(
            "London", "Sunny", 21.3,
        )))
        .mount(&mock_server)
        .await;

    let snapshot = client(&mock_server)
        .forecast(&LocationQuery::City("London".into()), 3)
        .await
        .unwrap();

    assert_eq!(snapshot.place.name, "London");
    assert_eq!(snapshot.current.condition_text, "Sunny");
    assert!((snapshot.current.temperature.celsius() - 21.3).abs() < 1e-9);
    assert_eq!(snapshot.forecast.len(), 2);
    assert_eq!(snapshot.today_hours().len(), 2);
}

#[tokio::test]
async fn test_coordinates_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "51.52,-0.11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(
            "London", "Overcast", 12.0,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = LocationQuery::coordinates(51.52, -0.11).unwrap();
    let snapshot = client(&mock_server).forecast(&query, 3).await.unwrap();
    assert_eq!(snapshot.current.condition_text, "Overcast");
}

#[tokio::test]
async fn test_unknown_city_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .forecast(&LocationQuery::City("Atlantis".into()), 3)
        .await;

    match result {
        Err(WeatherError::NotFound(message)) => assert_eq!(message, "No matching location found."),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_key_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "code": 2006, "message": "API key is invalid." }
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .forecast(&LocationQuery::City("London".into()), 3)
        .await;

    assert!(matches!(result, Err(WeatherError::Unauthorized(_))));
}

#[tokio::test]
async fn test_server_error_retried_then_reported() {
    let mock_server = MockServer::start().await;

    // 1 attempt + 2 retries
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .forecast(&LocationQuery::City("London".into()), 3)
        .await;

    match result {
        Err(WeatherError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "name": "London" }
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .forecast(&LocationQuery::City("London".into()), 3)
        .await;

    assert!(matches!(result, Err(WeatherError::Parse(_))));
}

#[tokio::test]
async fn test_provider_serves_second_call_from_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(
            "London", "Sunny", 21.3,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::new(client(&mock_server), WeatherCache::default(), 3);

    let first = provider
        .fetch(&LocationQuery::City("London".into()))
        .await
        .unwrap();
    assert_eq!(first.source, DataSource::Api);

    // Cache keys ignore case
    let second = provider
        .fetch(&LocationQuery::City("LONDON".into()))
        .await
        .unwrap();
    assert_eq!(second.source, DataSource::Cache);
    assert_eq!(second.snapshot, first.snapshot);
    assert_eq!(provider.cache().len(), 1);
}

#[tokio::test]
async fn test_provider_failure_is_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::new(client(&mock_server), WeatherCache::default(), 3);
    let query = LocationQuery::City("Atlantis".into());

    assert!(provider.fetch(&query).await.is_err());
    assert!(provider.fetch(&query).await.is_err());
    assert!(provider.cache().is_empty());
}

#[tokio::test]
async fn test_provider_rejects_blank_city() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::new(client(&mock_server), WeatherCache::default(), 3);
    let result = provider.fetch(&LocationQuery::City("   ".into())).await;

    assert!(matches!(result, Err(WeatherError::EmptyQuery)));
}
