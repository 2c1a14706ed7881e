use crate::cli::tests::fake_args;
use crate::config::Config;
use crate::openweather::errors::UpstreamError;
use crate::openweather::models::GeocodingMatch;
use crate::openweather::OpenWeatherClient;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(upstream_url: &str) -> OpenWeatherClient {
    let config = Config::from_args(&fake_args(upstream_url)).expect("Failed to build config.");
    OpenWeatherClient::new(Arc::new(config)).expect("Failed to build OpenWeather client.")
}

#[tokio::test]
async fn test_geocode_sends_location_limit_and_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "New York"))
        .and(query_param("limit", "1"))
        .and(query_param("appid", "testKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "New York", "lat": 40.71, "lon": -74.0, "country": "US"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let matches = client_for(&mock_server.uri())
        .geocode("New York")
        .await
        .expect("Geocoding request failed.");

    assert_eq!(
        matches,
        vec![GeocodingMatch {
            lat: 40.71,
            lon: -74.0
        }]
    );
}

#[tokio::test]
async fn test_forecast_sends_coordinates_units_and_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lon", "-0.12"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "testKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cnt": 0, "list": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let forecast = client_for(&mock_server.uri())
        .forecast(51.5, -0.12)
        .await
        .expect("Forecast request failed.");

    assert_eq!(forecast, json!({"cnt": 0, "list": []}));
}

#[tokio::test]
async fn test_error_status_does_not_leak_api_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server.uri())
        .forecast(0.0, 0.0)
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Request(_)));
    assert!(err.to_string().contains("401"));
    assert!(!err.to_string().contains("testKey"));
}

#[tokio::test]
async fn test_non_json_body_is_a_request_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server.uri());

    let geocode_err = client.geocode("London").await.unwrap_err();
    let forecast_err = client.forecast(51.5, -0.12).await.unwrap_err();

    assert!(matches!(geocode_err, UpstreamError::Request(_)));
    assert!(matches!(forecast_err, UpstreamError::Request(_)));
    assert!(!geocode_err.to_string().contains("testKey"));
}

#[tokio::test]
async fn test_match_without_coordinates_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "London"}])))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server.uri())
        .geocode("London")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Decode(_)));
    assert!(err.to_string().contains("lat"));
}
