#![cfg(test)]

use super::*;
use serde_json::json;
use crate::app::endpoint::Endpoints;
use crate::app::location::LocationQuery;
use crate::app::WeatherAggregator;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[actix_web::test]
async fn test_fetch_returns_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("zip", "10001"))
        .and(query_param("appid", "XYZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": {"temp": 25},
            "weather": [{"main": "Clear"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = AwcFetcher::default()
        .fetch(format!("{}/data/2.5/weather?zip=10001&appid=XYZ", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body["main"]["temp"], json!(25));
    assert_eq!(body["weather"][0]["main"], json!("Clear"));
}

#[actix_web::test]
async fn test_fetch_maps_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"cod": 401, "message": "Invalid API key"})))
        .mount(&mock_server)
        .await;

    let err = AwcFetcher::default()
        .fetch(format!("{}/data/2.5/forecast?zip=1&appid=bad", mock_server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err, WeatherError::upstream("Request failed with status code 401"));
}

#[actix_web::test]
async fn test_fetch_rejects_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&mock_server)
        .await;

    let err = AwcFetcher::default()
        .fetch(format!("{}/weather?zip=1&appid=k", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        WeatherError::UpstreamFailure { .. } => {}
        other => panic!("unexpected error {:?}", other),
    }
}

#[actix_web::test]
async fn test_fetch_maps_transport_error() {
    let err = AwcFetcher::default()
        .fetch(String::from("http://127.0.0.1:1/weather?zip=1&appid=k"))
        .await
        .unwrap_err();

    match err {
        WeatherError::UpstreamFailure { message } => assert!(!message.is_empty()),
        other => panic!("unexpected error {:?}", other),
    }
}

#[actix_web::test]
async fn test_zip_with_space_and_non_ascii_reaches_provider() {
    let mock_server = MockServer::start().await;

    for zip in &["SW1A 1AA,GB", "Köln"] {
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("zip", *zip))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"main": {"temp": 11.5}, "weather": [{"main": "Rain"}]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("zip", *zip))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let aggregator = WeatherAggregator::new(
        Endpoints::new(&mock_server.uri(), String::from("XYZ")),
        Box::new(AwcFetcher::default()),
    );

    for zip in &["SW1A 1AA,GB", "Köln"] {
        let weather = aggregator.get_weather(&LocationQuery::zip(zip)).await.unwrap();

        assert_eq!(weather.current_weather.temperature, 11.5);
        assert!(weather.forecast.is_empty());
    }
}
