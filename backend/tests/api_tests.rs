//! HTTP contract tests for `GET /weather/:cep`

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use weather_backend::{create_app, AppState, Config};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(providers: &MockServer) -> Router {
    let vars: HashMap<String, String> = [
        ("WEATHER_API_KEY", "test-key".to_string()),
        ("WEATHER_B__GEOCODING__API_ENDPOINT", format!("{}/ws", providers.uri())),
        ("WEATHER_B__WEATHER__API_ENDPOINT", format!("{}/v1", providers.uri())),
        ("WEATHER_B__HTTP__TIMEOUT_SECS", "5".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let config = Config::load_from_env(vars).unwrap();
    create_app(AppState::from_config(config).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "{uri} should answer JSON"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_weather_ok() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localidade": "São Paulo", "uf": "SP", "erro": ""
        })))
        .mount(&providers)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": {"temp_c": 25.0}})))
        .mount(&providers)
        .await;

    let (status, body) = get(app(&providers), "/weather/01001000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"city": "São Paulo", "temp_c": 25, "temp_f": 77, "temp_k": 298})
    );
}

#[tokio::test]
async fn test_get_weather_invalid_cep() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&providers)
        .await;

    let (status, body) = get(app(&providers), "/weather/1234abcd").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"message": "invalid zipcode"}));
}

#[tokio::test]
async fn test_get_weather_not_found() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": "true"})))
        .mount(&providers)
        .await;

    let (status, body) = get(app(&providers), "/weather/99999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "can not find zipcode"}));
}

#[tokio::test]
async fn test_get_weather_upstream_failure() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&providers)
        .await;

    let (status, body) = get(app(&providers), "/weather/01001000").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "internal server error"}));
}

#[tokio::test]
async fn test_health_check() {
    let providers = MockServer::start().await;
    let (status, body) = get(app(&providers), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "weather-backend");
}
