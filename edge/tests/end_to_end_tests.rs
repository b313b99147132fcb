//! End-to-end scenarios: edge → real backend → mocked providers
//!
//! The backend router is served on an ephemeral port; ViaCEP and WeatherAPI
//! are wiremock servers.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Stack {
    edge: Router,
    viacep: MockServer,
    weather: MockServer,
}

async fn start_stack() -> Stack {
    let viacep = MockServer::start().await;
    let weather = MockServer::start().await;

    let backend_vars = HashMap::from([
        ("WEATHER_API_KEY".to_string(), "test-key".to_string()),
        (
            "WEATHER_B__GEOCODING__API_ENDPOINT".to_string(),
            format!("{}/ws", viacep.uri()),
        ),
        (
            "WEATHER_B__WEATHER__API_ENDPOINT".to_string(),
            format!("{}/v1", weather.uri()),
        ),
    ]);
    let backend_config = weather_backend::Config::load_from_env(backend_vars).unwrap();
    let backend_app =
        weather_backend::create_app(weather_backend::AppState::from_config(backend_config).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let backend_addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend_app).await.unwrap();
    });

    let edge_vars = HashMap::from([(
        "SERVICE_B_URL".to_string(),
        format!("http://{}", backend_addr),
    )]);
    let edge_config = weather_edge::Config::load_from_env(edge_vars).unwrap();
    let edge = weather_edge::create_app(weather_edge::AppState::from_config(edge_config).unwrap());

    Stack {
        edge,
        viacep,
        weather,
    }
}

async fn post_cep(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/cep")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_resolves_sao_paulo() {
    let stack = start_stack().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "01001-000",
            "localidade": "São Paulo",
            "uf": "SP",
            "erro": ""
        })))
        .expect(1)
        .mount(&stack.viacep)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": {"temp_c": 25.0}})))
        .expect(1)
        .mount(&stack.weather)
        .await;

    let (status, body) = post_cep(stack.edge.clone(), r#"{"cep":"01001000"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"city": "São Paulo", "temp_c": 25, "temp_f": 77, "temp_k": 298})
    );
}

#[tokio::test]
async fn test_unknown_cep_is_not_found() {
    let stack = start_stack().await;

    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": "true"})))
        .expect(1)
        .mount(&stack.viacep)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&stack.weather)
        .await;

    let (status, body) = post_cep(stack.edge.clone(), r#"{"cep":"99999999"}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "can not find zipcode"}));
}

#[tokio::test]
async fn test_short_cep_makes_no_outbound_calls() {
    let stack = start_stack().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&stack.viacep)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&stack.weather)
        .await;

    let (status, body) = post_cep(stack.edge.clone(), r#"{"cep":"123"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"message": "invalid zipcode"}));
}

#[tokio::test]
async fn test_weather_outage_is_service_b_failure() {
    let stack = start_stack().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localidade": "São Paulo",
            "uf": "SP"
        })))
        .mount(&stack.viacep)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&stack.weather)
        .await;

    let (status, body) = post_cep(stack.edge.clone(), r#"{"cep":"01001000"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "error communicating with Service B"}));
    assert!(body.get("city").is_none());
}

#[test]
fn test_edge_timeout_covers_backend_worst_case() {
    let backend = weather_backend::Config::load_from_env(HashMap::from([(
        "WEATHER_API_KEY".to_string(),
        "test-key".to_string(),
    )]))
    .unwrap();
    let edge = weather_edge::Config::load_from_env(HashMap::new()).unwrap();

    // Service B calls ViaCEP and then WeatherAPI, each under its own timeout
    assert!(edge.http.timeout() > backend.http.timeout() * 2);
}
