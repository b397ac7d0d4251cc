use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use fetchkit::data::{ApiErrorBody, Delayed, Echo, HealthResponse, HealthStatus, UploadSummary};
use fetchkit::serde_json::{self, json};
use fetchkit_backend::{AppState, app, config::Config};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = Config {
        max_delay_ms: 20,
        ..Config::default()
    };
    app(Arc::new(AppState::new(config)))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json<T: fetchkit::serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_healthy() {
    let resp = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = body_json(resp).await;
    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.uptime.seconds >= 0);
}

#[tokio::test]
async fn health_is_not_under_api_prefix() {
    let resp = test_app().oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- echo ---

#[tokio::test]
async fn echo_returns_body_and_content_type() {
    let resp = test_app()
        .oneshot(json_request("POST", "/api/v1/echo", r#"{"name":"lamp","count":2}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.content_type.as_deref(), Some("application/json"));
    assert_eq!(echo.body, json!({"name": "lamp", "count": 2}));
}

#[tokio::test]
async fn echo_accepts_put_and_patch() {
    for method in ["PUT", "PATCH"] {
        let resp = test_app()
            .oneshot(json_request(method, "/api/v1/echo", "null"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{method}");
    }
}

#[tokio::test]
async fn echo_rejects_wrong_content_type_with_json_error() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/echo")
                .header(http::header::CONTENT_TYPE, "text/plain")
                .body("hello".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let error: ApiErrorBody = body_json(resp).await;
    assert_eq!(error.status, 415);
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn echo_rejects_broken_json_with_json_error() {
    let resp = test_app()
        .oneshot(json_request("POST", "/api/v1/echo", r#"{"name":"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ApiErrorBody = body_json(resp).await;
    assert_eq!(error.status, 400);
}

// --- status ---

#[tokio::test]
async fn status_route_responds_with_requested_code() {
    let resp = test_app().oneshot(get("/api/v1/status/418")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
    let error: ApiErrorBody = body_json(resp).await;
    assert_eq!(
        error,
        ApiErrorBody {
            status: 418,
            message: "I'm a teapot".to_string()
        }
    );
}

#[tokio::test]
async fn status_route_rejects_bodyless_and_out_of_range_codes() {
    for code in ["204", "304", "99", "600"] {
        let resp = test_app()
            .oneshot(get(&format!("/api/v1/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{code}");
    }
}

#[tokio::test]
async fn malformed_route_returns_invalid_json() {
    let resp = test_app().oneshot(get("/api/v1/malformed")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());
}

// --- slow ---

#[tokio::test]
async fn slow_route_caps_delay() {
    let resp = test_app()
        .oneshot(get("/api/v1/slow?ms=60000"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let delayed: Delayed = body_json(resp).await;
    assert_eq!(delayed, Delayed { waited_ms: 20 });
}

// --- upload ---

#[tokio::test]
async fn upload_summarizes_parts() {
    let boundary = "fetchkit-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
         beach\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"photo\"; filename=\"beach.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         PNGDATA\r\n\
         --{boundary}--\r\n"
    );

    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/upload")
                .header(
                    http::header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let summary: UploadSummary = body_json(resp).await;
    assert_eq!(summary.parts.len(), 2);
    assert_eq!(summary.parts[0].name, "caption");
    assert_eq!(summary.parts[0].size, 5);
    assert_eq!(summary.parts[1].file_name.as_deref(), Some("beach.png"));
    assert_eq!(summary.parts[1].content_type.as_deref(), Some("image/png"));
    assert_eq!(summary.parts[1].size, 7);
}

#[tokio::test]
async fn upload_without_multipart_is_rejected() {
    let resp = test_app()
        .oneshot(json_request("POST", "/api/v1/upload", "{}"))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- cors ---

#[tokio::test]
async fn cors_allows_dev_origin() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/echo")
                .header(http::header::ORIGIN, "http://localhost:8080")
                .header(http::header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:8080")
    );
}
