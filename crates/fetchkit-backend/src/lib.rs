//! Demo API for exercising the fetchkit request helper.
//!
//! Each route under `/api/v1` produces one of the outcomes the helper
//! normalizes: JSON success, JSON error status, malformed JSON, a slow
//! response to cancel, and multipart uploads.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub struct AppState {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            config,
        }
    }
}

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| HeaderValue::from_str(&origin).ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
}

fn api_v1() -> Router<Arc<AppState>> {
    use handlers::v1;

    Router::new()
        .route("/echo", post(v1::echo::echo).put(v1::echo::echo).patch(v1::echo::echo))
        .route("/status/{code}", get(v1::status::respond_with))
        .route("/malformed", get(v1::status::malformed))
        .route("/slow", get(v1::slow::slow))
        .route("/upload", post(v1::upload::upload))
}

/// Build the application router with CORS and request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::get))
        .nest("/api/v1", api_v1())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state)
}
