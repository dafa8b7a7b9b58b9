//! Axum application builder.
//!
//! Routes:
//! - `GET /health` - liveness
//! - `GET /analyze/{ticker}` - scored headlines and aggregate sentiment
//! - `GET /sentiment/{ticker}` - alias of `/analyze/{ticker}`
//! - `GET /headlines/{ticker}` - unscored headlines
//! - `GET /metrics` - Prometheus metrics

use crate::interfaces::http::routes::{analysis, health};
use crate::interfaces::http::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("HTTP: ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .route("/analyze/{ticker}", get(analysis::analyze))
        .route("/sentiment/{ticker}", get(analysis::analyze))
        .route("/headlines/{ticker}", get(analysis::headlines))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}
