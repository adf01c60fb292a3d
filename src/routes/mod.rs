//! HTTP route handlers.
//!
//! Only the liveness endpoint is exposed. Unknown paths and methods fall
//! through to axum's default 404 and 405 responses.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
