//! StreetPass backend: liveness API.
//!
//! Exposes `GET /api/health`, which answers with a fixed JSON status so
//! orchestration and monitoring tooling can tell the process is up.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use crate::config::AppConfig;
pub use crate::http::{serve, start_server, ServerError};
pub use crate::routes::create_router;
