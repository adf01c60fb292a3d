//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Liveness payload, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        Self {
            status: "OK",
            message: "everything is alright",
        }
    }
}

/// `GET /api/health`
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok_payload() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, HealthStatus::ok());
    }

    #[test]
    fn payload_serializes_status_before_message() {
        let json = serde_json::to_string(&HealthStatus::ok()).unwrap();
        assert_eq!(json, r#"{"status":"OK","message":"everything is alright"}"#);
    }
}
