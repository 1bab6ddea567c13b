use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// Snapshot taken now, in UTC with millisecond precision (`...T08:15:30.123Z`)
    pub fn now() -> Self {
        HealthResponse {
            message: "Lingo API Server".to_string(),
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /
///
/// Liveness probe. The timestamp is produced per request, never cached.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("/ health check");
    (StatusCode::OK, Json(HealthResponse::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_timestamp_format() {
        let health = HealthResponse::now();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.message, "Lingo API Server");
        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(health.timestamp.len(), 24, "{}", health.timestamp);
        assert!(health.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }
}
