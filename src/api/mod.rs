//! HTTP API module for the Lingo API server
//!
//! # Endpoints
//! - `GET /` — health check
//! - `GET /api/version` — API version descriptor
//!
//! Every route, and the default 404 fallback, sits behind the CORS layer.

pub mod cors;
pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors::cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(handlers::health_check))
        .route("/api/version", get(handlers::version_info))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_create_router() {
        let config = Config {
            port: 8080,
            ..Config::default()
        };
        let app_state = Arc::new(AppState { config });

        let _router = create_router(app_state);
        // If we get here without panicking, the router was created successfully
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::default();

        assert_eq!(state.config.port, 3001);
        assert_eq!(state.config.cors.allowed_origins.len(), 1);
    }
}
