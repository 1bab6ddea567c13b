// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! CORS middleware for the HTTP API

use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Builds the CORS layer from the configured allow-list.
///
/// Preflight requests are answered by the layer itself and never reach a
/// handler. Requests from origins outside the list are still served, just
/// without `Access-Control-Allow-Origin`.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_methods(config.allowed_methods.clone())
        .allow_headers(config.allowed_headers.clone())
}
