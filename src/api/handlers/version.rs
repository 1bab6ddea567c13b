// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Static API descriptor. Field order is the JSON key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl VersionInfo {
    pub const CURRENT: VersionInfo = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        name: "Lingo API",
        description: "Language learning application API",
    };
}

/// GET /api/version
pub async fn version_info() -> impl IntoResponse {
    tracing::debug!("/api/version");
    (StatusCode::OK, Json(VersionInfo::CURRENT))
}
