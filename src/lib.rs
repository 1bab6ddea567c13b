// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Lingo API
//!
//! HTTP backend for the Lingo language learning application.
//!
//! Serves a health check and a version descriptor as JSON, behind a CORS
//! policy that admits the web front-end's origin.
//!
//! ## Main modules
//! - `api`: HTTP router, CORS layer and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `server`: listener binding and graceful shutdown
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod prelude;
pub mod server;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, CorsConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Response bodies
pub use api::handlers::{HealthResponse, VersionInfo};
