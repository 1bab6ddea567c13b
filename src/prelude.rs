// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use lingo_api::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, CorsConfig};
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::handlers::{HealthResponse, VersionInfo};
pub use crate::api::{AppState, create_router};
