// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod version;

pub use health::{HealthResponse, health_check};
pub use version::{VersionInfo, version_info};
