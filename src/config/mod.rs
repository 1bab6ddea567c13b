// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Lingo API server
//!
//! Loads and parses configuration from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use axum::http::{HeaderName, HeaderValue, Method, header};

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    use super::*;

    pub const PORT: u16 = 3001;
    pub const HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
    pub const CORS_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000"];
    pub const CORS_ALLOWED_METHODS: [Method; 5] = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    pub const CORS_ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Cross-origin policy applied to every response
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
    pub allowed_methods: Vec<Method>,
    pub allowed_headers: Vec<HeaderName>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
            allowed_methods: defaults::CORS_ALLOWED_METHODS.to_vec(),
            allowed_headers: defaults::CORS_ALLOWED_HEADERS.to_vec(),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`defaults`]; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => parse_port(&raw)?,
            None => defaults::PORT,
        };

        let mut cors = CorsConfig::default();
        if let Some(raw) = lookup(env_vars::CORS_ALLOWED_ORIGINS) {
            let origins = parse_origins(&raw)?;
            if origins.is_empty() {
                tracing::warn!(
                    "{} is set but lists no origins. Using default allow-list.",
                    env_vars::CORS_ALLOWED_ORIGINS
                );
            } else {
                cors.allowed_origins = origins;
            }
        }

        Ok(Config { port, cors })
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((defaults::HOST, self.port))
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(AppError::Config(format!(
            "{} must be an integer between 1 and 65535, got '{}'",
            env_vars::PORT,
            raw
        ))),
        Ok(port) => Ok(port),
    }
}

/// Splits a comma-separated origin list. Browsers never send a trailing slash
/// in `Origin`, so one is stripped here.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(AppError::Config(
                    "Wildcard CORS origin is not supported, list origins explicitly".to_string(),
                ));
            }
            HeaderValue::from_str(origin).map_err(|e| {
                AppError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect()
}
