//! Application state shared across HTTP handlers

use crate::config::Config;

/// Shared application state
///
/// Immutable after startup; handlers never write to it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Config,
}
