use std::sync::Arc;

use runcell_core::scripting::runner::ScriptRunner;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Script runner owning the scratch directory and executors.
    pub runner: Arc<ScriptRunner>,
}
