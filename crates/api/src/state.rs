use std::sync::Arc;

use datebound_core::project::Project;
use datebound_core::validation::schema::ModelSchema;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Checked project schema, built once at startup.
    pub project_schema: Arc<ModelSchema<Project>>,
}
