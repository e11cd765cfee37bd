pub mod health;
pub mod pages;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects/client-rules      client rule descriptors (GET)
/// /projects/validate          validate a project (POST, JSON)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
