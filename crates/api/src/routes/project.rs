//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /client-rules  -> client_rules
/// POST   /validate      -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/client-rules", get(project::client_rules))
        .route("/validate", post(project::validate))
}
