//! Server-rendered pages and static assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, pages};
use crate::state::AppState;

/// ```text
/// GET    /                             -> index        (empty form)
/// POST   /                             -> submit       (urlencoded form)
/// GET    /assets/date-greater-than.js  -> client_script
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index).post(pages::submit))
        .route(assets::CLIENT_SCRIPT_PATH, get(assets::client_script))
}
