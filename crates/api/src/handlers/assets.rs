//! Static client-side script.

use axum::http::header;
use axum::response::IntoResponse;

/// Where the client validation script is served.
pub const CLIENT_SCRIPT_PATH: &str = "/assets/date-greater-than.js";

const CLIENT_SCRIPT: &str = include_str!("../../assets/date-greater-than.js");

/// GET /assets/date-greater-than.js
pub async fn client_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        CLIENT_SCRIPT,
    )
}
