//! Handlers for the server-rendered project form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use datebound_core::project::{validate_input, ProjectInput};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::project_form::render_project_form;

/// GET /
///
/// Render an empty project form.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = render_project_form(&state.project_schema, &ProjectInput::default(), None)?;
    Ok(Html(page))
}

/// POST /
///
/// Validate the submitted form and render it again with field messages.
pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<ProjectInput>,
) -> AppResult<Html<String>> {
    let (_, result) = validate_input(&state.project_schema, &input)?;

    tracing::info!(
        is_valid = result.is_valid,
        errors = result.errors.len(),
        "Project form submitted"
    );

    let page = render_project_form(&state.project_schema, &input, Some(&result))?;
    Ok(Html(page))
}
