//! JSON handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use datebound_core::project::{validate_input, Project, ProjectInput};
use datebound_core::validation::client::ClientFieldRules;
use datebound_core::validation::rules::ValidationResult;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/client-rules
///
/// Rule descriptors for every project field that carries client rules.
pub async fn client_rules(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClientFieldRules>>>> {
    let rules = state.project_schema.client_rules()?;
    Ok(Json(DataResponse { data: rules }))
}

/// Response body for the validation endpoint.
#[derive(Debug, Serialize)]
pub struct ProjectValidation {
    /// The bound record; fields that failed binding are `null`.
    pub project: Project,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// POST /api/v1/projects/validate
///
/// Bind and validate a project. Invalid input still answers 200; the
/// violations are in the body. Only an unreadable body (400) or a
/// configuration error (500) fails the request.
pub async fn validate(
    State(state): State<AppState>,
    body: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<ProjectValidation>>> {
    let Json(input) = body?;
    let (project, result) = validate_input(&state.project_schema, &input)?;

    tracing::debug!(
        is_valid = result.is_valid,
        errors = result.errors.len(),
        "Validated project via API"
    );

    Ok(Json(DataResponse {
        data: ProjectValidation { project, result },
    }))
}
