//! Generate Routes - Render a catalog template with caller variables

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::models::{ErrorResponse, GenerateCommand, GenerateRequest, GenerateResponse};
use crate::routes::ApiError;
use crate::AppState;

/// Render a template and record the usage
///
/// POST /api/generate
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Prompt generated", body = GenerateResponse),
        (status = 400, description = "Missing or unknown category/template, or missing variable", body = ErrorResponse),
        (status = 500, description = "Usage statistics could not be saved", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn generate_prompt(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected generate request body: {}", e);
        ApiError::bad_request(format!("Request body must be a JSON object: {}", e.body_text()))
    })?;

    let GenerateCommand {
        category,
        template,
        variables,
        sent_variables,
    } = request.into_command()?;

    let result = state
        .prompt_service
        .generate(&category, &template, variables)
        .await
        .map_err(|e| {
            // Unknown keys are caller input errors on this endpoint
            if e.is_not_found() {
                tracing::warn!("Generate rejected: {}", e);
                ApiError::bad_request(e.to_string())
            } else {
                ApiError::from(e)
            }
        })?;

    Ok(Json(GenerateResponse::new(result, sent_variables)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate_prompt))
}
