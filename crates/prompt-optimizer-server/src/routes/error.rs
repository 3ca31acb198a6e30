//! HTTP error mapping
//!
//! Every failed request answers with `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use prompt_optimizer::DomainError;

use crate::models::ErrorResponse;

/// Error returned by route handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::CategoryNotFound(_) | DomainError::TemplateNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            DomainError::MissingVariable(_) | DomainError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Catalog(_) | DomainError::Repository(_) => {
                tracing::error!("Request failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
