//! Error payload shared by every endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
