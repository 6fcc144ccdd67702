//! Envelope-shaped API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Structured error detail carried by not-found responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub description: String,
}

/// Error body in the same envelope shape as success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
    pub data: Option<()>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorDetail>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                success: false,
                message: message.into(),
                data: None,
                error: None,
            },
        }
    }

    /// Attach structured error detail
    pub fn with_detail(mut self, code: u16, description: impl Into<String>) -> Self {
        self.body.error = Some(ApiErrorDetail {
            code,
            description: description.into(),
        });
        self
    }

    /// Validation failure: the first violated constraint's message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Missing user: structured `{code, description}` detail
    pub fn not_found(description: impl Into<String>) -> Self {
        let description = description.into();
        Self::new(StatusCode::NOT_FOUND, description.clone()).with_detail(404, description)
    }

    /// Internal failure with a generic client-facing message
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::NotFound { .. } => Self::not_found("User not found!"),
            // Conflicts and storage failures surface as generic internal
            // errors; the detail goes to the log, not the client.
            DomainError::Conflict { .. }
            | DomainError::Storage { .. }
            | DomainError::Internal { .. } => {
                error!("Request failed: {}", err);
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl std::error::Error for ApiError {}
