//! Custom path extractor that returns rejections in the envelope shape

use axum::{
    extract::{rejection::PathRejection, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorBody;

/// Wrapper around `axum::extract::Path` that renders parse failures as
/// `{success: false, message}` envelopes.
///
/// Without it, a request like `GET /api/users/abc` would get axum's
/// plain-text rejection instead of the JSON envelope every other error
/// path produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

/// Path rejection error in envelope format
#[derive(Debug)]
pub struct PathError {
    message: String,
}

impl IntoResponse for PathError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            success: false,
            message: self.message,
            data: None,
            error: None,
        };

        (StatusCode::BAD_REQUEST, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PathError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(rejection) => Err(PathError {
                message: format_rejection_message(&rejection),
            }),
        }
    }
}

/// Format the rejection message to surface the offending parameter
fn format_rejection_message(rejection: &PathRejection) -> String {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            format!("Invalid path parameter: {}", err.body_text())
        }
        PathRejection::MissingPathParams(err) => err.body_text(),
        _ => "Invalid path parameter".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_into_response() {
        let error = PathError {
            message: "Test error".to_string(),
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
