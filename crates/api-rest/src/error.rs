//! Error taxonomy of the REST surface and its mapping to HTTP responses.
//!
//! Every variant's `Display` text is the exact `error` string sent to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use api_shared::ErrorRes;
use users_core::UserError;

use crate::response::json_response;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not a JSON object of the expected shape.
    #[error("Invalid JSON")]
    InvalidBody,
    /// A required field is empty after trimming.
    #[error("Missing required fields: first_name, last_name, and biography")]
    Validation,
    /// The path id is malformed or names no stored user.
    #[error("User not found")]
    NotFound,
    /// No route matches the request path.
    #[error("Not found")]
    RouteNotFound,
    /// The path exists but does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Anything not anticipated above.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(self.status(), &ErrorRes::new(self.to_string()))
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::MissingRequiredFields => ApiError::Validation,
            UserError::StorePoisoned { .. } => {
                tracing::error!("User store error: {:?}", err);
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_each_error_maps_to_status_and_message() {
        let cases = [
            (ApiError::InvalidBody, 400, "Invalid JSON"),
            (
                ApiError::Validation,
                400,
                "Missing required fields: first_name, last_name, and biography",
            ),
            (ApiError::NotFound, 404, "User not found"),
            (ApiError::RouteNotFound, 404, "Not found"),
            (ApiError::MethodNotAllowed, 405, "Method not allowed"),
            (ApiError::Internal, 500, "Internal server error"),
        ];

        for (err, status, message) in cases {
            let (got_status, body) = body_of(err).await;
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(body, serde_json::json!({ "error": message }));
        }
    }

    #[test]
    fn test_user_errors_convert() {
        assert!(matches!(
            ApiError::from(UserError::MissingRequiredFields),
            ApiError::Validation
        ));
        assert!(matches!(
            ApiError::from(UserError::StorePoisoned { operation: "insert" }),
            ApiError::Internal
        ));
    }
}
