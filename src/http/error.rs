//! API error handling.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::task::{
    domain::{ParseTaskIdError, TaskDomainError},
    services::TaskListError,
};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Status code paired with its error body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error details.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new API error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 400 response for input that cannot be interpreted.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("MALFORMED_INPUT", message),
        )
    }

    /// Creates a 404 response with the given code.
    #[must_use]
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new(code, message))
    }

    /// Creates a 409 response for a name that is already taken.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::CONFLICT,
            ApiError::new("DUPLICATE_PROJECT", message),
        )
    }

    /// Creates a 500 response.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskListError> for ApiErrorResponse {
    fn from(error: TaskListError) -> Self {
        match error {
            TaskListError::ProjectNotFound(_) => {
                Self::not_found("PROJECT_NOT_FOUND", error.to_string())
            }
            TaskListError::TaskNotFound(_) => Self::not_found("TASK_NOT_FOUND", error.to_string()),
            TaskListError::DuplicateProject(_) => Self::conflict(error.to_string()),
            TaskListError::Domain(domain) => domain.into(),
            TaskListError::Repository(repository) => {
                tracing::error!(error = %repository, "task store failure");
                Self::internal_error("An internal error occurred")
            }
        }
    }
}

impl From<TaskDomainError> for ApiErrorResponse {
    fn from(error: TaskDomainError) -> Self {
        Self::malformed(error.to_string())
    }
}

impl From<ParseTaskIdError> for ApiErrorResponse {
    fn from(error: ParseTaskIdError) -> Self {
        Self::malformed(error.to_string())
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiErrorResponse {
    fn from(rejection: PathRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}
