//! Error types for the task API
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Task Error Enum ==
/// Unified error type for the task API.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Request payload or path failed schema validation
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// No task stored under the given id
    #[error("Task not found")]
    NotFound(i64),

    /// A stored value could not be decoded as a task
    #[error("Corrupt value at {key}: {message}")]
    Corrupt { key: String, message: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// The store failed or could not be reached
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == Rejection Mapping ==
impl From<JsonRejection> for TaskError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = field_name(&message).unwrap_or("body").to_string();
        TaskError::Validation { field, message }
    }
}

impl From<PathRejection> for TaskError {
    fn from(rejection: PathRejection) -> Self {
        TaskError::Validation {
            field: "id".to_string(),
            message: rejection.body_text(),
        }
    }
}

/// Pulls the field name out of a serde "missing field `name`" or
/// "for field `name`" message.
fn field_name(message: &str) -> Option<&str> {
    let rest = message
        .split("missing field `")
        .nth(1)
        .or_else(|| message.split("for field `").nth(1))?;
    rest.split('`').next()
}

// == IntoResponse Implementation ==
impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            TaskError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(message.clone()).with_field(field.clone()),
            ),
            TaskError::NotFound(id) => {
                warn!("Task {} not found", id);
                (StatusCode::NOT_FOUND, ErrorResponse::new(self.to_string()))
            }
            TaskError::Corrupt { .. } | TaskError::Internal(_) | TaskError::Store(_) => {
                error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the task API.
pub type Result<T> = std::result::Result<T, TaskError>;
