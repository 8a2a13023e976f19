//! Request DTOs for the task API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{de, Deserialize, Deserializer};

use super::Task;
use crate::error::TaskError;

/// Status given to tasks created or updated without one.
pub const DEFAULT_STATUS: &str = "Pending";

/// Request body for POST /tasks and PUT /tasks/:id
///
/// Any `id` in the body is ignored; the server assigns it on create and
/// takes it from the path on update.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    /// Defaults to [`DEFAULT_STATUS`] when omitted; an explicit null is rejected
    #[serde(default, deserialize_with = "present_status")]
    pub status: Option<String>,
}

/// Accepts a string `status`; only reached when the field is present.
fn present_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(status) => Ok(Some(status)),
        None => Err(de::Error::custom(
            "invalid type: null for field `status`, expected a string",
        )),
    }
}

impl TaskInput {
    /// Checks constraints the JSON schema alone can't express.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::Validation {
                field: "title".to_string(),
                message: "Title cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Builds the full record for `id`, filling in the default status.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}
