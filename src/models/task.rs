//! Task Record
//!
//! The persisted shape of a task, exactly as stored under `task:<id>`.

use serde::{Deserialize, Serialize};

// == Task ==
/// A task as stored and returned by the API.
///
/// The stored JSON is always a complete snapshot; updates replace it whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned id, matches the numeric suffix of the storage key
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serialize_field_names() {
        let task = Task {
            id: 3,
            title: "A".to_string(),
            description: "B".to_string(),
            status: "Pending".to_string(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "title": "A", "description": "B", "status": "Pending"})
        );
    }

    #[test]
    fn test_task_deserialize_stored_value() {
        let raw = r#"{"id":7,"title":"X","description":"Y","status":"Done"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.status, "Done");
    }
}
