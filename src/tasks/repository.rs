//! Task Repository
//!
//! Maps each task operation onto store commands.
//!
//! # Key Layout
//! - `task:<id>` holds the task JSON `{id, title, description, status}`
//! - `task_counter` holds the last assigned id

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{Result, TaskError};
use crate::models::{Task, TaskInput};
use crate::store::KeyValueStore;

// == Key Layout ==
/// Counter advanced once per created task.
pub const COUNTER_KEY: &str = "task_counter";

/// Pattern enumerating every task key.
pub const TASK_KEY_PATTERN: &str = "task:*";

/// Storage key for the task with `id`.
pub fn task_key(id: i64) -> String {
    format!("task:{}", id)
}

// == Task Repository ==
/// Stateless handle over the shared store; cheap to clone.
#[derive(Clone)]
pub struct TaskRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    // == List ==
    /// Returns every stored task, ascending by id.
    ///
    /// Keys that vanish between enumeration and fetch, or hold values that
    /// don't decode, are skipped.
    pub async fn list(&self) -> Result<Vec<Task>> {
        let keys = self.store.keys(TASK_KEY_PATTERN).await?;
        let mut tasks = Vec::with_capacity(keys.len());

        for key in keys {
            let Some(raw) = self.store.get(&key).await? else {
                continue;
            };
            match decode(&key, &raw) {
                Ok(task) => tasks.push(task),
                Err(err) => warn!("Skipping {}", err),
            }
        }

        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    // == Create ==
    /// Stores a new task under a freshly minted id.
    pub async fn create(&self, input: TaskInput) -> Result<Task> {
        input.validate()?;

        let id = self.store.incr(COUNTER_KEY).await?;
        let task = input.into_task(id);
        self.store.set(&task_key(id), &encode(&task)?).await?;

        info!("Created task {}", id);
        Ok(task)
    }

    // == Update ==
    /// Replaces the whole record for `id`. The counter is untouched.
    pub async fn update(&self, id: i64, input: TaskInput) -> Result<Task> {
        input.validate()?;

        let task = input.into_task(id);
        // Conditional write: no window between the existence check and the set
        if !self.store.set_if_exists(&task_key(id), &encode(&task)?).await? {
            return Err(TaskError::NotFound(id));
        }

        info!("Updated task {}", id);
        Ok(task)
    }

    // == Delete ==
    /// Removes the record for `id`. The id is never handed out again.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete(&task_key(id)).await? {
            return Err(TaskError::NotFound(id));
        }

        info!("Deleted task {}", id);
        Ok(())
    }
}

fn encode(task: &Task) -> Result<String> {
    serde_json::to_string(task)
        .map_err(|e| TaskError::Internal(format!("failed to encode task {}: {}", task.id, e)))
}

fn decode(key: &str, raw: &str) -> Result<Task> {
    serde_json::from_str(raw).map_err(|e| TaskError::Corrupt {
        key: key.to_string(),
        message: e.to_string(),
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_STATUS;
    use crate::store::{MemoryStore, StoreResult};
    use async_trait::async_trait;

    /// Enumerates `task:1` and `task:2` but only holds a value for `task:1`,
    /// as when a key is deleted between `KEYS` and `GET`.
    struct VanishingStore;

    #[async_trait]
    impl KeyValueStore for VanishingStore {
        async fn incr(&self, _key: &str) -> StoreResult<i64> {
            Ok(3)
        }

        async fn get(&self, key: &str) -> StoreResult<Option<String>> {
            Ok((key == "task:1").then(|| {
                r#"{"id":1,"title":"A","description":"B","status":"Pending"}"#.to_string()
            }))
        }

        async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Ok(())
        }

        async fn set_if_exists(&self, _key: &str, _value: &str) -> StoreResult<bool> {
            Ok(false)
        }

        async fn delete(&self, _key: &str) -> StoreResult<bool> {
            Ok(false)
        }

        async fn keys(&self, _pattern: &str) -> StoreResult<Vec<String>> {
            Ok(vec!["task:2".to_string(), "task:1".to_string()])
        }

        async fn ping(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    fn repo() -> (TaskRepository, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (TaskRepository::new(store.clone()), store)
    }

    fn input(title: &str, description: &str, status: Option<&str>) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_task_key() {
        assert_eq!(task_key(42), "task:42");
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_default_status() {
        let (repo, store) = repo();

        let task = repo.create(input("A", "B", None)).await.unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, DEFAULT_STATUS);

        let raw = store.get("task:1").await.unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Task>(&raw).unwrap(), task);
        assert_eq!(store.get(COUNTER_KEY).await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title_before_store() {
        let (repo, store) = repo();

        let result = repo.create(input("", "B", None)).await;
        assert!(matches!(result, Err(TaskError::Validation { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_sorted_by_id() {
        let (repo, _) = repo();
        for n in 0..12 {
            repo.create(input(&format!("t{}", n), "d", None)).await.unwrap();
        }

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (repo, _) = repo();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_skips_vanished_keys() {
        let repo = TaskRepository::new(Arc::new(VanishingStore));

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].title, "A");
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_values() {
        let (repo, store) = repo();
        repo.create(input("A", "B", None)).await.unwrap();
        store.set("task:99", "not json").await.unwrap();

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (repo, _) = repo();
        repo.create(input("A", "B", None)).await.unwrap();

        let updated = repo.update(1, input("X", "Y", Some("Done"))).await.unwrap();
        assert_eq!(updated.id, 1);

        let tasks = repo.list().await.unwrap();
        assert_eq!(
            tasks,
            vec![Task {
                id: 1,
                title: "X".to_string(),
                description: "Y".to_string(),
                status: "Done".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_update_without_status_resets_to_default() {
        let (repo, _) = repo();
        repo.create(input("A", "B", Some("Done"))).await.unwrap();

        let updated = repo.update(1, input("A", "B", None)).await.unwrap();
        assert_eq!(updated.status, DEFAULT_STATUS);
    }

    #[tokio::test]
    async fn test_update_nonexistent_leaves_store_unmodified() {
        let (repo, store) = repo();
        repo.create(input("A", "B", None)).await.unwrap();
        let before = store.len().await;

        let result = repo.update(9999, input("X", "Y", None)).await;
        assert!(matches!(result, Err(TaskError::NotFound(9999))));
        assert_eq!(store.len().await, before);
        assert!(store.get("task:9999").await.unwrap().is_none());
        assert_eq!(store.get(COUNTER_KEY).await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let (repo, _) = repo();
        repo.create(input("A", "B", None)).await.unwrap();

        repo.delete(1).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        let result = repo.delete(1).await;
        assert!(matches!(result, Err(TaskError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (repo, _) = repo();
        repo.create(input("A", "B", None)).await.unwrap();
        repo.create(input("C", "D", None)).await.unwrap();
        repo.delete(2).await.unwrap();

        let task = repo.create(input("E", "F", None)).await.unwrap();
        assert_eq!(task.id, 3);
    }
}
