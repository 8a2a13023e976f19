//! Tasks Module
//!
//! CRUD operations on task records, expressed over the key-value store.

mod repository;


pub use repository::{task_key, TaskRepository, COUNTER_KEY, TASK_KEY_PATTERN};
