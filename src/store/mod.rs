//! Store Module
//!
//! Contract for the key-value store holding task state, with a Redis
//! implementation for production and an in-memory one for tests and
//! local runs.

mod memory;
mod redis;

use async_trait::async_trait;
use thiserror::Error;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

// == Store Error ==
/// Failures raised while talking to the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The client could not be created or the server could not be reached
    #[error("Store connection failed: {0}")]
    Connection(String),

    /// A command was rejected or failed in flight
    #[error("Store command failed: {0}")]
    Backend(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Key-Value Store Trait ==
/// Operations the task layer needs from the store.
///
/// Every method is a single command and is atomic on its own; nothing here
/// spans more than one key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Increments the integer at `key` by one and returns the new value.
    /// A missing key counts as zero.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Returns the value at `key`, or `None` if absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` at `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores `value` at `key` only if the key already exists.
    /// Returns whether the write happened.
    async fn set_if_exists(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Removes `key`. Returns whether it existed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Lists keys matching a glob `pattern` (`*` and `?` wildcards).
    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>>;

    /// Round-trips to the store to confirm it is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
