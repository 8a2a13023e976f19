//! Redis Store
//!
//! [`RedisStore`] maps the store contract onto plain Redis string commands:
//!
//! | Operation | Command |
//! |-----------|---------|
//! | `incr` | `INCR key` |
//! | `get` | `GET key` |
//! | `set` | `SET key value` |
//! | `set_if_exists` | `SET key value XX` |
//! | `delete` | `DEL key` |
//! | `keys` | `KEYS pattern` |
//! | `ping` | `PING` |

use ::redis::aio::MultiplexedConnection;
use ::redis::AsyncCommands;
use async_trait::async_trait;
use tracing::debug;

use super::{KeyValueStore, StoreError, StoreResult};

// == Redis Store ==
/// Store backed by a single multiplexed Redis connection.
///
/// The connection is opened once at startup and cloned per call; all clones
/// share the same underlying TCP connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to Redis at `url` (`redis://host:port/db`).
    ///
    /// Fails fast if the client cannot be created or the server is not
    /// reachable.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = ::redis::Client::open(url).map_err(|e| {
            StoreError::Connection(format!("failed to create Redis client: {}", e))
        })?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {}", e)))?;

        debug!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

/// Maps a Redis error onto [`StoreError`].
fn map_redis_error(err: ::redis::RedisError, key: &str) -> StoreError {
    if err.is_io_error() {
        StoreError::Connection(format!("Redis unreachable for key {}: {}", key, err))
    } else {
        StoreError::Backend(format!("Redis error for key {}: {}", key, err))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        conn.incr(key, 1_i64)
            .await
            .map_err(|e| map_redis_error(e, key))
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(|e| map_redis_error(e, key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| map_redis_error(e, key))?;
        Ok(())
    }

    async fn set_if_exists(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        // Replies OK when written, nil when the key was absent
        let reply: Option<String> = ::redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("XX")
            .query_async(&mut conn)
            .await
            .map_err(|e| map_redis_error(e, key))?;
        Ok(reply.is_some())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(|e| map_redis_error(e, key))?;
        Ok(removed > 0)
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys(pattern)
            .await
            .map_err(|e| map_redis_error(e, pattern))
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let _: String = ::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| map_redis_error(e, "PING"))?;
        Ok(())
    }
}
