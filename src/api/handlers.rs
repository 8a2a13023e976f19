//! API Handlers
//!
//! HTTP request handlers for each task endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::error;

use crate::config::{Config, StoreBackend};
use crate::error::Result;
use crate::models::{DeleteResponse, HealthResponse, Task, TaskInput};
use crate::store::{KeyValueStore, MemoryStore, RedisStore, StoreResult};
use crate::tasks::TaskRepository;

/// Application state shared across all handlers.
///
/// Holds no task data; every request goes to the store.
#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskRepository,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            tasks: TaskRepository::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the store connection once; it is shared by every request.
    pub async fn from_config(config: &Config) -> StoreResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.store_backend {
            StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis_url()).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(store))
    }
}

/// Handler for GET /tasks
pub async fn list_tasks_handler(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list().await?))
}

/// Handler for POST /tasks
///
/// Body rejections surface as 422 before the store is touched.
pub async fn create_task_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<Task>> {
    let Json(input) = payload?;
    Ok(Json(state.tasks.create(input).await?))
}

/// Handler for PUT /tasks/:id
pub async fn update_task_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<Task>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.tasks.update(id, input).await?))
}

/// Handler for DELETE /tasks/:id
pub async fn delete_task_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>> {
    let Path(id) = id?;
    state.tasks.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}

/// Handler for GET /health
///
/// Reports 503 when the store does not answer.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.tasks.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(err) => {
            error!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            )
        }
    }
}
