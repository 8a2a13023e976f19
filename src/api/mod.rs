//! API Module
//!
//! HTTP handlers and routing for the task REST API.
//!
//! # Endpoints
//! - `GET /tasks` - List all tasks, ascending by id
//! - `POST /tasks` - Create a task
//! - `PUT /tasks/:id` - Replace a task
//! - `DELETE /tasks/:id` - Delete a task
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
