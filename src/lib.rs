//! Task Tracker - A small task-tracking REST API
//!
//! Create, list, update and delete tasks over HTTP, with every task stored
//! as JSON in Redis.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::TaskRepository;
