//! Request and Response models for the task API
//!
//! This module defines the stored task record and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod task;

// Re-export commonly used types
pub use requests::{TaskInput, DEFAULT_STATUS};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
pub use task::Task;
