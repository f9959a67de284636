//! REST client for the task-tracker backend.

pub mod api;
pub mod error;
pub mod types;
