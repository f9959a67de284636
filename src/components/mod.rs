//! Reusable view components.

pub mod task_item;
