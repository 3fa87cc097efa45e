//! Task domain model.
//!
//! # Responsibility
//! - Define the closed set of task variants and their rendering.
//! - Own the three datetime text formats used across the crate.
//! - Provide the ordered in-memory task collection.
//!
//! # Invariants
//! - Variant-specific datetimes exist exactly when the variant needs them.
//! - `TaskList` is the sole owner of its tasks.

pub mod datetime;
pub mod task;
pub mod task_list;
