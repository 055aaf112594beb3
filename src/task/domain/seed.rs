//! Bundled dataset used to seed empty storage.

use super::{Category, Task};

/// JSON record of the default task collection, newest first.
pub const DEFAULT_TASKS_JSON: &str = include_str!("seed/tasks.json");

/// JSON record of the default category collection.
pub const DEFAULT_CATEGORIES_JSON: &str = include_str!("seed/categories.json");

/// Parses the bundled default tasks.
///
/// # Errors
///
/// Returns the JSON error if the bundled record is malformed.
pub fn default_tasks() -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(DEFAULT_TASKS_JSON)
}

/// Parses the bundled default categories.
///
/// # Errors
///
/// Returns the JSON error if the bundled record is malformed.
pub fn default_categories() -> Result<Vec<Category>, serde_json::Error> {
    serde_json::from_str(DEFAULT_CATEGORIES_JSON)
}
