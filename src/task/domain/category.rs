//! Category reference data.

use super::CategoryId;
use serde::{Deserialize, Serialize};

/// A named grouping tag for tasks.
///
/// Categories are static reference data; how many tasks reference a category
/// is derived from the task collection rather than stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier referenced by tasks.
    pub id: CategoryId,
    /// Display label.
    pub name: String,
    /// Display colour token, opaque to the core logic.
    pub color: String,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}
