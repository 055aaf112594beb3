//! Query predicates over task collections.

use super::{CategoryId, Priority, Task};
use chrono::NaiveDate;

/// Predicate selecting a subset of tasks for store queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Tasks referencing the given category.
    Category(CategoryId),
    /// Tasks with the given priority.
    Priority(Priority),
    /// Completed tasks.
    Completed,
    /// Tasks not yet completed.
    Pending,
    /// Incomplete tasks whose due date falls strictly before `today`.
    Overdue {
        /// The calendar date considered "today".
        today: NaiveDate,
    },
}

impl TaskFilter {
    /// Returns whether the task satisfies this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Category(category) => task.category() == category,
            Self::Priority(priority) => task.priority() == *priority,
            Self::Completed => task.is_completed(),
            Self::Pending => !task.is_completed(),
            Self::Overdue { today } => task.is_overdue_on(*today),
        }
    }

    /// Keeps only the tasks matching this filter, preserving order.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|task| self.matches(task)).collect()
    }
}
