//! Pure transformations from a task collection to a display-ready list.
//!
//! The projector filters a collection by category, orders it for display,
//! and computes aggregates over the full, unfiltered collection: per-category
//! counts and completion progress. Nothing here performs I/O or reads the
//! clock; callers supply "today" where dates matter.

mod due;
mod order;
mod progress;

pub use due::{DueBadge, DueLabel, due_badge};
pub use order::{compare_for_display, sort_for_display};
pub use progress::{Achievement, Progress};

use crate::task::domain::{CategoryId, Task, TaskDomainError};
use std::collections::BTreeMap;
use std::fmt;

/// Number of tasks referencing each category.
pub type CategoryCounts = BTreeMap<CategoryId, usize>;

/// Active category filter of the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks referencing this category.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Keyword selecting every task.
    pub const ALL: &'static str = "all";

    /// Parses a filter, treating `all` (case-insensitive) as no filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCategory`] when the value is neither
    /// `all` nor a valid category identifier.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if value.trim().eq_ignore_ascii_case(Self::ALL) {
            return Ok(Self::All);
        }
        Ok(Self::Only(CategoryId::new(value)?))
    }

    /// Returns whether the task passes this filter.
    #[must_use]
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => task.category() == category,
        }
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(value: CategoryId) -> Self {
        Self::Only(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Why a filtered list came out empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// There are no tasks at all.
    Welcome,
    /// Tasks exist, but none in the filtered category.
    NoTasksInCategory(CategoryId),
}

impl EmptyState {
    /// Heading shown in place of the empty list.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Welcome => "Welcome to TaskFlow!".to_owned(),
            Self::NoTasksInCategory(category) => format!("No {category} tasks"),
        }
    }
}

/// Display-ready projection of a task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    /// Filtered tasks in display order.
    pub tasks: Vec<Task>,
    /// Per-category counts over the full collection.
    pub category_counts: CategoryCounts,
    /// Completion progress over the full collection.
    pub progress: Progress,
    /// Set when the filtered list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Counts tasks per referenced category.
#[must_use]
pub fn category_counts(tasks: &[Task]) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for task in tasks {
        *counts.entry(task.category().clone()).or_insert(0) += 1;
    }
    counts
}

/// Filters and orders a task collection and aggregates it for display.
#[must_use]
pub fn project(tasks: &[Task], filter: &CategoryFilter) -> TaskListView {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.admits(task))
        .cloned()
        .collect();
    sort_for_display(&mut visible);

    let empty_state = match filter {
        _ if !visible.is_empty() => None,
        _ if tasks.is_empty() => Some(EmptyState::Welcome),
        CategoryFilter::Only(category) => Some(EmptyState::NoTasksInCategory(category.clone())),
        CategoryFilter::All => Some(EmptyState::Welcome),
    };

    TaskListView {
        tasks: visible,
        category_counts: category_counts(tasks),
        progress: Progress::of(tasks),
        empty_state,
    }
}
