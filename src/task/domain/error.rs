//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The category identifier is empty or contains whitespace.
    #[error("invalid category identifier '{0}'")]
    InvalidCategory(String),

    /// The priority value is not one of `low`, `medium`, or `high`.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),
}

/// Error returned while parsing task priorities from text or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
