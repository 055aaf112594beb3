//! Repository port for task persistence and lookup.

use crate::task::domain::{Category, Task, TaskDraft, TaskFilter, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Every operation may suspend the caller; implementations are free to add
/// latency before completing.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Seeds the task and category records when they are absent.
    ///
    /// Calling this more than once never overwrites existing data.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the records cannot be read or
    /// written.
    async fn initialize(&self) -> TaskStoreResult<()>;

    /// Returns every task, in storage order (newest first).
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the task record cannot be
    /// read.
    async fn get_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the task record cannot be
    /// read.
    async fn get_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Creates a task from a draft, assigning a fresh identifier.
    ///
    /// The new task is stored first in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when persistence fails.
    async fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task>;

    /// Merges a patch over an existing task, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist, or
    /// [`TaskStoreError::Storage`] when persistence fails.
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Removes a task. Removing an unknown task succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when persistence fails.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<bool>;

    /// Removes every listed task, ignoring unknown identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when persistence fails.
    async fn bulk_delete(&self, ids: &[TaskId]) -> TaskStoreResult<bool>;

    /// Returns every category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the category record cannot be
    /// read.
    async fn get_categories(&self) -> TaskStoreResult<Vec<Category>>;

    /// Returns the tasks matching a filter, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the task record cannot be
    /// read.
    async fn query(&self, filter: &TaskFilter) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
