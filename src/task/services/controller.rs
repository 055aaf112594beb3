//! Coordinator for user-initiated task actions.
//!
//! The controller keeps the loaded task and category collections in memory,
//! forwards mutations to the store, and mirrors each successful result
//! locally. Every failure is reported through the notifier and leaves the
//! in-memory state exactly as it was.

use crate::projection::{self, CategoryCounts, CategoryFilter, Progress, TaskListView};
use crate::task::{
    domain::{Category, CategoryId, Priority, Task, TaskDomainError, TaskFilter, TaskId},
    ports::{Notification, Notifier, TaskStore, TaskStoreError, TaskStoreResult},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for task controller operations.
#[derive(Debug, Error)]
pub enum TaskControllerError {
    /// Input validation failed before reaching the store.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task controller operations.
pub type TaskControllerResult<T> = Result<T, TaskControllerError>;

const LOAD_FAILED: &str = "Failed to load tasks";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

/// Task action coordinator.
pub struct TaskController<R, N, C>
where
    R: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    categories: Vec<Category>,
}

impl<R, N, C> TaskController<R, N, C>
where
    R: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a controller with nothing loaded.
    #[must_use]
    pub const fn new(store: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            notifier,
            clock,
            tasks: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Returns the loaded tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the loaded categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns a loaded task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Counts loaded tasks per category.
    ///
    /// Counts are derived from the loaded collection on every call, so they
    /// follow creates, deletes, and category edits alike.
    #[must_use]
    pub fn category_counts(&self) -> CategoryCounts {
        projection::category_counts(&self.tasks)
    }

    /// Returns completion progress over the loaded tasks.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    /// Projects the loaded tasks through a category filter.
    #[must_use]
    pub fn view(&self, filter: &CategoryFilter) -> TaskListView {
        projection::project(&self.tasks, filter)
    }

    fn report_failure(&self, message: &str, err: &TaskControllerError) {
        warn!(error = %err, "{message}");
        self.notifier.notify(Notification::error(message));
    }

    fn fail<T>(
        &self,
        message: &str,
        err: impl Into<TaskControllerError>,
    ) -> TaskControllerResult<T> {
        let error = err.into();
        self.report_failure(message, &error);
        Err(error)
    }

    /// Loads tasks and categories from the store, replacing in-memory state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Store`] when either read fails; the
    /// previously loaded state is kept.
    pub async fn load(&mut self) -> TaskControllerResult<()> {
        let (tasks, categories) = tokio::join!(self.store.get_all(), self.store.get_categories());
        match (tasks, categories) {
            (Ok(loaded_tasks), Ok(loaded_categories)) => {
                debug!(
                    tasks = loaded_tasks.len(),
                    categories = loaded_categories.len(),
                    "loaded task state"
                );
                self.tasks = loaded_tasks;
                self.categories = loaded_categories;
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => self.fail(LOAD_FAILED, err),
        }
    }

    /// Creates a task and puts it first in the loaded list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Domain`] when the request is invalid or
    /// [`TaskControllerError::Store`] when the store rejects it.
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> TaskControllerResult<Task> {
        let draft = match request.into_draft() {
            Ok(draft) => draft,
            Err(err) => return self.fail(CREATE_FAILED, err),
        };
        match self.store.create(draft).await {
            Ok(task) => {
                self.tasks.insert(0, task.clone());
                self.notifier
                    .notify(Notification::success("Task created successfully!"));
                Ok(task)
            }
            Err(err) => self.fail(CREATE_FAILED, err),
        }
    }

    /// Applies a partial update and replaces the loaded copy of the task.
    ///
    /// When the request sets the completion flag, the notification says
    /// whether the task was completed or reopened.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Domain`] when the request is invalid or
    /// [`TaskControllerError::Store`] when the task is missing or the store
    /// fails.
    pub async fn update_task(
        &mut self,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> TaskControllerResult<Task> {
        let completed = request.completed();
        let patch = match request.into_patch() {
            Ok(patch) => patch,
            Err(err) => return self.fail(UPDATE_FAILED, err),
        };
        match self.store.update(id, patch).await {
            Ok(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|loaded| loaded.id() == id) {
                    *slot = task.clone();
                }
                match completed {
                    Some(true) => self.notifier.notify(Notification::success("Task completed!")),
                    Some(false) => self
                        .notifier
                        .notify(Notification::info("Task marked as incomplete")),
                    None => {}
                }
                Ok(task)
            }
            Err(err) => self.fail(UPDATE_FAILED, err),
        }
    }

    /// Flips the completion flag of a loaded task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Store`] with
    /// [`TaskStoreError::NotFound`] when the task is not loaded, or any error
    /// from [`Self::update_task`].
    pub async fn toggle_complete(&mut self, id: &TaskId) -> TaskControllerResult<Task> {
        let Some(completed) = self.task(id).map(Task::is_completed) else {
            return self.fail(UPDATE_FAILED, TaskStoreError::NotFound(id.clone()));
        };
        self.update_task(id, UpdateTaskRequest::new().with_completed(!completed))
            .await
    }

    /// Renames a loaded task.
    ///
    /// The title is trimmed first; an unchanged title is not sent to the
    /// store and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Domain`] for a blank title and
    /// [`TaskControllerError::Store`] when the task is not loaded or the
    /// store fails.
    pub async fn rename_task(
        &mut self,
        id: &TaskId,
        title: &str,
    ) -> TaskControllerResult<Option<Task>> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return self.fail(UPDATE_FAILED, TaskDomainError::EmptyTitle);
        }
        let Some(current) = self.task(id) else {
            return self.fail(UPDATE_FAILED, TaskStoreError::NotFound(id.clone()));
        };
        if current.title().as_str() == trimmed {
            return Ok(None);
        }
        self.update_task(id, UpdateTaskRequest::new().with_title(trimmed))
            .await
            .map(Some)
    }

    /// Deletes a task and removes it from the loaded list.
    ///
    /// Deleting a task that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Store`] when the store fails.
    pub async fn delete_task(&mut self, id: &TaskId) -> TaskControllerResult<()> {
        match self.store.delete(id).await {
            Ok(_) => {
                self.tasks.retain(|task| task.id() != id);
                self.notifier
                    .notify(Notification::success("Task deleted successfully"));
                Ok(())
            }
            Err(err) => self.fail(DELETE_FAILED, err),
        }
    }

    /// Deletes several tasks at once, returning how many loaded tasks were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Store`] when the store fails.
    pub async fn bulk_delete(&mut self, ids: &[TaskId]) -> TaskControllerResult<usize> {
        match self.store.bulk_delete(ids).await {
            Ok(_) => {
                let before = self.tasks.len();
                self.tasks.retain(|task| !ids.contains(task.id()));
                let removed = before - self.tasks.len();
                self.notifier
                    .notify(Notification::success(format!("Deleted {removed} tasks")));
                Ok(removed)
            }
            Err(err) => self.fail(DELETE_FAILED, err),
        }
    }

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn all_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.get_all().await
    }

    /// Returns stored tasks in a category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn tasks_by_category(&self, category: CategoryId) -> TaskStoreResult<Vec<Task>> {
        self.store.query(&TaskFilter::Category(category)).await
    }

    /// Returns stored tasks with a priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn tasks_by_priority(&self, priority: Priority) -> TaskStoreResult<Vec<Task>> {
        self.store.query(&TaskFilter::Priority(priority)).await
    }

    /// Returns completed stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn completed_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.query(&TaskFilter::Completed).await
    }

    /// Returns stored tasks not yet completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn pending_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.query(&TaskFilter::Pending).await
    }

    /// Returns incomplete stored tasks due before today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store read fails.
    pub async fn overdue_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let today = self.clock.utc().date_naive();
        self.store.query(&TaskFilter::Overdue { today }).await
    }
}
