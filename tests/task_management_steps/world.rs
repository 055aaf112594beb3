//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::config::{DEFAULT_CATEGORIES_KEY, DEFAULT_TASKS_KEY, StoreConfig};
use taskflow::projection::TaskListView;
use taskflow::task::{
    adapters::{
        LocalTaskStore,
        memory::{InMemoryKeyValueStorage, RecordingNotifier},
    },
    domain::Task,
    services::{TaskController, TaskControllerError},
};

/// Store type used by the BDD world.
pub type TestStore = LocalTaskStore<InMemoryKeyValueStorage, DefaultClock>;

/// Controller type used by the BDD world.
pub type TestController = TaskController<TestStore, RecordingNotifier, DefaultClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskManagementWorld {
    pub controller: TestController,
    pub notifier: RecordingNotifier,
    pub last_view: Option<TaskListView>,
    pub last_create_result: Option<Result<Task, TaskControllerError>>,
}

impl TaskManagementWorld {
    /// Creates a world over empty task and category records.
    #[must_use]
    pub fn new() -> Self {
        let storage = InMemoryKeyValueStorage::with_records([
            (DEFAULT_TASKS_KEY, "[]"),
            (DEFAULT_CATEGORIES_KEY, "[]"),
        ]);
        let store = LocalTaskStore::with_config(
            Arc::new(storage),
            Arc::new(DefaultClock),
            StoreConfig::instant(),
        );
        let notifier = RecordingNotifier::new();
        let controller = TaskController::new(
            Arc::new(store),
            Arc::new(notifier.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            controller,
            notifier,
            last_view: None,
            last_create_result: None,
        }
    }

    /// Finds a loaded task by its exact title.
    ///
    /// # Errors
    ///
    /// Returns an error when no loaded task has the title.
    pub fn task_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.controller
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}'"))
    }

    /// Returns the most recently created task.
    ///
    /// # Errors
    ///
    /// Returns an error when the task list is empty.
    pub fn newest_task(&self) -> Result<&Task, eyre::Report> {
        self.controller
            .tasks()
            .first()
            .ok_or_else(|| eyre::eyre!("task list is empty"))
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
