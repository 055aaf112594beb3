//! Task store backed by flat records in a key-value storage.
//!
//! Tasks and categories each live in one named record holding a JSON array.
//! Every mutation reads the whole task record, changes it, and writes it
//! back; a per-store write lock serialises these read-modify-write cycles so
//! concurrent callers cannot lose each other's updates.

use crate::config::StoreConfig;
use crate::task::{
    domain::{
        Category, Task, TaskDraft, TaskFilter, TaskId, TaskPatch,
        seed::{DEFAULT_CATEGORIES_JSON, DEFAULT_TASKS_JSON},
    },
    ports::{KeyValueStorage, TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use mockable::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Task store over a [`KeyValueStorage`], simulating network latency.
pub struct LocalTaskStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StoreConfig,
    write_lock: Mutex<()>,
}

impl<S, C> LocalTaskStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Creates a store with default latencies.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, StoreConfig::default())
    }

    /// Creates a store with custom configuration.
    #[must_use]
    pub fn with_config(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        Self {
            storage,
            clock,
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> TaskStoreResult<Vec<T>> {
        let Some(raw) = self.storage.read(key).map_err(TaskStoreError::storage)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(TaskStoreError::storage)
    }

    fn write_record<T: Serialize>(&self, key: &str, records: &[T]) -> TaskStoreResult<()> {
        let raw = serde_json::to_string(records).map_err(TaskStoreError::storage)?;
        self.storage
            .write(key, &raw)
            .map_err(TaskStoreError::storage)
    }

    fn seed_if_absent(&self, key: &str, seed: &str) -> TaskStoreResult<()> {
        if self
            .storage
            .read(key)
            .map_err(TaskStoreError::storage)?
            .is_some()
        {
            return Ok(());
        }
        self.storage
            .write(key, seed)
            .map_err(TaskStoreError::storage)?;
        info!(record = key, "seeded empty storage record");
        Ok(())
    }

    fn read_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.read_record(&self.config.tasks_key)
    }

    fn write_tasks(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        self.write_record(&self.config.tasks_key, tasks)
    }
}

/// Suspends the caller to imitate a round trip to a remote service.
async fn simulate_latency(latency: Duration) {
    if latency.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(latency).await;
    }
}

/// Returns an identifier not used by any of the given tasks.
fn fresh_id(tasks: &[Task]) -> TaskId {
    let taken: HashSet<&TaskId> = tasks.iter().map(Task::id).collect();
    let mut id = TaskId::new();
    while taken.contains(&id) {
        id = TaskId::new();
    }
    id
}

#[async_trait]
impl<S, C> TaskStore for LocalTaskStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    async fn initialize(&self) -> TaskStoreResult<()> {
        simulate_latency(self.config.read_latency()).await;
        let _guard = self.write_lock.lock().await;
        self.seed_if_absent(&self.config.tasks_key, DEFAULT_TASKS_JSON)?;
        self.seed_if_absent(&self.config.categories_key, DEFAULT_CATEGORIES_JSON)
    }

    async fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        simulate_latency(self.config.read_latency()).await;
        self.read_tasks()
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        simulate_latency(self.config.read_latency()).await;
        Ok(self.read_tasks()?.into_iter().find(|task| task.id() == id))
    }

    async fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        simulate_latency(self.config.create_latency()).await;
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.read_tasks()?;
        let task = Task::from_draft(fresh_id(&tasks), draft, &*self.clock);
        tasks.insert(0, task.clone());
        self.write_tasks(&tasks)?;
        debug!(task_id = %task.id(), category = %task.category(), "created task");
        Ok(task)
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        simulate_latency(self.config.update_latency()).await;
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.read_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        task.apply(patch, &*self.clock);
        let updated = task.clone();
        self.write_tasks(&tasks)?;
        debug!(task_id = %id, "updated task");
        Ok(updated)
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<bool> {
        simulate_latency(self.config.delete_latency()).await;
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.read_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() != before {
            self.write_tasks(&tasks)?;
            debug!(task_id = %id, "deleted task");
        }
        Ok(true)
    }

    async fn bulk_delete(&self, ids: &[TaskId]) -> TaskStoreResult<bool> {
        simulate_latency(self.config.bulk_delete_latency()).await;
        let _guard = self.write_lock.lock().await;
        let doomed: HashSet<&TaskId> = ids.iter().collect();
        let mut tasks = self.read_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| !doomed.contains(task.id()));
        let removed = before - tasks.len();
        if removed > 0 {
            self.write_tasks(&tasks)?;
        }
        debug!(requested = ids.len(), removed, "bulk deleted tasks");
        Ok(true)
    }

    async fn get_categories(&self) -> TaskStoreResult<Vec<Category>> {
        simulate_latency(self.config.read_latency()).await;
        self.read_record(&self.config.categories_key)
    }

    async fn query(&self, filter: &TaskFilter) -> TaskStoreResult<Vec<Task>> {
        simulate_latency(self.config.read_latency()).await;
        Ok(filter.apply(self.read_tasks()?))
    }
}
