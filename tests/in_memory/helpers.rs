//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::config::StoreConfig;
use taskflow::task::{
    adapters::{
        LocalTaskStore,
        memory::{InMemoryKeyValueStorage, RecordingNotifier},
    },
    ports::TaskStore,
    services::TaskController,
};

/// Store type used by in-memory integration tests.
pub type TestStore = LocalTaskStore<InMemoryKeyValueStorage, DefaultClock>;

/// Controller type used by in-memory integration tests.
pub type TestController = TaskController<TestStore, RecordingNotifier, DefaultClock>;

/// Provides shared in-memory storage that starts empty.
#[fixture]
pub fn storage() -> InMemoryKeyValueStorage {
    InMemoryKeyValueStorage::new()
}

/// Provides a recording notifier.
#[fixture]
pub fn notifier() -> RecordingNotifier {
    RecordingNotifier::new()
}

/// Builds a store over `storage` that completes without delay.
#[must_use]
pub fn instant_store(storage: &InMemoryKeyValueStorage) -> Arc<TestStore> {
    Arc::new(LocalTaskStore::with_config(
        Arc::new(storage.clone()),
        Arc::new(DefaultClock),
        StoreConfig::instant(),
    ))
}

/// Seeds `storage` and returns a controller with the seed loaded.
///
/// # Errors
///
/// Returns an error if seeding or loading fails.
pub async fn seeded_controller(
    storage: &InMemoryKeyValueStorage,
    notifier: &RecordingNotifier,
) -> Result<TestController, eyre::Report> {
    let store = instant_store(storage);
    store.initialize().await?;
    let mut controller =
        TaskController::new(store, Arc::new(notifier.clone()), Arc::new(DefaultClock));
    controller.load().await?;
    notifier.drain();
    Ok(controller)
}
