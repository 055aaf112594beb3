//! In-memory adapters for storage and notifications.

mod notifier;
mod storage;

pub use notifier::RecordingNotifier;
pub use storage::InMemoryKeyValueStorage;
