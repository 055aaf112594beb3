//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod repository;
pub mod storage;

pub use notifier::{Notification, NotificationLevel, Notifier};
pub use repository::{TaskStore, TaskStoreError, TaskStoreResult};
pub use storage::{KeyValueStorage, StorageError, StorageResult};
