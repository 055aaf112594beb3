//! Adapter implementations for task ports.
//!
//! - [`LocalTaskStore`] implements the task store over any key-value storage
//! - [`memory`] holds in-memory storage and a recording notifier
//! - [`fs`] holds directory-backed storage

pub mod fs;
pub mod memory;

mod local_store;
mod tracing_notifier;

pub use local_store::LocalTaskStore;
pub use tracing_notifier::TracingNotifier;
