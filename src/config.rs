//! Runtime configuration for the task store and task input.
//!
//! Configuration values have sensible defaults matching the interactive
//! application, and can be loaded from a JSON document in which every field
//! is optional.
//!
//! # Examples
//!
//! ```
//! use taskflow::config::TaskFlowConfig;
//! use std::time::Duration;
//!
//! let config = TaskFlowConfig::default();
//! assert_eq!(config.store.read_latency(), Duration::from_millis(200));
//!
//! let custom = TaskFlowConfig::from_json_str(r#"{ "store": { "create_latency_ms": 50 } }"#)
//!     .expect("valid configuration");
//! assert_eq!(custom.store.create_latency(), Duration::from_millis(50));
//! assert_eq!(custom.store.tasks_key, "taskflow_tasks");
//! ```

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Storage key of the task record.
pub const DEFAULT_TASKS_KEY: &str = "taskflow_tasks";
/// Storage key of the category record.
pub const DEFAULT_CATEGORIES_KEY: &str = "taskflow_categories";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskFlowConfig {
    /// Task store configuration.
    pub store: StoreConfig,
    /// Task input configuration.
    pub input: InputConfig,
}

impl TaskFlowConfig {
    /// Creates a configuration without artificial delays.
    ///
    /// Useful for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            store: StoreConfig::instant(),
            input: InputConfig::instant(),
        }
    }

    /// Parses a configuration from JSON, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// has fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Task store configuration: record keys and simulated latencies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key of the task record.
    pub tasks_key: String,
    /// Storage key of the category record.
    pub categories_key: String,
    /// Delay before read operations complete, in milliseconds.
    pub read_latency_ms: u64,
    /// Delay before `create` completes, in milliseconds.
    pub create_latency_ms: u64,
    /// Delay before `update` completes, in milliseconds.
    pub update_latency_ms: u64,
    /// Delay before `delete` completes, in milliseconds.
    pub delete_latency_ms: u64,
    /// Delay before `bulk_delete` completes, in milliseconds.
    pub bulk_delete_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_owned(),
            categories_key: DEFAULT_CATEGORIES_KEY.to_owned(),
            read_latency_ms: 200,
            create_latency_ms: 300,
            update_latency_ms: 200,
            delete_latency_ms: 200,
            bulk_delete_latency_ms: 300,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration whose operations complete without delay.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            read_latency_ms: 0,
            create_latency_ms: 0,
            update_latency_ms: 0,
            delete_latency_ms: 0,
            bulk_delete_latency_ms: 0,
            ..Self::default()
        }
    }

    /// Returns the read latency.
    #[must_use]
    pub const fn read_latency(&self) -> Duration {
        Duration::from_millis(self.read_latency_ms)
    }

    /// Returns the create latency.
    #[must_use]
    pub const fn create_latency(&self) -> Duration {
        Duration::from_millis(self.create_latency_ms)
    }

    /// Returns the update latency.
    #[must_use]
    pub const fn update_latency(&self) -> Duration {
        Duration::from_millis(self.update_latency_ms)
    }

    /// Returns the delete latency.
    #[must_use]
    pub const fn delete_latency(&self) -> Duration {
        Duration::from_millis(self.delete_latency_ms)
    }

    /// Returns the bulk delete latency.
    #[must_use]
    pub const fn bulk_delete_latency(&self) -> Duration {
        Duration::from_millis(self.bulk_delete_latency_ms)
    }
}

/// Task input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Quiet period after the last keystroke before inference runs, in
    /// milliseconds.
    pub inference_quiet_period_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            inference_quiet_period_ms: 500,
        }
    }
}

impl InputConfig {
    /// Creates a configuration that infers on the next scheduler turn.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            inference_quiet_period_ms: 0,
        }
    }

    /// Returns the inference quiet period.
    #[must_use]
    pub const fn inference_quiet_period(&self) -> Duration {
        Duration::from_millis(self.inference_quiet_period_ms)
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is malformed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
