//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain values, the key-value backed store,
//! and the controller coordinating user actions.
