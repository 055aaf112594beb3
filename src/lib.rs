//! TaskFlow: single-user task management core.
//!
//! This crate keeps a persistent collection of tasks grouped into
//! categories, infers task attributes from free-text titles, and projects
//! the collection into a filtered, ordered list with aggregate statistics.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and notifications
//! - **Adapters**: Concrete implementations of ports (key-value records,
//!   directories, tracing)
//!
//! # Modules
//!
//! - [`config`]: Store record keys, simulated latencies, and input timing
//! - [`inference`]: Keyword-based priority, due date, and category hints
//! - [`projection`]: Filtering, display ordering, and aggregates
//! - [`task`]: Task domain, store port and adapters, and the controller

pub mod config;
pub mod inference;
pub mod projection;
pub mod task;
