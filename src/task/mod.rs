//! Task storage and user actions for TaskFlow.
//!
//! Tasks are persisted as a single ordered record, newest first, next to a
//! record of categories. Stores mutate that record under a write lock, and
//! the controller mirrors every successful mutation into its loaded copy
//! while reporting outcomes to a notifier. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
