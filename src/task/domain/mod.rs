//! Domain model for task management.
//!
//! The task domain models tasks, their categories, creation drafts and
//! partial updates, and the query predicates used by stores, while keeping
//! persistence and presentation outside of the domain boundary.

mod category;
mod error;
mod filter;
mod ids;
mod priority;
pub mod seed;
mod task;

pub use category::Category;
pub use error::{ParsePriorityError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{CategoryId, TaskId, TaskTitle};
pub use priority::Priority;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
