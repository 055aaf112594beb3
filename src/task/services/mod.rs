//! Application services for task management.

mod controller;
mod requests;

pub use controller::{TaskController, TaskControllerError, TaskControllerResult};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
