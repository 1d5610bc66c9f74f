//! Application services for the task context.

mod lifecycle;

pub use lifecycle::{
    CompleteTaskRequest, CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
