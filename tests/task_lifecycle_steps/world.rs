//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use cronobra::auth::Principal;
use cronobra::schedule::{
    adapters::memory::InMemoryScheduleRepository, domain::Schedule,
    services::SchedulePlanningService,
};
use cronobra::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PhotoPayload, Task, TaskId},
    ports::{PhotoStore, PhotoStoreResult},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use cronobra::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{Role, User},
    ports::UserRepository,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Photo store that derives a deterministic URL without touching disk.
#[derive(Debug, Default)]
pub struct MemoryPhotoStore;

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn store(&self, task_id: TaskId, payload: &PhotoPayload) -> PhotoStoreResult<String> {
        Ok(format!("photos/{task_id}/{}", payload.file_name()))
    }
}

/// Task service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryScheduleRepository,
    InMemoryUserRepository,
    MemoryPhotoStore,
    DefaultClock,
>;

/// Schedule service type used by the BDD world.
pub type TestScheduleService =
    SchedulePlanningService<InMemoryScheduleRepository, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub schedules: TestScheduleService,
    pub tasks: TestTaskService,
    pub admin: Principal,
    pub worker: Principal,
    pub schedule: Option<Schedule>,
    pub task: Option<Task>,
    pub last_error: Option<TaskLifecycleError>,
}

impl TaskLifecycleWorld {
    /// Creates a world with a seeded administrator and worker.
    #[must_use]
    pub fn new() -> Self {
        let task_repo = Arc::new(InMemoryTaskRepository::new());
        let schedule_repo = Arc::new(InMemoryScheduleRepository::new());
        let user_repo = Arc::new(InMemoryUserRepository::new());

        let admin = User::new("Site Admin", "admin@obra.example.com", Role::Admin, &DefaultClock)
            .expect("admin should be valid");
        let worker = User::new("Ana Torres", "ana@obra.example.com", Role::Worker, &DefaultClock)
            .expect("worker should be valid");
        run_async(async {
            user_repo
                .store(&admin, "digest")
                .await
                .expect("admin store should succeed");
            user_repo
                .store(&worker, "digest")
                .await
                .expect("worker store should succeed");
        });

        Self {
            schedules: SchedulePlanningService::new(
                Arc::clone(&schedule_repo),
                Arc::clone(&task_repo),
                Arc::new(DefaultClock),
            ),
            tasks: TaskLifecycleService::new(
                task_repo,
                schedule_repo,
                user_repo,
                Arc::new(MemoryPhotoStore),
                Arc::new(DefaultClock),
            ),
            admin: Principal::from_user(&admin),
            worker: Principal::from_user(&worker),
            schedule: None,
            task: None,
            last_error: None,
        }
    }

    /// Returns the scenario task's identifier.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task
            .as_ref()
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
