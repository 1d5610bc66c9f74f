//! Contract tests for the in-memory task repository.
//!
//! These exercise the repository port directly: atomic create, guarded
//! transitions, the compare-and-set race report, and read ordering.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use chrono::{Duration, Utc};
use cronobra::schedule::domain::ScheduleId;
use cronobra::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{LogAction, Task, TaskLog, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use cronobra::user::domain::UserId;
use mockable::DefaultClock;

fn build_task(schedule_id: ScheduleId, assigned_to: UserId) -> Task {
    Task::new(
        schedule_id,
        "Pour foundation",
        "Pour and level the slab",
        assigned_to,
        Utc::now() + Duration::days(7),
        &DefaultClock,
    )
    .expect("task should be valid")
}

fn creation_log(task: &Task, actor: UserId) -> TaskLog {
    TaskLog::record(
        task.id(),
        LogAction::Created,
        None,
        Some(TaskStatus::Pending),
        actor,
        &DefaultClock,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_identifiers() {
    let repo = InMemoryTaskRepository::new();
    let actor = UserId::new();
    let task = build_task(ScheduleId::new(), UserId::new());
    repo.create(&task, &creation_log(&task, actor))
        .await
        .expect("first create should succeed");

    let result = repo.create(&task, &creation_log(&task, actor)).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_transition_reports_the_stored_status() {
    let repo = InMemoryTaskRepository::new();
    let actor = UserId::new();
    let mut task = build_task(ScheduleId::new(), actor);
    repo.create(&task, &creation_log(&task, actor))
        .await
        .expect("create should succeed");

    // First writer wins the Pending -> InProgress race.
    task.transition_to(TaskStatus::InProgress, &DefaultClock)
        .expect("transition should be valid");
    let log = TaskLog::record(
        task.id(),
        LogAction::StatusChanged,
        Some(TaskStatus::Pending),
        Some(TaskStatus::InProgress),
        actor,
        &DefaultClock,
    );
    repo.apply_transition(&task, TaskStatus::Pending, &log)
        .await
        .expect("first transition should succeed");

    // Second writer still believes the task is Pending.
    let result = repo
        .apply_transition(&task, TaskStatus::Pending, &log)
        .await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::StaleStatus {
            expected: TaskStatus::Pending,
            actual: TaskStatus::InProgress,
            ..
        })
    ));
    let logs = repo
        .logs_for_task(task.id())
        .await
        .expect("log read should succeed");
    assert_eq!(logs.len(), 2, "the losing writer must not append a log");
}

#[tokio::test(flavor = "multi_thread")]
async fn logs_read_newest_first() {
    let repo = InMemoryTaskRepository::new();
    let actor = UserId::new();
    let mut task = build_task(ScheduleId::new(), actor);
    repo.create(&task, &creation_log(&task, actor))
        .await
        .expect("create should succeed");

    task.transition_to(TaskStatus::InProgress, &DefaultClock)
        .expect("transition should be valid");
    let log = TaskLog::record(
        task.id(),
        LogAction::StatusChanged,
        Some(TaskStatus::Pending),
        Some(TaskStatus::InProgress),
        actor,
        &DefaultClock,
    );
    repo.apply_transition(&task, TaskStatus::Pending, &log)
        .await
        .expect("transition should succeed");

    let logs = repo
        .logs_for_task(task.id())
        .await
        .expect("log read should succeed");

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action(), LogAction::StatusChanged);
    assert_eq!(logs[1].action(), LogAction::Created);
}

#[tokio::test(flavor = "multi_thread")]
async fn listings_filter_by_schedule_and_assignee() {
    let repo = InMemoryTaskRepository::new();
    let actor = UserId::new();
    let schedule_a = ScheduleId::new();
    let schedule_b = ScheduleId::new();
    let worker_one = UserId::new();
    let worker_two = UserId::new();

    let first = build_task(schedule_a, worker_one);
    let second = build_task(schedule_a, worker_two);
    let third = build_task(schedule_b, worker_one);
    for task in [&first, &second, &third] {
        repo.create(task, &creation_log(task, actor))
            .await
            .expect("create should succeed");
    }

    let in_a = repo
        .find_by_schedule(schedule_a)
        .await
        .expect("schedule query should succeed");
    assert_eq!(in_a.len(), 2);
    assert!(in_a.iter().all(|task| task.schedule_id() == schedule_a));

    let for_one = repo
        .find_by_assignee(worker_one)
        .await
        .expect("assignee query should succeed");
    assert_eq!(for_one.len(), 2);
    assert!(for_one.iter().all(|task| task.assigned_to() == worker_one));

    assert_eq!(
        repo.count_for_schedule(schedule_b)
            .await
            .expect("count should succeed"),
        1
    );
}
