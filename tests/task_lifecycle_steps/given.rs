//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::{Duration, Utc};
use cronobra::schedule::services::CreateScheduleRequest;
use cronobra::task::services::{CompleteTaskRequest, CreateTaskRequest};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a schedule "{name}" planned by an administrator"#)]
fn schedule_planned(world: &mut TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let schedule = run_async(world.schedules.create_schedule(
        &world.admin,
        CreateScheduleRequest {
            name,
            description: "Structural phase".to_owned(),
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::days(180),
        },
    ))
    .wrap_err("create schedule in scenario setup")?;
    world.schedule = Some(schedule);
    Ok(())
}

#[given(r#"a task "{title}" assigned to the worker"#)]
fn task_assigned(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let schedule = world
        .schedule
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing schedule in scenario world"))?;
    let task = run_async(world.tasks.create_task(
        &world.admin,
        CreateTaskRequest {
            schedule_id: schedule.id(),
            title,
            description: "Pour and level the slab".to_owned(),
            assigned_to: world.worker.user_id(),
            due_date: Utc::now() + Duration::days(30),
        },
    ))
    .wrap_err("create task in scenario setup")?;
    world.task = Some(task);
    Ok(())
}

#[given("the worker has started the task")]
fn worker_has_started(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let task = run_async(world.tasks.start_task(&world.worker, id))
        .wrap_err("start task in scenario setup")?;
    world.task = Some(task);
    Ok(())
}

#[given("the worker has completed the task with a photo")]
fn worker_has_completed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    worker_has_started(world)?;
    let id = world.task_id()?;
    let task = run_async(world.tasks.complete_task(
        &world.worker,
        CompleteTaskRequest {
            task_id: id,
            photo_file_name: "slab.jpg".to_owned(),
            photo_content_type: "image/jpeg".to_owned(),
            photo_bytes: b"jpeg bytes".to_vec(),
            metadata: None,
        },
    ))
    .wrap_err("complete task in scenario setup")?;
    world.task = Some(task);
    Ok(())
}
