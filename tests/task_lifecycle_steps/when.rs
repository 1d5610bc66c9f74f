//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::{Duration, Utc};
use cronobra::auth::Principal;
use cronobra::task::services::{CompleteTaskRequest, CreateTaskRequest};
use cronobra::user::domain::{Role, UserId};
use rstest_bdd_macros::when;

#[when(r#"the administrator creates a task "{title}" assigned to the worker"#)]
fn administrator_creates_task(
    world: &mut TaskLifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let schedule = world
        .schedule
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing schedule in scenario world"))?;
    let result = run_async(world.tasks.create_task(
        &world.admin,
        CreateTaskRequest {
            schedule_id: schedule.id(),
            title,
            description: "Pour and level the slab".to_owned(),
            assigned_to: world.worker.user_id(),
            due_date: Utc::now() + Duration::days(30),
        },
    ));
    match result {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("the worker starts the task")]
fn worker_starts(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    match run_async(world.tasks.start_task(&world.worker, id)) {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("another worker starts the task")]
fn another_worker_starts(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let stranger = Principal::new(UserId::new(), Role::Worker);
    match run_async(world.tasks.start_task(&stranger, id)) {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("the worker completes the task with a photo")]
fn worker_completes(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    submit_photo(world, b"jpeg bytes".to_vec())
}

#[when("the worker submits an empty photo")]
fn worker_submits_empty_photo(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    submit_photo(world, Vec::new())
}

#[when("the administrator approves the task")]
fn administrator_approves(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    match run_async(world.tasks.approve_task(&world.admin, id)) {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("the administrator rejects the task")]
fn administrator_rejects(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    match run_async(world.tasks.reject_task(&world.admin, id)) {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

fn submit_photo(world: &mut TaskLifecycleWorld, bytes: Vec<u8>) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let result = run_async(world.tasks.complete_task(
        &world.worker,
        CompleteTaskRequest {
            task_id: id,
            photo_file_name: "slab.jpg".to_owned(),
            photo_content_type: "image/jpeg".to_owned(),
            photo_bytes: bytes,
            metadata: None,
        },
    ));
    match result {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}
