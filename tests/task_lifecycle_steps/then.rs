//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use cronobra::auth::AccessError;
use cronobra::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.task_id()?;

    // Assert against the stored task, not the last returned snapshot.
    let stored = run_async(world.tasks.task(id))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task missing from repository"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the audit trail has {count:usize} entries")]
fn audit_trail_has_entries(
    world: &TaskLifecycleWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let logs = run_async(world.tasks.logs(&world.admin, id))
        .map_err(|err| eyre::eyre!("log read failed: {err}"))?;
    if logs.len() != count {
        return Err(eyre::eyre!(
            "expected {count} audit entries, found {}",
            logs.len()
        ));
    }
    Ok(())
}

#[then("the task has {count:usize} evidence records")]
fn task_has_evidence_records(
    world: &TaskLifecycleWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let evidence = run_async(world.tasks.evidence_for_task(id))
        .map_err(|err| eyre::eyre!("evidence read failed: {err}"))?;
    if evidence.len() != count {
        return Err(eyre::eyre!(
            "expected {count} evidence records, found {}",
            evidence.len()
        ));
    }
    Ok(())
}

#[then("the operation is forbidden")]
fn operation_is_forbidden(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_error {
        Some(TaskLifecycleError::Access(AccessError::NotAssignee { .. })) => Ok(()),
        Some(ref other) => Err(eyre::eyre!("expected NotAssignee error, got {other:?}")),
        None => Err(eyre::eyre!("expected a forbidden error, got success")),
    }
}

#[then("the completion is refused for missing evidence")]
fn completion_refused_for_missing_evidence(
    world: &TaskLifecycleWorld,
) -> Result<(), eyre::Report> {
    match world.last_error {
        Some(TaskLifecycleError::Domain(TaskDomainError::EmptyPhoto)) => Ok(()),
        Some(ref other) => Err(eyre::eyre!("expected EmptyPhoto error, got {other:?}")),
        None => Err(eyre::eyre!("expected a validation error, got success")),
    }
}
