//! Then steps for task creation BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::then;
use taskbook::task::{
    domain::{TaskRecord, TaskStatus, TaskValidationError},
    services::TaskCreationError,
};

fn last_result(world: &TaskWorld) -> Result<&Result<TaskRecord, TaskCreationError>, eyre::Report> {
    world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))
}

fn expect_validation_error(
    world: &TaskWorld,
    matches: impl Fn(&TaskValidationError) -> bool,
    label: &str,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    match result {
        Err(TaskCreationError::Validation(err)) if matches(err) => Ok(()),
        other => Err(eyre::eyre!("expected {label} error, got {other:?}")),
    }
}

#[then("the task is created with the initial status and matching timestamps")]
fn task_created_with_initial_state(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))?;

    if task.status() != TaskStatus::NotCompleted {
        return Err(eyre::eyre!(
            "expected initial status, found {}",
            task.status().as_str()
        ));
    }
    if task.created_at() != task.last_updated_at() {
        return Err(eyre::eyre!(
            "expected created_at and last_updated_at timestamps to match at creation"
        ));
    }
    if task.id().as_str().is_empty() {
        return Err(eyre::eyre!("expected a generated task identifier"));
    }
    Ok(())
}

#[then("task creation fails with a duplicate task error")]
fn duplicate_task_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskCreationError::DuplicateTask { .. })) {
        return Err(eyre::eyre!("expected duplicate task error, got {result:?}"));
    }
    Ok(())
}

#[then("task creation fails with an empty title error")]
fn empty_title_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_validation_error(
        world,
        |err| matches!(err, TaskValidationError::EmptyTitle),
        "empty title",
    )
}

#[then("task creation fails with an invalid due date error")]
fn invalid_due_date_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_validation_error(
        world,
        |err| matches!(err, TaskValidationError::InvalidDueDateFormat(_)),
        "invalid due date",
    )
}

#[then("task creation fails with an invalid priority error")]
fn invalid_priority_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    expect_validation_error(
        world,
        |err| matches!(err, TaskValidationError::InvalidPriority { .. }),
        "invalid priority",
    )
}

#[then("the stored task count is {count:usize}")]
fn stored_task_count(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world
        .store
        .snapshot()
        .map_err(|err| eyre::eyre!("snapshot failed: {err}"))?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored tasks, found {}",
            stored.len()
        ));
    }
    Ok(())
}
