//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use tasklist::task::{domain::TaskId, services::TaskListError};

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_owned()).collect()
}

#[then(r#"project "{project}" lists task ids "{ids}""#)]
fn project_lists_ids(
    world: &TaskListWorld,
    project: String,
    ids: String,
) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .tasks_for_project(&project)
        .map_err(|err| eyre::eyre!("project lookup failed: {err}"))?;
    let actual: Vec<String> = tasks.iter().map(|task| task.id().to_string()).collect();
    let expected = split_list(&ids);

    if actual != expected {
        return Err(eyre::eyre!("expected task ids {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the operation fails because the project was not found")]
fn failed_with_project_not_found(world: &TaskListWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskListError::ProjectNotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected project-not-found, got {other:?}")),
    }
}

#[then("the operation fails because the project already exists")]
fn failed_with_duplicate_project(world: &TaskListWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskListError::DuplicateProject(_)) => Ok(()),
        other => Err(eyre::eyre!("expected duplicate-project, got {other:?}")),
    }
}

#[then("the operation fails because the task was not found")]
fn failed_with_task_not_found(world: &TaskListWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskListError::TaskNotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected task-not-found, got {other:?}")),
    }
}

#[then("the task list holds no tasks")]
fn no_tasks_exist(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let view = world
        .service
        .tasks_grouped_by_deadline()
        .map_err(|err| eyre::eyre!("grouping failed: {err}"))?;
    if !view.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {} groups", view.len()));
    }
    Ok(())
}

#[then(r#"the deadline groups are "{labels}""#)]
fn deadline_groups_are(world: &TaskListWorld, labels: String) -> Result<(), eyre::Report> {
    let view = world
        .service
        .tasks_grouped_by_deadline()
        .map_err(|err| eyre::eyre!("grouping failed: {err}"))?;
    let actual: Vec<String> = view.deadlines().map(|key| key.to_string()).collect();
    let expected = split_list(&labels);

    if actual != expected {
        return Err(eyre::eyre!("expected groups {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("task {id:u64} is done")]
fn task_is_done(world: &TaskListWorld, id: u64) -> Result<(), eyre::Report> {
    let task = world
        .service
        .find_task(TaskId::new(id))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?;
    if !task.is_done() {
        return Err(eyre::eyre!("expected task {id} to be done"));
    }
    if world.last_error.is_some() {
        return Err(eyre::eyre!("expected the last check to succeed"));
    }
    Ok(())
}
