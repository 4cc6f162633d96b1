//! Task list operations through the public service API.

use rstest::rstest;
use tasklist::task::{
    adapters::memory::InMemoryTaskListService,
    domain::TaskId,
    services::TaskListError,
};

use super::helpers::{date, ids, seed_project, service};

#[rstest]
fn identifiers_continue_across_projects(service: InMemoryTaskListService) -> eyre::Result<()> {
    let secrets = seed_project(&service, "secrets", &["Eat more donuts.", "Destroy all humans."])?;
    let training = seed_project(
        &service,
        "training",
        &["Four Elements of Simple Design", "SOLID", "Coupling and Cohesion"],
    )?;

    assert_eq!(ids(&secrets), vec![1, 2]);
    assert_eq!(ids(&training), vec![3, 4, 5]);
    Ok(())
}

#[rstest]
fn failed_additions_leave_no_trace(service: InMemoryTaskListService) -> eyre::Result<()> {
    seed_project(&service, "secrets", &[])?;

    assert!(matches!(
        service.add_task_to_project("training", "SOLID"),
        Err(TaskListError::ProjectNotFound(_))
    ));
    assert!(matches!(
        service.add_task_to_project("Secrets", "SOLID"),
        Err(TaskListError::ProjectNotFound(_))
    ));

    let created = service.add_task_to_project("secrets", "Eat more donuts.")?;
    assert_eq!(created.id(), TaskId::new(1));
    assert_eq!(service.tasks_for_project("secrets")?.len(), 1);
    Ok(())
}

#[rstest]
fn status_and_deadline_changes_are_visible_to_queries(
    service: InMemoryTaskListService,
) -> eyre::Result<()> {
    let tasks = seed_project(&service, "secrets", &["Eat more donuts."])?;
    let id = tasks
        .first()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;

    service.change_status_on_task(id, true)?;
    service.set_deadline_on_task(id, date(2014, 1, 14)?)?;

    let fetched = service.find_task(id)?;
    assert!(fetched.is_done());
    assert_eq!(fetched.due_date(), Some(date(2014, 1, 14)?));
    assert_eq!(fetched.description().as_str(), "Eat more donuts.");
    Ok(())
}

#[rstest]
fn unchecking_an_open_task_is_a_no_op(service: InMemoryTaskListService) -> eyre::Result<()> {
    let tasks = seed_project(&service, "secrets", &["Eat more donuts."])?;
    let before = tasks
        .first()
        .cloned()
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;

    let after = service.change_status_on_task(before.id(), false)?;
    assert_eq!(after, before);
    Ok(())
}
