//! Store-level tests for the in-memory adapters.

use rstest::rstest;
use tasklist::task::{
    adapters::memory::{
        InMemoryProjectRepository, InMemoryTaskRepository, SequentialTaskIdAllocator,
    },
    domain::{Project, ProjectName, Task, TaskChange, TaskDescription, TaskId},
    ports::{ProjectRepository, TaskIdAllocator, TaskListRepositoryError, TaskRepository},
};

use super::helpers::date;

fn task(id: u64, description: &str) -> eyre::Result<Task> {
    Ok(Task::new(
        TaskId::new(id),
        ProjectName::new("secrets")?,
        TaskDescription::new(description)?,
    ))
}

#[rstest]
fn allocator_starts_at_one_and_increments() {
    let allocator = SequentialTaskIdAllocator::new();
    let issued: Vec<TaskId> = (0..3).map(|_| allocator.next_id()).collect();
    assert_eq!(issued, vec![TaskId::new(1), TaskId::new(2), TaskId::new(3)]);
}

#[rstest]
fn project_store_keeps_insertion_order() -> eyre::Result<()> {
    let store = InMemoryProjectRepository::new();
    for name in ["secrets", "training", "chores"] {
        store.save(&Project::new(ProjectName::new(name)?))?;
    }

    let names: Vec<String> = store
        .find_all()?
        .iter()
        .map(|project| project.name().to_string())
        .collect();
    assert_eq!(names, vec!["secrets", "training", "chores"]);

    let found = store.find_by_name(&ProjectName::new("training")?)?;
    assert!(found.is_some());
    assert!(store.find_by_name(&ProjectName::new("Training")?)?.is_none());
    Ok(())
}

#[rstest]
fn task_store_rejects_duplicate_identifiers() -> eyre::Result<()> {
    let store = InMemoryTaskRepository::new();
    store.save(&task(1, "Eat more donuts.")?)?;

    let result = store.save(&task(1, "Destroy all humans.")?);
    assert!(matches!(
        result,
        Err(TaskListRepositoryError::DuplicateTask(id)) if id == TaskId::new(1)
    ));
    assert_eq!(store.find_all()?.len(), 1);
    Ok(())
}

#[rstest]
fn task_store_updates_in_place() -> eyre::Result<()> {
    let store = InMemoryTaskRepository::new();
    store.save(&task(1, "Eat more donuts.")?)?;
    store.save(&task(2, "Destroy all humans.")?)?;

    let updated = store.update(TaskId::new(2), TaskChange::DueDate(date(2014, 1, 14)?))?;
    assert_eq!(
        updated.as_ref().and_then(Task::due_date),
        Some(date(2014, 1, 14)?)
    );

    let stored = store.find_by_id(TaskId::new(2))?;
    assert_eq!(stored, updated);
    let order: Vec<TaskId> = store.find_all()?.iter().map(Task::id).collect();
    assert_eq!(order, vec![TaskId::new(1), TaskId::new(2)]);
    Ok(())
}

#[rstest]
fn task_store_update_of_missing_task_changes_nothing() -> eyre::Result<()> {
    let store = InMemoryTaskRepository::new();
    store.save(&task(1, "Eat more donuts.")?)?;

    let result = store.update(TaskId::new(7), TaskChange::Status(true))?;
    assert!(result.is_none());
    assert!(store.find_all()?.iter().all(|entry| !entry.is_done()));
    Ok(())
}
