//! By-project and by-deadline views over populated stores.

use rstest::rstest;
use tasklist::task::{
    adapters::memory::InMemoryTaskListService,
    domain::{Deadline, ProjectName, TaskId},
};

use super::helpers::{date, ids, seed_project, service};

#[rstest]
fn by_project_reports_every_project_once(service: InMemoryTaskListService) -> eyre::Result<()> {
    seed_project(&service, "secrets", &["Eat more donuts.", "Destroy all humans."])?;
    seed_project(&service, "empty", &[])?;
    seed_project(&service, "training", &["SOLID"])?;

    let view = service.tasks_grouped_by_project()?;
    let names: Vec<String> = view
        .iter()
        .map(|group| group.project().name().to_string())
        .collect();
    assert_eq!(names, vec!["secrets", "empty", "training"]);

    assert_eq!(
        view.tasks_for(&ProjectName::new("empty")?).map(ids),
        Some(vec![])
    );
    assert_eq!(
        view.tasks_for(&ProjectName::new("training")?).map(ids),
        Some(vec![3])
    );
    Ok(())
}

#[rstest]
fn by_deadline_groups_shared_dates_in_creation_order(
    service: InMemoryTaskListService,
) -> eyre::Result<()> {
    seed_project(&service, "secrets", &["a", "b"])?;
    seed_project(&service, "training", &["c", "d", "e"])?;
    let due = date(2014, 1, 15)?;
    for id in [4, 1, 2] {
        service.set_deadline_on_task(TaskId::new(id), due)?;
    }
    service.set_deadline_on_task(TaskId::new(5), date(2013, 12, 31)?)?;

    let view = service.tasks_grouped_by_deadline()?;
    let groups: Vec<(Deadline, Vec<u64>)> = view
        .iter()
        .map(|(deadline, tasks)| (deadline, ids(tasks)))
        .collect();

    assert_eq!(
        groups,
        vec![
            (Deadline::Due(date(2013, 12, 31)?), vec![5]),
            (Deadline::Due(due), vec![1, 2, 4]),
            (Deadline::Unscheduled, vec![3]),
        ]
    );
    Ok(())
}

#[rstest]
fn by_deadline_compares_dates_not_text(service: InMemoryTaskListService) -> eyre::Result<()> {
    seed_project(&service, "secrets", &["a", "b"])?;
    service.set_deadline_on_task(TaskId::new(1), date(2015, 1, 2)?)?;
    service.set_deadline_on_task(TaskId::new(2), date(2014, 12, 3)?)?;

    let view = service.tasks_grouped_by_deadline()?;
    let labels: Vec<String> = view.deadlines().map(|key| key.to_string()).collect();
    assert_eq!(labels, vec!["03-12-2014", "02-01-2015"]);
    Ok(())
}

#[rstest]
fn by_deadline_without_tasks_is_empty(service: InMemoryTaskListService) -> eyre::Result<()> {
    seed_project(&service, "secrets", &[])?;
    assert!(service.tasks_grouped_by_deadline()?.is_empty());
    Ok(())
}
