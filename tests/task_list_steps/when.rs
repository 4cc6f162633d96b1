//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::{TaskId, parse_due_date};

#[when(r#"the task "{description}" is added to project "{project}""#)]
fn add_task(world: &mut TaskListWorld, description: String, project: String) {
    let result = world.service.add_task_to_project(&project, &description);
    world.record(result);
}

#[when(r#"a project named "{name}" is created"#)]
fn create_project(world: &mut TaskListWorld, name: String) {
    let result = world.service.create_project(&name);
    world.record(result);
}

#[when(r#"task {id:u64} is due on "{date}""#)]
fn set_deadline(world: &mut TaskListWorld, id: u64, date: String) -> Result<(), eyre::Report> {
    let due_date = parse_due_date(&date).wrap_err("parse scenario due date")?;
    let result = world.service.set_deadline_on_task(TaskId::new(id), due_date);
    world.record(result);
    Ok(())
}

#[when("task {id:u64} is checked")]
fn check_task(world: &mut TaskListWorld, id: u64) {
    let result = world.service.change_status_on_task(TaskId::new(id), true);
    world.record(result);
}
