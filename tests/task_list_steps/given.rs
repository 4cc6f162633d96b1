//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a project named "{name}""#)]
fn project_exists(world: &mut TaskListWorld, name: String) -> Result<(), eyre::Report> {
    world
        .service
        .create_project(&name)
        .wrap_err("create project for scenario")?;
    Ok(())
}

#[given(r#"project "{project}" contains the task "{description}""#)]
fn project_contains_task(
    world: &mut TaskListWorld,
    project: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .add_task_to_project(&project, &description)
        .wrap_err("add task for scenario")?;
    Ok(())
}
