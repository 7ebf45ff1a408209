//! Given steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskbook::task::services::CreateTaskRequest;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let stored = world
        .store
        .snapshot()
        .wrap_err("read task store snapshot")?;
    eyre::ensure!(stored.is_empty(), "expected an empty task store");
    Ok(())
}

#[given(r#"the task "{title}" due "{due_date}" with priority "{priority}" already exists"#)]
fn task_already_exists(
    world: &mut TaskWorld,
    title: String,
    due_date: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title, "seeded task", due_date, priority);
    run_async(world.service.create_task(request)).wrap_err("seed existing task")?;
    Ok(())
}
