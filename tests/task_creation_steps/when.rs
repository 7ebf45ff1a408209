//! When steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskbook::task::services::CreateTaskRequest;

#[when(r#"the task "{title}" due "{due_date}" with priority "{priority}" is created"#)]
fn create_task(world: &mut TaskWorld, title: String, due_date: String, priority: String) {
    let request = CreateTaskRequest::new(title, "desc", due_date, priority);
    world.last_create_result = Some(run_async(world.service.create_task(request)));
}

#[when(r#"a task without a title due "{due_date}" with priority "{priority}" is created"#)]
fn create_untitled_task(world: &mut TaskWorld, due_date: String, priority: String) {
    let request = CreateTaskRequest::new("", "no title", due_date, priority);
    world.last_create_result = Some(run_async(world.service.create_task(request)));
}
