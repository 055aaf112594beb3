//! Given steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::inference::infer;
use taskflow::task::services::CreateTaskRequest;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    run_async(world.controller.load()).wrap_err("load empty task list")?;
    world.notifier.drain();
    Ok(())
}

#[given(r#"the user has added "{title}""#)]
fn user_has_added(world: &mut TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let today = chrono::Utc::now().date_naive();
    let request = CreateTaskRequest::new(&title).with_hints(&infer(&title, today));
    run_async(world.controller.create_task(request))
        .wrap_err_with(|| format!("add task '{title}' in scenario setup"))?;
    Ok(())
}
