//! When steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use rstest_bdd_macros::when;
use taskflow::inference::infer;
use taskflow::projection::CategoryFilter;
use taskflow::task::services::CreateTaskRequest;

#[when(r#"the user submits "{title}""#)]
fn user_submits(world: &mut TaskManagementWorld, title: String) {
    let today = chrono::Utc::now().date_naive();
    let request = CreateTaskRequest::new(&title).with_hints(&infer(&title, today));
    let result = run_async(world.controller.create_task(request));
    world.last_create_result = Some(result);
}

#[when(r#"the user toggles "{title}""#)]
fn user_toggles(world: &mut TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?.id().clone();
    run_async(world.controller.toggle_complete(&id))
        .map_err(|err| eyre::eyre!("toggle '{title}': {err}"))?;
    Ok(())
}

#[when(r#"the list is filtered by "{category}""#)]
fn list_filtered_by(world: &mut TaskManagementWorld, category: String) -> Result<(), eyre::Report> {
    let filter = CategoryFilter::parse(&category)
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    world.last_view = Some(world.controller.view(&filter));
    Ok(())
}
