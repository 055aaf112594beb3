//! Then steps for task management BDD scenarios.

use super::world::TaskManagementWorld;
use chrono::{Days, Utc};
use rstest_bdd_macros::then;
use taskflow::task::{
    domain::{CategoryId, Priority, TaskDomainError},
    services::TaskControllerError,
};

#[then("the task list contains {count:u64} task")]
fn task_list_contains(world: &TaskManagementWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.controller.tasks().len())?;
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the newest task has priority "{priority}""#)]
fn newest_task_priority(world: &TaskManagementWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let task = world.newest_task()?;
    eyre::ensure!(
        task.priority() == expected,
        "expected priority {expected}, found {}",
        task.priority()
    );
    Ok(())
}

#[then(r#"the newest task is in category "{category}""#)]
fn newest_task_category(world: &TaskManagementWorld, category: String) -> Result<(), eyre::Report> {
    let task = world.newest_task()?;
    eyre::ensure!(
        task.category().as_str() == category,
        "expected category {category}, found {}",
        task.category()
    );
    Ok(())
}

#[then("the newest task is due tomorrow")]
fn newest_task_due_tomorrow(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let tomorrow = Utc::now().date_naive().checked_add_days(Days::new(1));
    let task = world.newest_task()?;
    eyre::ensure!(
        task.due_date() == tomorrow,
        "expected due date {tomorrow:?}, found {:?}",
        task.due_date()
    );
    Ok(())
}

#[then(r#"the last notification is "{message}""#)]
fn last_notification_is(world: &TaskManagementWorld, message: String) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was raised"))?;
    eyre::ensure!(
        last.message == message,
        "expected notification '{message}', found '{last}'"
    );
    Ok(())
}

#[then("progress is {percentage:u64} percent")]
fn progress_is(world: &TaskManagementWorld, percentage: u64) -> Result<(), eyre::Report> {
    let actual = u64::from(world.controller.progress().percentage());
    eyre::ensure!(
        actual == percentage,
        "expected {percentage}% progress, found {actual}%"
    );
    Ok(())
}

#[then(r#"the empty state reads "{title}""#)]
fn empty_state_reads(world: &TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing filtered view"))?;
    let state = view
        .empty_state
        .as_ref()
        .ok_or_else(|| eyre::eyre!("filtered list is not empty"))?;
    eyre::ensure!(
        state.title() == title,
        "expected empty state '{title}', found '{}'",
        state.title()
    );
    Ok(())
}

#[then(r#"the category "{category}" counts {count:u64} task"#)]
fn category_counts(
    world: &TaskManagementWorld,
    category: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let id = CategoryId::new(category.as_str())
        .map_err(|err| eyre::eyre!("invalid category in scenario: {err}"))?;
    let actual = u64::try_from(
        world
            .controller
            .category_counts()
            .get(&id)
            .copied()
            .unwrap_or(0),
    )?;
    eyre::ensure!(actual == count, "expected {count} {id} tasks, found {actual}");
    Ok(())
}

#[then("the submission is rejected for a blank title")]
fn submission_rejected_blank(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskControllerError::Domain(TaskDomainError::EmptyTitle))
        ),
        "expected EmptyTitle error, got {result:?}"
    );
    Ok(())
}
