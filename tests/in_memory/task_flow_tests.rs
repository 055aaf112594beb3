//! In-memory integration tests for controller workflows.

use super::helpers::{instant_store, notifier, seeded_controller, storage};
use rstest::rstest;
use taskflow::projection::{Achievement, CategoryFilter, EmptyState};
use taskflow::task::{
    adapters::memory::{InMemoryKeyValueStorage, RecordingNotifier},
    domain::{CategoryId, Priority, Task},
    ports::{NotificationLevel, TaskStore},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

fn category(id: &str) -> Result<CategoryId, eyre::Report> {
    CategoryId::new(id).map_err(|err| eyre::eyre!("invalid category: {err}"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_persist_across_controllers(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut first = seeded_controller(&storage, &notifier).await?;
    let created = first
        .create_task(
            CreateTaskRequest::new("Renew passport")
                .with_category("personal")
                .with_priority(Priority::High),
        )
        .await?;
    first
        .update_task(created.id(), UpdateTaskRequest::new().with_completed(true))
        .await?;

    let second = seeded_controller(&storage, &notifier).await?;
    let reloaded = second
        .task(created.id())
        .ok_or_else(|| eyre::eyre!("created task missing after reload"))?;

    assert!(reloaded.is_completed());
    assert_eq!(reloaded.priority(), Priority::High);
    assert_eq!(second.tasks().first().map(Task::id), Some(created.id()));
    assert_eq!(second.tasks(), first.tasks());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projection_orders_pending_high_priority_first(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    controller
        .create_task(CreateTaskRequest::new("Stretch").with_priority(Priority::Low))
        .await?;

    let view = controller.view(&CategoryFilter::All);
    let first_completed = view
        .tasks
        .iter()
        .position(Task::is_completed)
        .ok_or_else(|| eyre::eyre!("seed has completed tasks"))?;

    assert!(view.tasks.iter().skip(first_completed).all(Task::is_completed));
    assert_eq!(
        view.tasks.first().map(Task::priority),
        Some(Priority::High)
    );
    assert_eq!(view.tasks.len(), 6);
    assert_eq!(view.empty_state, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_everything_is_perfect(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    let pending: Vec<_> = controller
        .tasks()
        .iter()
        .filter(|task| !task.is_completed())
        .map(|task| task.id().clone())
        .collect();
    for id in &pending {
        controller.toggle_complete(id).await?;
    }

    let progress = controller.progress();
    assert_eq!(progress.percentage(), 100);
    assert_eq!(progress.remaining(), 0);
    assert_eq!(progress.achievement(), Some(Achievement::Perfect));
    assert!(
        notifier
            .notifications()
            .iter()
            .all(|note| note.level == NotificationLevel::Success)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_all_tasks_shows_welcome(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    let ids: Vec<_> = controller.tasks().iter().map(|task| task.id().clone()).collect();

    let removed = controller.bulk_delete(&ids).await?;

    assert_eq!(removed, 5);
    let view = controller.view(&CategoryFilter::Only(category("work")?));
    assert_eq!(view.empty_state, Some(EmptyState::Welcome));
    assert!(view.category_counts.is_empty());
    assert!(instant_store(&storage).get_all().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recategorising_moves_counts(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    let health = category("health")?;
    let work = category("work")?;
    let target = controller
        .tasks()
        .iter()
        .find(|task| task.category() == &work)
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("seed has work tasks"))?;

    controller
        .update_task(&target, UpdateTaskRequest::new().with_category("health"))
        .await?;

    let counts = controller.category_counts();
    assert_eq!(counts.get(&work), Some(&1));
    assert_eq!(counts.get(&health), Some(&2));
    Ok(())
}
