//! In-memory integration tests for typed input flowing into the controller.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{notifier, seeded_controller, storage};
use mockable::DefaultClock;
use rstest::rstest;
use taskflow::config::InputConfig;
use taskflow::inference::TaskInput;
use taskflow::task::{
    adapters::memory::{InMemoryKeyValueStorage, RecordingNotifier},
    domain::Priority,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn typed_title_becomes_categorised_task(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    let mut input = TaskInput::new(Arc::new(DefaultClock), &InputConfig::instant());
    let mut previews = input.subscribe();

    input.set_text("Buy running shoes later");
    tokio::time::timeout(Duration::from_secs(5), previews.changed()).await??;
    assert_eq!(input.hints().priority, Some(Priority::Low));

    let request = input.submit()?;
    let created = controller.create_task(request).await?;

    assert_eq!(created.title().as_str(), "Buy running shoes later");
    assert_eq!(created.category().as_str(), "shopping");
    assert_eq!(created.priority(), Priority::Low);
    assert_eq!(created.due_date(), None);
    assert!(input.hints().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn untagged_title_uses_defaults(
    storage: InMemoryKeyValueStorage,
    notifier: RecordingNotifier,
) -> Result<(), eyre::Report> {
    let mut controller = seeded_controller(&storage, &notifier).await?;
    let mut input = TaskInput::new(Arc::new(DefaultClock), &InputConfig::default());

    input.set_text("Water the plants");
    let created = controller.create_task(input.submit()?).await?;

    assert_eq!(created.category().as_str(), "personal");
    assert_eq!(created.priority(), Priority::Medium);
    Ok(())
}
