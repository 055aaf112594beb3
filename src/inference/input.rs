//! Text input with debounced attribute inference.

use super::{AttributeHints, Debouncer, infer};
use crate::config::InputConfig;
use crate::task::domain::TaskDomainError;
use crate::task::services::CreateTaskRequest;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// The task title being typed, with attribute hints inferred from it.
///
/// Every edit restarts the quiet-period timer; inference runs only once the
/// user stops typing. The latest hints are published on a watch channel so a
/// view can preview them.
pub struct TaskInput<C>
where
    C: Clock + Send + Sync + 'static,
{
    text: String,
    clock: Arc<C>,
    quiet_period: Duration,
    debouncer: Debouncer,
    hints: Arc<watch::Sender<AttributeHints>>,
}

impl<C> TaskInput<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates an empty input.
    #[must_use]
    pub fn new(clock: Arc<C>, config: &InputConfig) -> Self {
        let (sender, _) = watch::channel(AttributeHints::default());
        Self {
            text: String::new(),
            clock,
            quiet_period: config.inference_quiet_period(),
            debouncer: Debouncer::new(),
            hints: Arc::new(sender),
        }
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the most recently published hints.
    #[must_use]
    pub fn hints(&self) -> AttributeHints {
        self.hints.borrow().clone()
    }

    /// Subscribes to hint updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AttributeHints> {
        self.hints.subscribe()
    }

    /// Replaces the text and reschedules inference.
    ///
    /// Blank text cancels any pending inference and keeps the last hints.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.trim().is_empty() {
            self.debouncer.cancel();
            return;
        }
        let snapshot = self.text.clone();
        let clock = Arc::clone(&self.clock);
        let hints = Arc::clone(&self.hints);
        self.debouncer.schedule(self.quiet_period, async move {
            let inferred = infer(&snapshot, clock.utc().date_naive());
            hints.send_replace(inferred);
        });
    }

    /// Returns whether an inference is waiting for typing to pause.
    #[must_use]
    pub fn is_inference_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Turns the current text into a create request and clears the input.
    ///
    /// Attributes are inferred from the final text, so a still-pending
    /// inference cannot be lost.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the text is blank; the
    /// input is left untouched in that case.
    pub fn submit(&mut self) -> Result<CreateTaskRequest, TaskDomainError> {
        if self.text.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        self.debouncer.cancel();
        let text = std::mem::take(&mut self.text);
        let inferred = infer(&text, self.clock.utc().date_naive());
        let request = CreateTaskRequest::new(text.trim()).with_hints(&inferred);
        self.hints.send_replace(AttributeHints::default());
        Ok(request)
    }
}
