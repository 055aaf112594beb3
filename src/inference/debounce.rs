//! Cancel-and-reschedule timer for deferred work.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the most recently scheduled job once its delay elapses.
///
/// Scheduling a job cancels the one still waiting, so a burst of calls
/// collapses into a single execution after the burst goes quiet. Each input
/// owns its own debouncer; dropping it cancels any pending job.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `job` to run after `delay`, cancelling any pending job.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        }));
    }

    /// Cancels the pending job, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns whether a scheduled job has not finished yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn only_the_last_job_in_a_burst_runs() {
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        for value in 1..=3 {
            let runs_handle = Arc::clone(&runs);
            let last_handle = Arc::clone(&last);
            debouncer.schedule(Duration::from_millis(500), async move {
                runs_handle.fetch_add(1, Ordering::SeqCst);
                last_handle.store(value, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 3);
        assert!(!debouncer.is_pending());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_pending_job() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();
        let runs_handle = Arc::clone(&runs);
        debouncer.schedule(Duration::from_millis(50), async move {
            runs_handle.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
