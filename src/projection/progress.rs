//! Completion progress over a task collection.

use crate::task::domain::Task;

/// Completed and total task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks.
    pub total: usize,
}

/// Milestone reached by the current progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    /// Every task is completed.
    Perfect,
    /// At least half of the tasks are completed.
    GreatProgress,
}

impl Progress {
    /// Counts completed tasks in a collection.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.is_completed()).count(),
            total: tasks.len(),
        }
    }

    /// Completion percentage rounded half up; `0` when there are no tasks.
    #[must_use]
    pub fn percentage(self) -> u8 {
        let completed = self.completed.min(self.total);
        // round(completed / total * 100) == floor((200 * completed + total) / (2 * total))
        let scaled = completed.saturating_mul(200).saturating_add(self.total);
        let percentage = scaled
            .checked_div(self.total.saturating_mul(2))
            .unwrap_or(0);
        u8::try_from(percentage).unwrap_or(100)
    }

    /// Number of tasks still open.
    #[must_use]
    pub const fn remaining(self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Returns the milestone reached, if any.
    #[must_use]
    pub fn achievement(self) -> Option<Achievement> {
        match self.percentage() {
            100 if self.total > 0 => Some(Achievement::Perfect),
            50..=99 => Some(Achievement::GreatProgress),
            _ => None,
        }
    }
}
