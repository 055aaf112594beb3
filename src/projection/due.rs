//! Due-date labels shown next to tasks.

use crate::task::domain::Task;
use chrono::{Days, NaiveDate};
use std::fmt;

/// Human-friendly rendering of a due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    /// Due today.
    Today,
    /// Due tomorrow.
    Tomorrow,
    /// Due on another date, rendered as `Oct 18`.
    On(NaiveDate),
}

impl DueLabel {
    /// Labels `due` relative to `today`.
    #[must_use]
    pub fn relative_to(due: NaiveDate, today: NaiveDate) -> Self {
        if due == today {
            Self::Today
        } else if today.checked_add_days(Days::new(1)) == Some(due) {
            Self::Tomorrow
        } else {
            Self::On(due)
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::On(date) => write!(f, "{}", date.format("%b %-d")),
        }
    }
}

/// Due-date badge for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueBadge {
    /// Label to display.
    pub label: DueLabel,
    /// Whether the badge should be highlighted as overdue.
    pub overdue: bool,
}

/// Builds the due-date badge for a task, or `None` when it has no due date.
#[must_use]
pub fn due_badge(task: &Task, today: NaiveDate) -> Option<DueBadge> {
    task.due_date().map(|due| DueBadge {
        label: DueLabel::relative_to(due, today),
        overdue: task.is_overdue_on(today),
    })
}
