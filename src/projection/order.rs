//! Display ordering for task lists.

use crate::task::domain::Task;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Orders two tasks for display.
///
/// Keys, earlier keys dominating: incomplete before completed, higher
/// priority first, dated before undated with earlier dates first, then newer
/// tasks first.
#[must_use]
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    a.is_completed()
        .cmp(&b.is_completed())
        .then_with(|| a.priority().rank().cmp(&b.priority().rank()))
        .then_with(|| compare_due_dates(a.due_date(), b.due_date()))
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

fn compare_due_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts tasks in place for display. The sort is stable.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(compare_for_display);
}
