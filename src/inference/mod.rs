//! Natural-language inference of task attributes from free text.
//!
//! [`infer`] scans a task title for keywords hinting at its priority, due
//! date, and category. It is a pure, total function: it never fails, reads
//! no clock, and matches case-insensitively. [`TaskInput`] wraps it for
//! interactive use, re-running inference only after typing pauses.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use taskflow::inference::infer;
//! use taskflow::task::domain::Priority;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
//! let hints = infer("Urgent meeting tomorrow", today);
//!
//! assert_eq!(hints.priority, Some(Priority::High));
//! assert_eq!(hints.category.as_ref().map(|id| id.as_str()), Some("work"));
//! assert_eq!(hints.due_date, NaiveDate::from_ymd_opt(2026, 10, 19));
//! ```

mod debounce;
mod input;
mod rules;

pub use debounce::Debouncer;
pub use input::TaskInput;

use crate::task::domain::{CategoryId, Priority};
use chrono::{Days, NaiveDate};
use rules::{CATEGORY_RULES, DUE_DATE_RULES, PRIORITY_RULES, contains_any};

/// Attributes inferred from free text. Unset fields had no matching keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeHints {
    /// Inferred priority.
    pub priority: Option<Priority>,
    /// Inferred due date.
    pub due_date: Option<NaiveDate>,
    /// Inferred category.
    pub category: Option<CategoryId>,
}

impl AttributeHints {
    /// Returns `true` when no attribute was inferred.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.priority.is_none() && self.due_date.is_none() && self.category.is_none()
    }
}

/// Infers priority, due date, and category hints from `text`.
///
/// The three attributes are inferred independently. Within each attribute
/// the first matching rule wins, so "today" beats "tomorrow" and "work"
/// beats "shop". Empty or whitespace-only text infers nothing.
#[must_use]
pub fn infer(text: &str, today: NaiveDate) -> AttributeHints {
    if text.trim().is_empty() {
        return AttributeHints::default();
    }
    let lowered = text.to_lowercase();

    let priority = PRIORITY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lowered, keywords))
        .map(|(priority, _)| *priority);

    let due_date = DUE_DATE_RULES
        .iter()
        .find(|(_, keyword)| lowered.contains(keyword))
        .and_then(|(offset, _)| today.checked_add_days(Days::new(*offset)));

    let category = CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lowered, keywords))
        .and_then(|(category, _)| CategoryId::new(*category).ok());

    AttributeHints {
        priority,
        due_date,
        category,
    }
}
