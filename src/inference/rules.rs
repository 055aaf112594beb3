//! Keyword rules for attribute inference.
//!
//! Each table is checked in order and the first matching group wins.

use crate::task::domain::Priority;

/// Priority keywords, checked in order.
pub(super) const PRIORITY_RULES: [(Priority, &[&str]); 2] = [
    (Priority::High, &["urgent", "important", "!"]),
    (Priority::Low, &["low priority", "later"]),
];

/// Relative due-date keywords with their offset in days from today.
pub(super) const DUE_DATE_RULES: [(u64, &str); 3] =
    [(0, "today"), (1, "tomorrow"), (7, "next week")];

/// Category keywords, checked in order.
pub(super) const CATEGORY_RULES: [(&str, &[&str]); 4] = [
    ("work", &["work", "meeting", "project"]),
    ("personal", &["personal", "home"]),
    ("shopping", &["shop", "buy"]),
    ("health", &["health", "exercise"]),
];

/// Returns whether `text` contains any of the keywords.
pub(super) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
