//! Completion aggregation over checkable entries.
//!
//! # Invariants
//! - An empty list has a completion rate of 0, never NaN.
//! - Filtering preserves the stored order.

use crate::model::entry::Completable;

/// Status subset selector for checkable entry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestFilter {
    All,
    Active,
    Completed,
}

/// Percentage of completed entries, rounded to the nearest whole number.
pub fn completion_rate<T: Completable>(items: &[T]) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let completed = items.iter().filter(|item| item.is_completed()).count();
    ((completed as f64 / items.len() as f64) * 100.0).round() as u8
}

/// Returns the subset matching `mode`, preserving original order.
pub fn filter<T: Completable>(items: &[T], mode: QuestFilter) -> Vec<&T> {
    items
        .iter()
        .filter(|item| match mode {
            QuestFilter::All => true,
            QuestFilter::Active => !item.is_completed(),
            QuestFilter::Completed => item.is_completed(),
        })
        .collect()
}
