//! Date-partitioned projection of the diary.
//!
//! # Responsibility
//! - Group diary entries by calendar date and filter by a selected day.
//! - Guard selection against future dates with a transient warning.
//!
//! # Invariants
//! - A rejected selection leaves the previously selected date unchanged.
//! - The future-date warning is visible for a fixed 3-second window.

use crate::model::entry::{DiaryEntry, DATE_FORMAT};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// How long a future-date warning stays visible.
pub const WARNING_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Returns the distinct calendar dates present, newest first.
///
/// Entries whose `date` field does not parse are skipped.
pub fn distinct_dates(entries: &[DiaryEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .filter_map(|entry| NaiveDate::parse_from_str(&entry.date, DATE_FORMAT).ok())
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates.reverse();
    dates
}

/// Returns the entries whose `date` field matches `date` exactly.
pub fn entries_for_date<'a>(entries: &'a [DiaryEntry], date: NaiveDate) -> Vec<&'a DiaryEntry> {
    let wanted = date.format(DATE_FORMAT).to_string();
    entries
        .iter()
        .filter(|entry| entry.date == wanted)
        .collect()
}

/// Transient warning raised when a future date is selected.
#[derive(Debug, Clone)]
struct FutureDateWarning {
    message: String,
    raised_at: Instant,
}

/// Outcome of a date-selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    RejectedFutureDate,
}

/// Selection state for the diary's date partition.
#[derive(Debug, Default)]
pub struct DiaryView {
    selected: Option<NaiveDate>,
    warning: Option<FutureDateWarning>,
}

impl DiaryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to select `date` for viewing.
    ///
    /// # Contract
    /// - A date strictly after `today` is rejected with no state change and
    ///   raises a transient warning.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> SelectOutcome {
        if date > today {
            self.warning = Some(FutureDateWarning {
                message: "Cannot chronicle days that have not yet dawned".to_string(),
                raised_at: Instant::now(),
            });
            return SelectOutcome::RejectedFutureDate;
        }

        self.selected = Some(date);
        SelectOutcome::Selected
    }

    /// Currently selected date, defaulting to `today` when none is set.
    pub fn selected_or_today(&self, today: NaiveDate) -> NaiveDate {
        self.selected.unwrap_or(today)
    }

    /// Explicitly selected date, if any.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Warning message still inside its display window at `now`.
    ///
    /// Expired warnings are reported as `None`; callers render whatever this
    /// returns and need no timer bookkeeping of their own.
    pub fn active_warning(&self, now: Instant) -> Option<&str> {
        self.warning
            .as_ref()
            .filter(|warning| now.duration_since(warning.raised_at) < WARNING_DISPLAY_WINDOW)
            .map(|warning| warning.message.as_str())
    }

    /// Drops the current warning regardless of its age.
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }
}
