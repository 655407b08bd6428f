//! Diary use-cases: the Scroll of Memories.
//!
//! # Responsibility
//! - Record and remove dated diary entries.
//! - Wire the date partition view over the stored list.
//!
//! # Invariants
//! - Blank submissions are silently ignored; nothing is persisted.
//! - The entry list stays most-recent-first.

use crate::model::entry::{DiaryEntry, EntryId, IdGenerator};
use crate::store::entry_store::EntryStore;
use crate::store::slot::{SlotStore, DIARY_SLOT};
use crate::store::StoreResult;
use crate::view::diary::{self, DiaryView, SelectOutcome};
use chrono::{Local, NaiveDate};
use std::time::Instant;

/// Diary facade over one entry store and its date partition view.
pub struct DiaryService<S: SlotStore> {
    store: EntryStore<DiaryEntry, S>,
    view: DiaryView,
    ids: IdGenerator,
}

impl<S: SlotStore> DiaryService<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: EntryStore::new(slots, DIARY_SLOT),
            view: DiaryView::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Full entry list, most recent first.
    pub fn entries(&self) -> StoreResult<Vec<DiaryEntry>> {
        self.store.load()
    }

    /// Records a new entry stamped now.
    ///
    /// # Contract
    /// - Blank or whitespace-only content is ignored and yields `Ok(None)`.
    pub fn add_entry(&mut self, content: &str) -> StoreResult<Option<DiaryEntry>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let now = Local::now();
        let id = self.ids.next(now.timestamp_millis());
        let entry = DiaryEntry::new(id, content, now);
        self.store.add(entry.clone())?;
        Ok(Some(entry))
    }

    /// Removes the entry with `id`. Unknown ids are a no-op.
    pub fn remove_entry(&mut self, id: EntryId) -> StoreResult<Vec<DiaryEntry>> {
        self.store.remove(id)
    }

    /// Distinct calendar dates present, newest first.
    pub fn dates(&self) -> StoreResult<Vec<NaiveDate>> {
        Ok(diary::distinct_dates(&self.store.load()?))
    }

    /// Attempts to select `date`; future dates are rejected.
    pub fn select_date(&mut self, date: NaiveDate) -> SelectOutcome {
        self.view.select_date(date, Local::now().date_naive())
    }

    /// Entries for the selected date, defaulting to today.
    pub fn entries_for_selected(&self) -> StoreResult<Vec<DiaryEntry>> {
        let date = self.view.selected_or_today(Local::now().date_naive());
        let entries = self.store.load()?;
        Ok(diary::entries_for_date(&entries, date)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Future-date warning still inside its display window at `now`.
    pub fn active_warning(&self, now: Instant) -> Option<&str> {
        self.view.active_warning(now)
    }

    /// Read access to the partition view state.
    pub fn view(&self) -> &DiaryView {
        &self.view
    }
}
