//! Quest-log use-cases.
//!
//! # Responsibility
//! - Record, toggle and remove quests with difficulty/category metadata.
//! - Expose the completion aggregate and status filters.
//!
//! # Invariants
//! - Blank submissions are silently ignored.
//! - Filtering preserves the stored most-recent-first order.

use crate::model::entry::{Difficulty, EntryId, IdGenerator, Quest, QuestCategory};
use crate::store::entry_store::EntryStore;
use crate::store::slot::{SlotStore, QUESTS_SLOT};
use crate::store::StoreResult;
use crate::view::quest::{self, QuestFilter};
use chrono::Local;

/// Quest-log facade over one entry store.
pub struct QuestService<S: SlotStore> {
    store: EntryStore<Quest, S>,
    ids: IdGenerator,
}

impl<S: SlotStore> QuestService<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: EntryStore::new(slots, QUESTS_SLOT),
            ids: IdGenerator::default(),
        }
    }

    pub fn quests(&self) -> StoreResult<Vec<Quest>> {
        self.store.load()
    }

    /// Adds a quest; blank text is ignored and yields `Ok(None)`.
    pub fn add_quest(
        &mut self,
        text: &str,
        difficulty: Difficulty,
        category: QuestCategory,
    ) -> StoreResult<Option<Quest>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let now = Local::now();
        let id = self.ids.next(now.timestamp_millis());
        let quest = Quest::new(id, text, difficulty, category, now);
        self.store.add(quest.clone())?;
        Ok(Some(quest))
    }

    /// Flips completion of the quest with `id`.
    pub fn toggle_quest(&mut self, id: EntryId) -> StoreResult<Vec<Quest>> {
        self.store.toggle(id)
    }

    /// Removes the quest with `id`. Unknown ids are a no-op.
    pub fn remove_quest(&mut self, id: EntryId) -> StoreResult<Vec<Quest>> {
        self.store.remove(id)
    }

    /// Rounded percentage of completed quests; 0 for an empty log.
    pub fn completion_rate(&self) -> StoreResult<u8> {
        Ok(quest::completion_rate(&self.store.load()?))
    }

    /// Quests matching `mode`, in stored order.
    pub fn filtered(&self, mode: QuestFilter) -> StoreResult<Vec<Quest>> {
        let quests = self.store.load()?;
        Ok(quest::filter(&quests, mode).into_iter().cloned().collect())
    }
}
