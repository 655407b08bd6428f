//! Generic entry store over one feature slot.
//!
//! # Responsibility
//! - Provide the load/save/add/remove/toggle contract shared by every
//!   feature's entry list.
//! - Keep slot JSON details away from service/business orchestration.
//!
//! # Invariants
//! - New entries are prepended; lists stay most-recent-first.
//! - Every mutation re-serializes the full list before returning.
//! - A malformed persisted payload degrades to the empty list instead of
//!   failing the load.

use crate::model::entry::{Completable, EntryId, Keyed};
use crate::store::slot::SlotStore;
use crate::store::{StoreError, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Entry list store bound to one slot key.
pub struct EntryStore<T, S: SlotStore> {
    slots: S,
    slot_key: &'static str,
    _entry: PhantomData<T>,
}

impl<T, S: SlotStore> EntryStore<T, S> {
    /// Binds a store to `slot_key` on the given backend.
    pub fn new(slots: S, slot_key: &'static str) -> Self {
        Self {
            slots,
            slot_key,
            _entry: PhantomData,
        }
    }

    /// Slot key this store owns.
    pub fn slot_key(&self) -> &'static str {
        self.slot_key
    }

    fn not_found(&self, id: EntryId) -> StoreError {
        StoreError::NotFound {
            slot: self.slot_key.to_string(),
            id,
        }
    }
}

impl<T, S> EntryStore<T, S>
where
    T: Serialize + DeserializeOwned,
    S: SlotStore,
{
    /// Loads the full entry list from the slot.
    ///
    /// # Contract
    /// - An absent slot yields an empty list.
    /// - A malformed payload is logged and yields an empty list; it is
    ///   overwritten on the next mutation.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let Some(raw) = self.slots.read(self.slot_key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!(
                    "event=slot_load module=store status=malformed slot={} error={err}",
                    self.slot_key
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes `entries` and overwrites the slot in full.
    pub fn save(&mut self, entries: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(entries).map_err(|err| StoreError::Serialize {
            slot: self.slot_key.to_string(),
            message: err.to_string(),
        })?;
        self.slots.write(self.slot_key, &payload)
    }

    /// Prepends `entry` and persists. Returns the updated list.
    pub fn add(&mut self, entry: T) -> StoreResult<Vec<T>> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        self.save(&entries)?;
        Ok(entries)
    }
}

impl<T, S> EntryStore<T, S>
where
    T: Serialize + DeserializeOwned + Keyed,
    S: SlotStore,
{
    /// Removes the entry with `id` and persists. Returns the updated list.
    ///
    /// Removing an unknown id is a no-op and performs no write.
    pub fn remove(&mut self, id: EntryId) -> StoreResult<Vec<T>> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.entry_id() != id);

        if entries.len() != before {
            self.save(&entries)?;
        }

        Ok(entries)
    }
}

impl<T, S> EntryStore<T, S>
where
    T: Serialize + DeserializeOwned + Keyed + Completable,
    S: SlotStore,
{
    /// Flips the completion flag of the entry with `id` and persists.
    ///
    /// # Errors
    /// - `NotFound` when the slot holds no entry with `id`.
    pub fn toggle(&mut self, id: EntryId) -> StoreResult<Vec<T>> {
        let mut entries = self.load()?;
        let target = entries
            .iter_mut()
            .find(|entry| entry.entry_id() == id)
            .ok_or_else(|| self.not_found(id))?;

        let flipped = !target.is_completed();
        target.set_completed(flipped);
        self.save(&entries)?;
        Ok(entries)
    }
}
