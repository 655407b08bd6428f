//! Todo-list use-cases.
//!
//! # Invariants
//! - Blank submissions are silently ignored.
//! - Toggling an unknown id surfaces the store's `NotFound` error.

use crate::model::entry::{EntryId, IdGenerator, TodoItem};
use crate::store::entry_store::EntryStore;
use crate::store::slot::{SlotStore, TODOS_SLOT};
use crate::store::StoreResult;
use chrono::Local;

/// Todo facade over one entry store.
pub struct TodoService<S: SlotStore> {
    store: EntryStore<TodoItem, S>,
    ids: IdGenerator,
}

impl<S: SlotStore> TodoService<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: EntryStore::new(slots, TODOS_SLOT),
            ids: IdGenerator::default(),
        }
    }

    pub fn todos(&self) -> StoreResult<Vec<TodoItem>> {
        self.store.load()
    }

    /// Adds a todo; blank text is ignored and yields `Ok(None)`.
    pub fn add_todo(&mut self, text: &str) -> StoreResult<Option<TodoItem>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let id = self.ids.next(Local::now().timestamp_millis());
        let todo = TodoItem::new(id, text);
        self.store.add(todo.clone())?;
        Ok(Some(todo))
    }

    /// Flips completion of the todo with `id`.
    pub fn toggle_todo(&mut self, id: EntryId) -> StoreResult<Vec<TodoItem>> {
        self.store.toggle(id)
    }

    /// Removes the todo with `id`. Unknown ids are a no-op.
    pub fn remove_todo(&mut self, id: EntryId) -> StoreResult<Vec<TodoItem>> {
        self.store.remove(id)
    }
}
