//! Slot storage seam and its backends.
//!
//! # Responsibility
//! - Define the key/value contract every feature persists through.
//! - Provide an in-memory backend for tests and a SQLite backend for
//!   durable storage.
//!
//! # Invariants
//! - `write` replaces the whole slot value; there is no partial update.
//! - Backends never interpret slot payloads.

use crate::store::StoreResult;
use rusqlite::{params, Connection};
use std::collections::HashMap;

/// Slot holding the diary entry list.
pub const DIARY_SLOT: &str = "diaryEntries";
/// Slot holding the todo list.
pub const TODOS_SLOT: &str = "todos";
/// Slot holding the quest log.
pub const QUESTS_SLOT: &str = "quests";
/// Slot holding the diet entry list.
pub const DIET_SLOT: &str = "dietEntries";
/// Slot holding the client-side logged-in flag. Not a security boundary.
pub const LOGIN_FLAG_SLOT: &str = "isLoggedIn";

/// Named persisted locations, each holding one serialized value.
pub trait SlotStore {
    /// Reads a slot, returning `None` when it was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites a slot with `value` in full.
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes a slot. Clearing an absent slot is a no-op.
    fn clear(&mut self, key: &str) -> StoreResult<()>;
}

/// Process-memory slot backend.
///
/// Used by tests and as the ephemeral analogue of browser storage.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> StoreResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// SQLite-backed slot store over a migrated connection.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;

        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("value")?));
        }

        Ok(None)
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;

        Ok(())
    }

    fn clear(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
