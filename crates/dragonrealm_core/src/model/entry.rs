//! Diary, todo and quest entry models.
//!
//! # Invariants
//! - `EntryId` is the creation timestamp in epoch milliseconds and is never
//!   reused within one store.
//! - `timestamp` and `date` are display projections fixed at creation time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Stable identifier for a feature entry.
///
/// Ids are creation timestamps in epoch milliseconds, made unique by
/// [`IdGenerator`] when two creations land on the same millisecond.
pub type EntryId = i64;

/// Display format used for entry creation timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar-date format used for diary partitioning.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Access to the stable id of a stored entry.
pub trait Keyed {
    fn entry_id(&self) -> EntryId;
}

/// Access to the completion flag of a checkable entry.
pub trait Completable {
    fn is_completed(&self) -> bool;
    fn set_completed(&mut self, completed: bool);
}

/// Issues unique, monotonically increasing entry ids.
///
/// # Invariants
/// - Two calls never return the same id, even within one millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: EntryId,
}

impl IdGenerator {
    /// Returns the next id at or after `now_ms`.
    pub fn next(&mut self, now_ms: i64) -> EntryId {
        let id = if now_ms > self.last_issued {
            now_ms
        } else {
            self.last_issued + 1
        };
        self.last_issued = id;
        id
    }
}

/// One dated free-text diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: EntryId,
    pub content: String,
    /// Human-readable creation moment.
    pub timestamp: String,
    /// Calendar day used by the date partition view, `%Y-%m-%d`.
    pub date: String,
}

impl DiaryEntry {
    /// Creates an entry stamped at `at`.
    pub fn new(id: EntryId, content: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            date: at.format(DATE_FORMAT).to_string(),
        }
    }
}

impl Keyed for DiaryEntry {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}

/// One checkable todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: EntryId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: EntryId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

impl Keyed for TodoItem {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}

impl Completable for TodoItem {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// Challenge rating of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Realm discipline a quest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestCategory {
    Combat,
    Exploration,
    Wisdom,
}

/// One quest-log entry: a todo with difficulty and category metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: EntryId,
    pub text: String,
    pub completed: bool,
    pub difficulty: Difficulty,
    pub category: QuestCategory,
    pub timestamp: String,
}

impl Quest {
    pub fn new(
        id: EntryId,
        text: impl Into<String>,
        difficulty: Difficulty,
        category: QuestCategory,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            difficulty,
            category,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl Keyed for Quest {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}

impl Completable for Quest {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
