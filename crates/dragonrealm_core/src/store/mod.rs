//! Slot-backed persistence layer.
//!
//! # Responsibility
//! - Define the slot storage seam and its backends.
//! - Provide the generic entry store used by every feature service.
//!
//! # Invariants
//! - A slot holds exactly one JSON document and is rewritten whole on every
//!   mutation.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::DbError;
use crate::model::entry::EntryId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entry_store;
pub mod slot;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for slot persistence and entry mutation operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// A slot payload could not be serialized before writing.
    Serialize { slot: String, message: String },
    /// A targeted mutation addressed an id the slot does not contain.
    NotFound { slot: String, id: EntryId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { slot, message } => {
                write!(f, "cannot serialize slot `{slot}`: {message}")
            }
            Self::NotFound { slot, id } => write!(f, "entry not found in slot `{slot}`: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { .. } => None,
            Self::NotFound { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
