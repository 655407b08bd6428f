//! Document listing model.
//!
//! Documents live in process memory only, keyed per user id. There is no
//! durability contract for them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored document reference for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    /// Human-readable upload moment.
    pub upload_date: String,
    /// Display size string, e.g. `"1.2 MB"`.
    pub size: String,
}

impl Document {
    /// Creates a document reference with a fresh id.
    pub fn new(
        name: impl Into<String>,
        upload_date: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            upload_date: upload_date.into(),
            size: size.into(),
        }
    }
}
