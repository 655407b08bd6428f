//! Token-gated document listing.
//!
//! # Responsibility
//! - Hold the per-user document map in process memory.
//! - Gate listing behind bearer-token verification.
//!
//! # Invariants
//! - Documents are never persisted; process exit discards them.
//! - A valid token for a user without documents yields an empty list.

use crate::auth::{TokenService, UserId};
use crate::model::document::Document;
use log::warn;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for document access; both map to the 401 outcome at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    MissingToken,
    InvalidToken,
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken => write!(f, "No token provided"),
            Self::InvalidToken => write!(f, "Invalid token"),
        }
    }
}

impl Error for DocumentError {}

/// In-memory, token-gated document listing.
pub struct DocumentService {
    tokens: TokenService,
    documents: HashMap<UserId, Vec<Document>>,
}

impl DocumentService {
    pub fn new(tokens: TokenService) -> Self {
        Self {
            tokens,
            documents: HashMap::new(),
        }
    }

    /// Registers a document for `user_id`.
    pub fn add_document(&mut self, user_id: UserId, document: Document) {
        self.documents.entry(user_id).or_default().push(document);
    }

    /// Lists the calling user's documents.
    ///
    /// # Contract
    /// - `authorization` is the raw `Authorization` header value, if any.
    /// - No header at all is `MissingToken`; a header without a usable
    ///   bearer token, or with an invalid/expired one, is `InvalidToken`.
    pub fn list(&self, authorization: Option<&str>) -> Result<Vec<Document>, DocumentError> {
        let header = authorization.ok_or(DocumentError::MissingToken)?;
        let token = header
            .split_whitespace()
            .nth(1)
            .ok_or(DocumentError::InvalidToken)?;

        let user_id = self.tokens.verify(token).map_err(|_| {
            warn!("event=documents_list module=documents status=rejected");
            DocumentError::InvalidToken
        })?;

        Ok(self.documents.get(&user_id).cloned().unwrap_or_default())
    }
}
