//! Core domain logic for the Dragon's Realm productivity suite.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod remote;
pub mod service;
pub mod store;
pub mod view;

pub use auth::{
    hash_password, AuthError, AuthResult, Claims, CredentialVerifier, FixedUserVerifier,
    TokenCheck, TokenService, UserId,
};
pub use config::{Config, NutritionixCredentials};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::Document;
pub use model::entry::{
    Completable, DiaryEntry, Difficulty, EntryId, IdGenerator, Keyed, Quest, QuestCategory,
    TodoItem,
};
pub use model::nutrition::{DietEntry, NutritionRecord, Vitamins};
pub use remote::{NutritionLookup, NutritionixClient, RemoteError, RemoteResult};
pub use service::diary_service::DiaryService;
pub use service::diet_service::{DietError, DietService};
pub use service::document_service::{DocumentError, DocumentService};
pub use service::quest_service::QuestService;
pub use service::session_service::{LoginOutcome, SessionError, SessionService};
pub use service::todo_service::TodoService;
pub use store::entry_store::EntryStore;
pub use store::slot::{MemorySlotStore, SlotStore, SqliteSlotStore};
pub use store::{StoreError, StoreResult};
pub use view::diary::{DiaryView, SelectOutcome};
pub use view::quest::QuestFilter;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
