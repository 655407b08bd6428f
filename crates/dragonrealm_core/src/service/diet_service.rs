//! Diet-tracker use-cases: the Dragon's Feast.
//!
//! # Responsibility
//! - Resolve food queries through the nutrition lookup boundary, scale the
//!   result to the consumed quantity and persist the entry.
//! - Expose running nutrient totals over the stored list.
//!
//! # Invariants
//! - Blank queries and non-positive quantities are silently ignored.
//! - Nothing is persisted when the lookup fails.
//! - Stored entries carry amounts already scaled to the consumed quantity.

use crate::model::entry::{EntryId, IdGenerator};
use crate::model::nutrition::{DietEntry, NutritionRecord};
use crate::remote::{NutritionLookup, RemoteError};
use crate::store::entry_store::EntryStore;
use crate::store::slot::{SlotStore, DIET_SLOT};
use crate::store::StoreError;
use crate::view::diet;
use chrono::Local;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for diet-tracker use-cases.
#[derive(Debug)]
pub enum DietError {
    Store(StoreError),
    Remote(RemoteError),
}

impl Display for DietError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DietError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Remote(err) => Some(err),
        }
    }
}

impl From<StoreError> for DietError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RemoteError> for DietError {
    fn from(value: RemoteError) -> Self {
        Self::Remote(value)
    }
}

/// Diet facade over one entry store and the nutrition lookup boundary.
pub struct DietService<S: SlotStore, N: NutritionLookup> {
    store: EntryStore<DietEntry, S>,
    lookup: N,
    ids: IdGenerator,
}

impl<S: SlotStore, N: NutritionLookup> DietService<S, N> {
    pub fn new(slots: S, lookup: N) -> Self {
        Self {
            store: EntryStore::new(slots, DIET_SLOT),
            lookup,
            ids: IdGenerator::default(),
        }
    }

    pub fn entries(&self) -> Result<Vec<DietEntry>, DietError> {
        self.store.load().map_err(Into::into)
    }

    /// Looks up `query`, scales to `quantity_grams` and persists the entry.
    ///
    /// # Contract
    /// - A blank query or a non-positive/non-finite quantity is ignored and
    ///   yields `Ok(None)`.
    /// - Lookup failures propagate as `Remote` errors with nothing stored.
    pub fn add_entry(
        &mut self,
        query: &str,
        quantity_grams: f64,
    ) -> Result<Option<DietEntry>, DietError> {
        let query = query.trim();
        if query.is_empty() || !quantity_grams.is_finite() || quantity_grams <= 0.0 {
            return Ok(None);
        }

        let per_reference = self.lookup.lookup(query)?;
        let scaled = per_reference.scaled(diet::scale_factor(quantity_grams));

        let now = Local::now();
        let id = self.ids.next(now.timestamp_millis());
        let entry = DietEntry::new(id, quantity_grams, scaled, now);
        self.store.add(entry.clone())?;
        Ok(Some(entry))
    }

    /// Removes the entry with `id`. Unknown ids are a no-op.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<Vec<DietEntry>, DietError> {
        self.store.remove(id).map_err(Into::into)
    }

    /// Nutrient totals summed across every stored entry.
    pub fn totals(&self) -> Result<NutritionRecord, DietError> {
        Ok(diet::aggregate_totals(&self.store.load()?))
    }
}
