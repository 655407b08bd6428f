use dragonrealm_core::view::diet::{aggregate_totals, format_amount};
use dragonrealm_core::{
    DietError, DietService, MemorySlotStore, NutritionLookup, NutritionRecord, RemoteError,
    RemoteResult, Vitamins,
};
use std::cell::Cell;
use std::rc::Rc;

/// Lookup stub returning a fixed per-100 g record and counting calls.
struct StubLookup {
    record: NutritionRecord,
    calls: Rc<Cell<usize>>,
    fail_with_status: Option<u16>,
}

impl StubLookup {
    fn returning(record: NutritionRecord) -> Self {
        Self {
            record,
            calls: Rc::new(Cell::new(0)),
            fail_with_status: None,
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            record: NutritionRecord::default(),
            calls: Rc::new(Cell::new(0)),
            fail_with_status: Some(status),
        }
    }

    fn call_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl NutritionLookup for StubLookup {
    fn lookup(&self, _query: &str) -> RemoteResult<NutritionRecord> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_with_status {
            Some(status) => Err(RemoteError::Status { status }),
            None => Ok(self.record.clone()),
        }
    }
}

fn banana_per_100g() -> NutritionRecord {
    NutritionRecord {
        name: "banana".to_string(),
        calories: 89.0,
        protein: 1.1,
        carbs: 22.8,
        fat: 0.3,
        fiber: 2.6,
        sugar: 12.2,
        sodium: 1.0,
        potassium: 358.0,
        cholesterol: 0.0,
        vitamins: Vitamins {
            a: 3.0,
            c: 8.7,
            d: 0.0,
            e: 0.1,
        },
    }
}

#[test]
fn scaling_doubles_every_numeric_leaf_and_keeps_the_name() {
    let record = banana_per_100g();
    let doubled = record.scaled(2.0);

    assert_eq!(doubled.name, "banana");
    assert_eq!(doubled.calories, 178.0);
    assert_eq!(doubled.protein, 2.2);
    assert_eq!(doubled.potassium, 716.0);
    assert_eq!(doubled.vitamins.a, 6.0);
    assert_eq!(doubled.vitamins.c, 17.4);
}

#[test]
fn scaling_by_one_is_the_identity() {
    let record = banana_per_100g();
    assert_eq!(record.scaled(1.0), record);
}

#[test]
fn banana_at_200_grams_stores_178_calories() {
    let mut diet = DietService::new(MemorySlotStore::new(), StubLookup::returning(banana_per_100g()));

    let entry = diet.add_entry("banana", 200.0).unwrap().unwrap();

    assert_eq!(entry.quantity_grams, 200.0);
    assert_eq!(entry.nutrition.calories, 178.0);
    assert_eq!(format_amount(Some(entry.nutrition.calories)), "178.00");

    let stored = diet.entries().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nutrition.calories, 178.0);
}

#[test]
fn blank_query_and_non_positive_quantity_are_ignored_without_lookup() {
    let lookup = StubLookup::returning(banana_per_100g());
    let calls = lookup.call_counter();
    let mut diet = DietService::new(MemorySlotStore::new(), lookup);

    assert!(diet.add_entry("  ", 100.0).unwrap().is_none());
    assert!(diet.add_entry("banana", 0.0).unwrap().is_none());
    assert!(diet.add_entry("banana", -50.0).unwrap().is_none());
    assert!(diet.entries().unwrap().is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn failed_lookup_stores_nothing() {
    let mut diet = DietService::new(MemorySlotStore::new(), StubLookup::failing(500));

    let err = diet.add_entry("banana", 100.0).unwrap_err();
    assert!(matches!(
        err,
        DietError::Remote(RemoteError::Status { status: 500 })
    ));
    assert!(diet.entries().unwrap().is_empty());
}

#[test]
fn totals_sum_every_numeric_field_across_entries() {
    let mut diet = DietService::new(MemorySlotStore::new(), StubLookup::returning(banana_per_100g()));

    diet.add_entry("banana", 100.0).unwrap().unwrap();
    diet.add_entry("banana", 200.0).unwrap().unwrap();

    let totals = diet.totals().unwrap();
    assert_eq!(totals.calories, 89.0 + 178.0);
    assert_eq!(totals.potassium, 358.0 + 716.0);
    assert_eq!(totals.vitamins.c, 8.7 + 17.4);
}

#[test]
fn totals_of_empty_list_are_all_zero() {
    let entries = Vec::new();
    let totals = aggregate_totals(&entries);
    assert_eq!(totals, NutritionRecord::default());
    assert_eq!(format_amount(None), "N/A");
}
