use dragonrealm_core::store::slot::TODOS_SLOT;
use dragonrealm_core::{
    DiaryEntry, EntryStore, Keyed, MemorySlotStore, SlotStore, StoreError, TodoItem,
};

fn store_with_todos(todos: &[TodoItem]) -> EntryStore<TodoItem, MemorySlotStore> {
    let mut store = EntryStore::new(MemorySlotStore::new(), TODOS_SLOT);
    store.save(todos).unwrap();
    store
}

#[test]
fn add_prepends_and_returns_the_new_head() {
    let mut store = store_with_todos(&[TodoItem::new(1, "older")]);

    let updated = store.add(TodoItem::new(2, "newer")).unwrap();

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0].entry_id(), 2);
    assert_eq!(updated[1].entry_id(), 1);

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, updated);
}

#[test]
fn remove_existing_id_drops_exactly_that_entry() {
    let mut store = store_with_todos(&[
        TodoItem::new(3, "c"),
        TodoItem::new(2, "b"),
        TodoItem::new(1, "a"),
    ]);

    let updated = store.remove(2).unwrap();

    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|todo| todo.entry_id() != 2));
    assert_eq!(store.load().unwrap(), updated);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut store = store_with_todos(&[TodoItem::new(1, "a")]);

    let updated = store.remove(99).unwrap();

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].entry_id(), 1);
}

#[test]
fn toggle_flips_completion_and_persists() {
    let mut store = store_with_todos(&[TodoItem::new(1, "a")]);

    let toggled = store.toggle(1).unwrap();
    assert!(toggled[0].completed);

    let reloaded = store.load().unwrap();
    assert!(reloaded[0].completed);

    let toggled_back = store.toggle(1).unwrap();
    assert!(!toggled_back[0].completed);
}

#[test]
fn toggle_unknown_id_returns_not_found() {
    let mut store = store_with_todos(&[TodoItem::new(1, "a")]);

    let err = store.toggle(42).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 42, .. }));
}

#[test]
fn load_of_never_written_slot_is_empty() {
    let store: EntryStore<TodoItem, _> = EntryStore::new(MemorySlotStore::new(), TODOS_SLOT);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_slot_payload_loads_as_empty() {
    let mut slots = MemorySlotStore::new();
    slots.write(TODOS_SLOT, "{not json").unwrap();

    let store: EntryStore<TodoItem, _> = EntryStore::new(slots, TODOS_SLOT);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_roundtrips_deep_equal() {
    let entries = vec![
        DiaryEntry {
            id: 2,
            content: "trained fire breathing".to_string(),
            timestamp: "2026-08-02 09:15:00".to_string(),
            date: "2026-08-02".to_string(),
        },
        DiaryEntry {
            id: 1,
            content: "hoarded gold".to_string(),
            timestamp: "2026-08-01 21:40:11".to_string(),
            date: "2026-08-01".to_string(),
        },
    ];

    let mut store = EntryStore::new(MemorySlotStore::new(), "diaryEntries");
    store.save(&entries).unwrap();

    assert_eq!(store.load().unwrap(), entries);
}
