use dragonrealm_core::db::open_db_in_memory;
use dragonrealm_core::store::slot::{DIARY_SLOT, LOGIN_FLAG_SLOT};
use dragonrealm_core::{SlotStore, SqliteSlotStore};

#[test]
fn read_of_never_written_slot_is_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSlotStore::new(&conn);

    assert_eq!(store.read(DIARY_SLOT).unwrap(), None);
}

#[test]
fn write_then_read_roundtrips_and_overwrites_whole_value() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteSlotStore::new(&conn);

    store.write(DIARY_SLOT, "[1,2,3]").unwrap();
    assert_eq!(store.read(DIARY_SLOT).unwrap().as_deref(), Some("[1,2,3]"));

    store.write(DIARY_SLOT, "[]").unwrap();
    assert_eq!(store.read(DIARY_SLOT).unwrap().as_deref(), Some("[]"));
}

#[test]
fn slots_are_independent_of_each_other() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteSlotStore::new(&conn);

    store.write(DIARY_SLOT, "[]").unwrap();
    store.write(LOGIN_FLAG_SLOT, "true").unwrap();

    assert_eq!(store.read(DIARY_SLOT).unwrap().as_deref(), Some("[]"));
    assert_eq!(
        store.read(LOGIN_FLAG_SLOT).unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn clear_removes_the_slot_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteSlotStore::new(&conn);

    store.write(LOGIN_FLAG_SLOT, "true").unwrap();
    store.clear(LOGIN_FLAG_SLOT).unwrap();
    store.clear(LOGIN_FLAG_SLOT).unwrap();

    assert_eq!(store.read(LOGIN_FLAG_SLOT).unwrap(), None);
}
