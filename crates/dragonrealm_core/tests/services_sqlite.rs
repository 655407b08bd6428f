use dragonrealm_core::db::{open_db, open_db_in_memory};
use dragonrealm_core::{DiaryService, SqliteSlotStore, TodoService};

#[test]
fn diary_entries_survive_a_new_service_over_the_same_connection() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut diary = DiaryService::new(SqliteSlotStore::new(&conn));
        diary.add_entry("first flight over the valley").unwrap();
    }

    let diary = DiaryService::new(SqliteSlotStore::new(&conn));
    let entries = diary.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "first flight over the valley");
}

#[test]
fn todos_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realm.db");

    let id = {
        let conn = open_db(&path).unwrap();
        let mut todos = TodoService::new(SqliteSlotStore::new(&conn));
        let todo = todos.add_todo("sharpen claws").unwrap().unwrap();
        todos.toggle_todo(todo.id).unwrap();
        todo.id
    };

    let conn = open_db(&path).unwrap();
    let todos = TodoService::new(SqliteSlotStore::new(&conn));
    let stored = todos.todos().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert!(stored[0].completed);
}

#[test]
fn feature_services_do_not_step_on_each_others_slots() {
    let conn = open_db_in_memory().unwrap();

    let mut diary = DiaryService::new(SqliteSlotStore::new(&conn));
    let mut todos = TodoService::new(SqliteSlotStore::new(&conn));

    diary.add_entry("memory").unwrap();
    todos.add_todo("task").unwrap();

    assert_eq!(diary.entries().unwrap().len(), 1);
    assert_eq!(todos.todos().unwrap().len(), 1);
}
