use dialkeep_store::Store;

#[test]
fn fresh_database_migrates_to_latest() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    assert_eq!(store.schema_version().expect("schema version"), 1);
}

#[test]
fn migrate_is_idempotent() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("first migrate");
    store.migrate().expect("second migrate");
    assert_eq!(store.schema_version().expect("schema version"), 1);
}

#[test]
fn on_disk_database_reopens_with_schema() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dialkeep_store::paths::db_path_in(dir.path());

    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
    }

    let store = Store::open(&path).expect("reopen");
    assert_eq!(store.schema_version().expect("schema version"), 1);
}
