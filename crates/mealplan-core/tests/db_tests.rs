use mealplan_core::{
    db::DEFAULT_NAMESPACE,
    persistence::{ACTIVE_PLAN_KEY, PLANS_KEY},
    Database, KeyValueStore, PersistenceBridge, PlannerError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path(), DEFAULT_NAMESPACE)
        .expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.namespace(), DEFAULT_NAMESPACE);
    assert_eq!(db.get(PLANS_KEY).expect("Failed to read plans"), None);
    assert_eq!(db.get(ACTIVE_PLAN_KEY).expect("Failed to read id"), None);
}

#[test]
fn test_values_survive_reopen() {
    let (temp_file, mut db) = create_test_db();
    db.set(PLANS_KEY, "[]").expect("Failed to write plans");
    db.set(ACTIVE_PLAN_KEY, "plan-1").expect("Failed to write id");
    drop(db);

    let db = Database::new(temp_file.path(), DEFAULT_NAMESPACE).expect("Failed to reopen");
    assert_eq!(db.get(PLANS_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(db.get(ACTIVE_PLAN_KEY).unwrap().as_deref(), Some("plan-1"));
}

#[test]
fn test_bridge_over_database() {
    let (temp_file, db) = create_test_db();
    let mut bridge = PersistenceBridge::new(Box::new(db));
    bridge.persist(&[], None);
    assert_eq!(bridge.load(), None);
    drop(bridge);

    let mut db = Database::new(temp_file.path(), DEFAULT_NAMESPACE).unwrap();
    db.set(PLANS_KEY, r#"[{"id":"plan-1","name":"Week","isActive":true}]"#)
        .unwrap();
    let bridge = PersistenceBridge::new(Box::new(db));

    let loaded = bridge.load().expect("state should load");
    assert_eq!(loaded.plans.len(), 1);
    assert_eq!(loaded.plans[0].name, "Week");
    assert_eq!(loaded.active_plan_id, None);
}

#[test]
fn test_open_invalid_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("db.sqlite");

    match Database::new(&path, DEFAULT_NAMESPACE) {
        Err(PlannerError::Database { .. }) => {}
        Err(other) => panic!("Expected a database error, got {other:?}"),
        Ok(_) => panic!("Opening a database in a missing directory should fail"),
    }
}
