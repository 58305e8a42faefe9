use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use mealplan_core::{KeyValueStore, PlannerBuilder, PlannerError, Result};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, mealplan_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// In-memory store that can be switched to fail every write.
#[derive(Clone, Default)]
pub struct FlakyStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<Mutex<bool>>,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn check(&self) -> Result<()> {
        if *self.failing.lock().unwrap() {
            return Err(PlannerError::Configuration {
                message: "disk full".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
