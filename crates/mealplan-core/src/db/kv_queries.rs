//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    persistence::KeyValueStore,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE namespace = ?1 AND key = ?2";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE namespace = ?1 AND key = ?2";

impl KeyValueStore for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![self.namespace, key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![self.namespace, key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![self.namespace, key])
            .db_context("Failed to delete value")?;
        Ok(())
    }
}
