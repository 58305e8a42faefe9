//! SQLite-backed key-value storage.
//!
//! This module provides the durable store behind the
//! [`PersistenceBridge`](crate::persistence::PersistenceBridge). Values live
//! in a single `kv` table keyed by namespace and key, so several planners
//! can share one database file without seeing each other's state.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "meal-planner";

/// Database connection scoped to one namespace.
pub struct Database {
    connection: Connection,
    namespace: String,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P, namespace: impl Into<String>) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection, namespace.into())
    }

    /// Opens a private in-memory database. Nothing outlives the value.
    pub fn open_in_memory(namespace: impl Into<String>) -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection, namespace.into())
    }

    fn with_connection(connection: Connection, namespace: String) -> Result<Self> {
        let db = Self {
            connection,
            namespace,
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Namespace this connection reads and writes.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
