//! Builder for creating and configuring Planner instances.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use tokio::task;

use super::Planner;
use crate::{
    db::{Database, DEFAULT_NAMESPACE},
    error::{IoResultExt, PlannerError, Result},
    persistence::{KeyValueStore, PersistenceBridge},
};

/// Where the planner keeps its state.
enum Backend {
    File(Option<PathBuf>),
    InMemory,
    Custom(Box<dyn KeyValueStore>),
}

/// Builder for creating and configuring Planner instances.
pub struct PlannerBuilder {
    backend: Backend,
    namespace: String,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            backend: Backend::File(None),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/mealplan/mealplan.db` or
    /// `~/.local/share/mealplan/mealplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.backend = Backend::File(Some(path.as_ref().to_path_buf()));
        }
        self
    }

    /// Sets the namespace the state is stored under.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Keeps all state in a private in-memory database.
    pub fn in_memory(mut self) -> Self {
        self.backend = Backend::InMemory;
        self
    }

    /// Uses an arbitrary key-value store. The namespace setting is ignored.
    pub fn with_store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.backend = Backend::Custom(store);
        self
    }

    /// Builds the configured planner instance and loads the stored state.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if the default path cannot be
    /// determined.
    /// Returns `PlannerError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `PlannerError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let namespace = self.namespace;
        let store: Box<dyn KeyValueStore> = match self.backend {
            Backend::Custom(store) => store,
            Backend::InMemory => Box::new(Database::open_in_memory(namespace)?),
            Backend::File(path) => {
                let db_path = match path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.fs_context(parent)?;
                }

                let db = task::spawn_blocking(move || Database::new(&db_path, namespace))
                    .await
                    .map_err(|e| PlannerError::Configuration {
                        message: format!("Task join error: {e}"),
                    })??;
                Box::new(db)
            }
        };

        Ok(Planner::new(PersistenceBridge::new(store)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mealplan")
            .place_data_file("mealplan.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlannerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match &self.backend {
            Backend::File(Some(path)) => format!("file({})", path.display()),
            Backend::File(None) => "file(default)".to_string(),
            Backend::InMemory => "memory".to_string(),
            Backend::Custom(_) => "custom".to_string(),
        };
        f.debug_struct("PlannerBuilder")
            .field("backend", &backend)
            .field("namespace", &self.namespace)
            .finish()
    }
}
