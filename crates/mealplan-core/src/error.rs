//! Error types for the meal planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Meal not found in the active plan
    #[error("Meal with ID {id} not found")]
    MealNotFound { id: String },
    /// Recipe not found in the active plan
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: String },
    /// Meal and recipe mutations need an active plan
    #[error("No active plan. Create or activate a plan first")]
    NoActivePlan,
    /// The active plan cannot be deleted
    #[error("Cannot delete the active plan '{name}' (ID {id}). Activate another plan first")]
    ActivePlanDeletion { id: String, name: String },
    /// Import document could not be applied
    #[error("Invalid import file: {reason}")]
    ImportFormat { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an import format error.
    pub fn import_format(reason: impl fmt::Display) -> Self {
        Self::ImportFormat {
            reason: reason.to_string(),
        }
    }

    /// True for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlanNotFound { .. } | Self::MealNotFound { .. } | Self::RecipeNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`PlannerError::FileSystem`] for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| PlannerError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(PlannerError::PlanNotFound { id: "p".into() }.is_not_found());
        assert!(PlannerError::MealNotFound { id: "m".into() }.is_not_found());
        assert!(PlannerError::RecipeNotFound { id: "r".into() }.is_not_found());
        assert!(!PlannerError::NoActivePlan.is_not_found());
    }

    #[test]
    fn test_active_plan_deletion_message() {
        let err = PlannerError::ActivePlanDeletion {
            id: "plan-1".into(),
            name: "Weekdays".into(),
        };
        assert!(err.to_string().contains("Cannot delete the active plan 'Weekdays'"));
    }

    #[test]
    fn test_fs_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        match io.fs_context("/tmp/missing.json").unwrap_err() {
            PlannerError::FileSystem { path, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/missing.json"));
            }
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }
}
