//! Import and export of a plan's meals and recipes.
//!
//! The exchange format is a JSON document carrying the active plan's meals
//! and shared recipes:
//!
//! ```json
//! {
//!   "version": 1,
//!   "meals": [ ... ],
//!   "recipes": [ ... ],
//!   "exportDate": "2024-05-01T18:30:00Z"
//! }
//! ```
//!
//! Imports are all-or-nothing. A document that is not a JSON object, carries
//! a newer `version`, contains a malformed entry or repeats an identifier is
//! rejected as a whole with [`PlannerError::ImportFormat`]. A missing
//! `version` is read as version 1. `meals` and `recipes` are each applied only
//! when present as arrays; anything else under those keys is ignored.
//!
//! File access is asynchronous and goes through `tokio::fs`.

use std::{
    collections::HashSet,
    hash::Hash,
    path::{Path, PathBuf},
};

use jiff::{tz::TimeZone, Timestamp};
use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{IoResultExt, PlannerError, Result},
    models::{Meal, MealPlan, Recipe},
};

/// Version written into export documents.
pub const EXPORT_VERSION: u32 = 1;

/// Document written by an export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Format version; documents without one are read as version 1
    #[serde(default = "default_version")]
    pub version: u32,

    /// Meals of the exported plan
    #[serde(default)]
    pub meals: Vec<Meal>,

    /// Shared recipes of the exported plan
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    /// Time of the export
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub export_date: Timestamp,
}

fn default_version() -> u32 {
    EXPORT_VERSION
}

impl ExportDocument {
    /// Captures a plan's meals and recipes at the given time.
    pub fn from_plan(plan: &MealPlan, export_date: Timestamp) -> Self {
        Self {
            version: EXPORT_VERSION,
            meals: plan.meals.clone(),
            recipes: plan.recipes.clone(),
            export_date,
        }
    }

    /// File name derived from the export date (UTC).
    pub fn file_name(&self) -> String {
        export_file_name(self.export_date)
    }
}

/// Lists that an import replaces. `None` leaves the current list untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportData {
    pub meals: Option<Vec<Meal>>,
    pub recipes: Option<Vec<Recipe>>,
}

impl ImportData {
    /// Whether the import would change nothing.
    pub fn is_empty(&self) -> bool {
        self.meals.is_none() && self.recipes.is_none()
    }
}

/// `meal-planner-data-<YYYY-MM-DD>.json` for the UTC date of `at`.
pub fn export_file_name(at: Timestamp) -> String {
    format!("meal-planner-data-{}.json", at.to_zoned(TimeZone::UTC).date())
}

/// Validates an import document.
///
/// # Errors
///
/// Returns `PlannerError::ImportFormat` when the text is not a JSON object,
/// the version is unsupported, an entry is malformed or identifiers repeat.
pub fn parse_import(text: &str) -> Result<ImportData> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| PlannerError::import_format(format!("not valid JSON: {e}")))?;
    let Value::Object(mut object) = value else {
        return Err(PlannerError::import_format("expected a JSON object"));
    };

    match object.get("version") {
        None | Some(Value::Null) => {}
        Some(version) => {
            let version = version
                .as_u64()
                .ok_or_else(|| PlannerError::import_format("version must be a positive integer"))?;
            if version > u64::from(EXPORT_VERSION) {
                return Err(PlannerError::import_format(format!(
                    "version {version} is newer than the supported version {EXPORT_VERSION}"
                )));
            }
        }
    }

    let meals: Option<Vec<Meal>> = take_array(&mut object, "meals")?;
    let recipes: Option<Vec<Recipe>> = take_array(&mut object, "recipes")?;

    if let Some(meals) = &meals {
        for (index, meal) in meals.iter().enumerate() {
            check_meal(meal)
                .map_err(|e| PlannerError::import_format(format!("meals[{index}]: {e}")))?;
        }
        ensure_unique("meal", meals.iter().map(|m| &m.id))?;
    }
    if let Some(recipes) = &recipes {
        for (index, recipe) in recipes.iter().enumerate() {
            check_recipe(recipe)
                .map_err(|e| PlannerError::import_format(format!("recipes[{index}]: {e}")))?;
        }
        ensure_unique("recipe", recipes.iter().map(|r| &r.id))?;
    }

    Ok(ImportData { meals, recipes })
}

fn take_array<T: DeserializeOwned>(
    object: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<T>>> {
    match object.remove(key) {
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .map_err(|e| PlannerError::import_format(format!("{key}[{index}]: {e}")))
            })
            .collect::<Result<Vec<T>>>()
            .map(Some),
        _ => Ok(None),
    }
}

/// Imported entries must satisfy the same rules as entries entered by hand.
fn check_meal(meal: &Meal) -> std::result::Result<(), String> {
    if meal.id.as_str().trim().is_empty() {
        return Err("id must not be empty".to_string());
    }
    if meal.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    match &meal.recipe {
        Some(recipe) => check_recipe_fields(recipe).map_err(|e| format!("recipe {e}")),
        None => Ok(()),
    }
}

fn check_recipe(recipe: &Recipe) -> std::result::Result<(), String> {
    if recipe.id.as_str().trim().is_empty() {
        return Err("id must not be empty".to_string());
    }
    check_recipe_fields(recipe)
}

fn check_recipe_fields(recipe: &Recipe) -> std::result::Result<(), String> {
    if recipe.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if recipe.servings == Some(0) {
        return Err("servings must be at least 1".to_string());
    }
    Ok(())
}

fn ensure_unique<'a, I, T>(kind: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a T>,
    T: Eq + Hash + std::fmt::Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PlannerError::import_format(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

/// Writes the document as pretty JSON into `dir`, creating the directory if
/// needed, and returns the written path.
pub async fn export_to_dir(document: &ExportDocument, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await.fs_context(dir)?;

    let path = dir.join(document.file_name());
    let json = serde_json::to_string_pretty(document)?;
    tokio::fs::write(&path, json).await.fs_context(&path)?;

    debug!("Exported {} meal(s) to {}", document.meals.len(), path.display());
    Ok(path)
}

/// Reads and validates an import file.
///
/// # Errors
///
/// Returns `PlannerError::FileSystem` if the file cannot be read and
/// `PlannerError::ImportFormat` if its content is rejected.
pub async fn read_import_file(path: &Path) -> Result<ImportData> {
    let text = tokio::fs::read_to_string(path).await.fs_context(path)?;
    parse_import(&text)
}

/// Writes shopping list text to `path`.
pub async fn write_text_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.fs_context(parent)?;
    }
    tokio::fs::write(path, text).await.fs_context(path)
}

/// JSON Schema of [`ExportDocument`].
#[cfg(feature = "schema")]
pub fn export_schema() -> schemars::Schema {
    schemars::schema_for!(ExportDocument)
}
