//! File import and export for the Planner.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::info;

use super::Planner;
use crate::{
    error::Result,
    shopping::to_plain_text,
    transfer::{self, ExportDocument, ImportData},
};

impl Planner {
    /// Captures the active plan's meals and recipes.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn export_document(&self) -> Result<ExportDocument> {
        let plan = self.require_active_plan()?;
        Ok(ExportDocument::from_plan(plan, Timestamp::now()))
    }

    /// Writes the export document into `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` or `PlannerError::FileSystem`.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let document = self.export_document()?;
        transfer::export_to_dir(&document, dir).await
    }

    /// Applies validated import data to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn apply_import(&mut self, data: ImportData) -> Result<()> {
        self.mutate(|store| store.apply_import(data))
    }

    /// Parses import text and applies it to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ImportFormat` if the text is rejected, in which
    /// case nothing changes.
    pub fn import_str(&mut self, text: &str) -> Result<ImportData> {
        let data = transfer::parse_import(text)?;
        self.apply_import(data.clone())?;
        Ok(data)
    }

    /// Reads an import file and applies it to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan`, `PlannerError::FileSystem` or
    /// `PlannerError::ImportFormat`. Nothing changes on error.
    pub async fn import_file(&mut self, path: &Path) -> Result<ImportData> {
        self.require_active_plan()?;
        let data = transfer::read_import_file(path).await?;
        self.apply_import(data.clone())?;
        info!("Imported {}", path.display());
        Ok(data)
    }

    /// Writes the shopping list as plain text and returns the number of
    /// lines written.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be written.
    pub async fn write_shopping_list(&self, path: &Path) -> Result<usize> {
        let list = self.shopping_list();
        transfer::write_text_file(path, &to_plain_text(&list.0)).await?;
        Ok(list.len())
    }
}
