//! Plan operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::{PlanSummaries, UpdateResult},
    error::{PlannerError, Result},
    models::{MealPlan, PlanId, PlanSummary},
    params::{CreatePlan, UpdatePlan},
};

impl Planner {
    /// Creates a new, empty plan. It becomes active when no plan is active.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the name is empty.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<PlanId> {
        self.mutate(|store| store.create_plan(params))
    }

    /// Applies a metadata patch to a plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan does not exist.
    /// Returns `PlannerError::InvalidInput` if the patch sets an empty name.
    pub fn update_plan(
        &mut self,
        id: &PlanId,
        patch: &UpdatePlan,
    ) -> Result<UpdateResult<MealPlan>> {
        self.mutate(|store| store.update_plan(id, patch))?;

        let mut changes = Vec::new();
        if patch.name.is_some() {
            changes.push("Updated name".to_string());
        }
        if patch.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if patch.color.is_some() {
            changes.push("Updated color".to_string());
        }
        if patch.category.is_some() {
            changes.push("Updated category".to_string());
        }

        let plan = self.plan_or_not_found(id)?;
        Ok(UpdateResult::with_changes(plan.clone(), changes))
    }

    /// Deletes an inactive plan. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ActivePlanDeletion` for the active plan.
    pub fn delete_plan(&mut self, id: &PlanId) -> Result<()> {
        self.mutate(|store| store.delete_plan(id))
    }

    /// Makes a plan the active one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan does not exist.
    pub fn set_active_plan(&mut self, id: &PlanId) -> Result<()> {
        self.mutate(|store| store.set_active_plan(id))
    }

    /// Deep-copies a plan under a new identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan does not exist.
    pub fn duplicate_plan(&mut self, id: &PlanId) -> Result<PlanId> {
        self.mutate(|store| store.duplicate_plan(id))
    }

    /// Looks up a plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan does not exist.
    pub fn plan_or_not_found(&self, id: &PlanId) -> Result<&MealPlan> {
        self.store
            .plan(id)
            .ok_or_else(|| PlannerError::PlanNotFound { id: id.to_string() })
    }

    /// Summaries of all plans for listing.
    pub fn plan_summaries(&self) -> PlanSummaries {
        PlanSummaries(self.plans().iter().map(PlanSummary::from).collect())
    }

    /// Removes every plan from memory and storage.
    pub fn clear_all(&mut self) {
        info!("Clearing {} plan(s)", self.plans().len());
        self.store.reset();
        self.persistence.clear();
    }
}
