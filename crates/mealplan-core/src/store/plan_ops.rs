//! Plan operations for the PlanStore.

use jiff::Timestamp;
use log::debug;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::{MealPlan, PlanId},
    params::{non_blank, require_text, CreatePlan, UpdatePlan},
};

/// Suffix appended to the name of a duplicated plan.
pub const COPY_SUFFIX: &str = " (Copy)";

impl PlanStore {
    /// Creates a new, empty plan and returns its identifier.
    ///
    /// The active plan is left unchanged, except when no plan is active yet:
    /// then the new plan becomes active so the collection always has one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the name is empty.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<PlanId> {
        let params = params.validate()?;

        let plan = MealPlan {
            id: self.fresh_plan_id(),
            name: params.name,
            description: params.description,
            color: params.color.unwrap_or_default(),
            meals: Vec::new(),
            recipes: Vec::new(),
            created_at: Timestamp::now(),
            is_active: false,
            category: params.category,
        };
        let id = plan.id.clone();
        debug!("Creating plan {id} ({})", plan.name);
        self.plans.push(plan);

        if self.active_plan().is_none() {
            self.active_plan_id = Some(id.clone());
            self.sync_active_flags();
        }

        Ok(id)
    }

    /// Applies a metadata patch to any plan, active or not.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has the identifier.
    /// Returns `PlannerError::InvalidInput` if the patch sets an empty name.
    pub fn update_plan(&mut self, id: &PlanId, patch: &UpdatePlan) -> Result<()> {
        let name = patch
            .name
            .as_deref()
            .map(|n| require_text("name", n))
            .transpose()?;

        let plan = self
            .plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PlannerError::PlanNotFound { id: id.to_string() })?;

        if let Some(name) = name {
            plan.name = name;
        }
        if let Some(description) = &patch.description {
            plan.description = non_blank(Some(description.clone()));
        }
        if let Some(color) = non_blank(patch.color.clone()) {
            plan.color = color;
        }
        if let Some(category) = patch.category {
            plan.category = category;
        }
        debug!("Updated plan {id}");
        Ok(())
    }

    /// Removes a plan. Removing an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ActivePlanDeletion` if `id` is the active plan;
    /// the collection is left untouched.
    pub fn delete_plan(&mut self, id: &PlanId) -> Result<()> {
        if self.active_plan_id.as_ref() == Some(id) {
            let name = self.plan(id).map(|p| p.name.clone()).unwrap_or_default();
            return Err(PlannerError::ActivePlanDeletion {
                id: id.to_string(),
                name,
            });
        }

        let before = self.plans.len();
        self.plans.retain(|p| &p.id != id);
        if self.plans.len() < before {
            debug!("Deleted plan {id}");
        }
        Ok(())
    }

    /// Makes the given plan the active one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has the identifier.
    pub fn set_active_plan(&mut self, id: &PlanId) -> Result<()> {
        if self.plan(id).is_none() {
            return Err(PlannerError::PlanNotFound { id: id.to_string() });
        }

        self.active_plan_id = Some(id.clone());
        self.sync_active_flags();
        debug!("Activated plan {id}");
        Ok(())
    }

    /// Deep-copies a plan, meals and recipes included, under a new identifier
    /// and creation time. The copy is never active.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has the identifier.
    pub fn duplicate_plan(&mut self, id: &PlanId) -> Result<PlanId> {
        let source = self
            .plan(id)
            .ok_or_else(|| PlannerError::PlanNotFound { id: id.to_string() })?;

        let copy = MealPlan {
            id: self.fresh_plan_id(),
            name: format!("{}{COPY_SUFFIX}", source.name),
            created_at: Timestamp::now(),
            is_active: false,
            ..source.clone()
        };
        let copy_id = copy.id.clone();
        debug!("Duplicated plan {id} as {copy_id}");
        self.plans.push(copy);
        Ok(copy_id)
    }

    fn fresh_plan_id(&self) -> PlanId {
        loop {
            let id = PlanId::generate();
            if self.plan(&id).is_none() {
                return id;
            }
        }
    }
}
