//! In-memory plan store.
//!
//! [`PlanStore`] owns the collection of [`MealPlan`]s and the identifier of
//! the active plan. Every mutation of plans, meals and recipes goes through
//! it, which keeps the collection invariants in one place:
//!
//! 1. Identifiers are unique within the plan collection, and meal and recipe
//!    identifiers are unique within their plan.
//! 2. Whenever the collection is non-empty, exactly one plan is active, its
//!    identifier is the tracked active identifier, and it is the only plan
//!    with `is_active` set.
//! 3. No meal keeps a recipe whose shared copy was deleted.
//! 4. Meals and recipes are only mutated within the active plan.
//!
//! The store is purely in-memory and synchronous. Persisting it is the job
//! of [`crate::persistence::PersistenceBridge`]; the [`crate::Planner`]
//! facade couples the two.
//!
//! ## Submodules
//!
//! - [`plan_ops`]: plan creation, patching, deletion, activation, duplication
//! - [`meal_ops`]: meal CRUD and favorites within the active plan
//! - [`recipe_ops`]: recipe CRUD within the active plan, including the
//!   detach-on-delete cascade

pub mod meal_ops;
pub mod plan_ops;
pub mod recipe_ops;


use log::debug;

use crate::{
    error::{PlannerError, Result},
    models::{MealPlan, PlanId},
    transfer::ImportData,
};

/// Owner of the plan collection and of the active plan identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanStore {
    plans: Vec<MealPlan>,
    active_plan_id: Option<PlanId>,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously persisted state.
    ///
    /// If `active_plan_id` is missing or names no plan in `plans`, the first
    /// plan becomes active. The `is_active` flags are recomputed from the
    /// chosen identifier, so stale flags in stored data are repaired.
    pub fn from_parts(plans: Vec<MealPlan>, active_plan_id: Option<PlanId>) -> Self {
        let active_plan_id = active_plan_id
            .filter(|id| plans.iter().any(|p| &p.id == id))
            .or_else(|| plans.first().map(|p| p.id.clone()));

        let mut store = Self {
            plans,
            active_plan_id,
        };
        store.sync_active_flags();
        store
    }

    /// All plans in creation order.
    pub fn plans(&self) -> &[MealPlan] {
        &self.plans
    }

    /// Identifier of the active plan, if any.
    pub fn active_plan_id(&self) -> Option<&PlanId> {
        self.active_plan_id.as_ref()
    }

    /// The active plan, if any.
    pub fn active_plan(&self) -> Option<&MealPlan> {
        let id = self.active_plan_id.as_ref()?;
        self.plan(id)
    }

    /// Finds a plan by identifier.
    pub fn plan(&self, id: &PlanId) -> Option<&MealPlan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    /// Whether the store holds no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Mutable access to the active plan for meal and recipe operations.
    pub(crate) fn active_plan_mut(&mut self) -> Result<&mut MealPlan> {
        let id = self.active_plan_id.as_ref().ok_or(PlannerError::NoActivePlan)?;
        self.plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(PlannerError::NoActivePlan)
    }

    /// Replaces the active plan's meals and recipes with imported lists.
    ///
    /// Lists absent from `data` are kept.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active; nothing is
    /// changed in that case.
    pub fn apply_import(&mut self, data: ImportData) -> Result<()> {
        let plan = self.active_plan_mut()?;
        if let Some(meals) = data.meals {
            debug!("Importing {} meal(s) into plan {}", meals.len(), plan.id);
            plan.meals = meals;
        }
        if let Some(recipes) = data.recipes {
            debug!("Importing {} recipe(s) into plan {}", recipes.len(), plan.id);
            plan.recipes = recipes;
        }
        Ok(())
    }

    /// Replaces the whole collection. Used by bulk clears.
    pub(crate) fn reset(&mut self) {
        self.plans.clear();
        self.active_plan_id = None;
    }

    /// Makes every plan's `is_active` flag agree with the active identifier.
    fn sync_active_flags(&mut self) {
        for plan in &mut self.plans {
            plan.is_active = self.active_plan_id.as_ref() == Some(&plan.id);
        }
    }
}
