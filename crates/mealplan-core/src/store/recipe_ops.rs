//! Recipe operations on the active plan.

use log::debug;

use super::{meal_ops::recipe_from_fields, PlanStore};
use crate::{
    error::{PlannerError, Result},
    models::RecipeId,
    params::RecipeFields,
};

impl PlanStore {
    /// Adds a shared recipe to the active plan and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    /// Returns `PlannerError::InvalidInput` if the fields fail validation.
    pub fn add_recipe(&mut self, fields: RecipeFields) -> Result<RecipeId> {
        let plan = self.active_plan_mut()?;
        let fields = fields.validate()?;

        let id = loop {
            let id = RecipeId::generate();
            if plan.recipe(&id).is_none() {
                break id;
            }
        };

        debug!("Adding recipe {id} ({}) to plan {}", fields.name, plan.id);
        plan.recipes.push(recipe_from_fields(id.clone(), fields));
        Ok(id)
    }

    /// Replaces a shared recipe of the active plan, keeping its identifier.
    ///
    /// Meals of the active plan holding a snapshot of this recipe receive
    /// the new version as well.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    /// Returns `PlannerError::RecipeNotFound` if the recipe does not exist.
    /// Returns `PlannerError::InvalidInput` if the fields fail validation.
    pub fn edit_recipe(&mut self, id: &RecipeId, fields: RecipeFields) -> Result<()> {
        let plan = self.active_plan_mut()?;
        let index = plan
            .recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| PlannerError::RecipeNotFound { id: id.to_string() })?;

        let recipe = recipe_from_fields(id.clone(), fields.validate()?);
        for meal in plan.meals.iter_mut().filter(|m| m.references_recipe(id)) {
            meal.recipe = Some(recipe.clone());
        }
        plan.recipes[index] = recipe;
        debug!("Edited recipe {id}");
        Ok(())
    }

    /// Removes a shared recipe and detaches it from every meal of the active
    /// plan that uses it. Unknown identifiers are ignored.
    ///
    /// Both changes happen in this one call; there is no state in which the
    /// recipe is gone but a meal still holds it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn delete_recipe(&mut self, id: &RecipeId) -> Result<()> {
        let plan = self.active_plan_mut()?;
        plan.recipes.retain(|r| &r.id != id);

        let mut detached = 0;
        for meal in plan.meals.iter_mut().filter(|m| m.references_recipe(id)) {
            meal.recipe = None;
            detached += 1;
        }
        debug!("Deleted recipe {id}, detached from {detached} meal(s)");
        Ok(())
    }
}
