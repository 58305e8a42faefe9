//! Meal operations on the active plan.

use log::debug;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::{Meal, MealId, MealPlan, Recipe, RecipeId},
    params::{MealFields, MealRecipe, RecipeFields},
};

impl PlanStore {
    /// Adds a meal to the active plan and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    /// Returns `PlannerError::InvalidInput` if the fields fail validation.
    /// Returns `PlannerError::RecipeNotFound` if a shared recipe is missing.
    pub fn add_meal(&mut self, fields: MealFields) -> Result<MealId> {
        let plan = self.active_plan_mut()?;
        let fields = fields.validate()?;
        let recipe = resolve_recipe(plan, fields.recipe.clone())?;

        let id = loop {
            let id = MealId::generate();
            if plan.meal(&id).is_none() {
                break id;
            }
        };

        debug!("Adding meal {id} ({}) to plan {}", fields.name, plan.id);
        plan.meals.push(build_meal(id.clone(), fields, recipe));
        Ok(id)
    }

    /// Replaces a meal of the active plan with a new field set, keeping its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    /// Returns `PlannerError::MealNotFound` if the meal does not exist.
    /// Returns `PlannerError::InvalidInput` if the fields fail validation.
    pub fn edit_meal(&mut self, id: &MealId, fields: MealFields) -> Result<()> {
        let plan = self.active_plan_mut()?;
        let index = plan
            .meals
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| PlannerError::MealNotFound { id: id.to_string() })?;

        let fields = fields.validate()?;
        let recipe = match fields.recipe.clone() {
            // Editing keeps an existing inline recipe's identifier
            MealRecipe::Custom(custom) => {
                let custom = custom.validate()?;
                let recipe_id = plan.meals[index]
                    .recipe
                    .as_ref()
                    .filter(|r| r.is_custom())
                    .map(|r| r.id.clone())
                    .unwrap_or_else(RecipeId::generate_custom);
                Some(recipe_from_fields(recipe_id, custom))
            }
            other => resolve_recipe(plan, other)?,
        };

        plan.meals[index] = build_meal(id.clone(), fields, recipe);
        debug!("Edited meal {id}");
        Ok(())
    }

    /// Removes a meal from the active plan. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn delete_meal(&mut self, id: &MealId) -> Result<()> {
        let plan = self.active_plan_mut()?;
        plan.meals.retain(|m| &m.id != id);
        Ok(())
    }

    /// Flips the favorite flag of a meal. Unknown identifiers are ignored.
    ///
    /// Returns the new flag value, or `None` if the meal does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn toggle_favorite(&mut self, id: &MealId) -> Result<Option<bool>> {
        let plan = self.active_plan_mut()?;
        Ok(plan.meals.iter_mut().find(|m| &m.id == id).map(|meal| {
            meal.is_favorite = !meal.is_favorite;
            meal.is_favorite
        }))
    }
}

/// Turns a recipe source into the snapshot stored on the meal.
fn resolve_recipe(plan: &MealPlan, source: MealRecipe) -> Result<Option<Recipe>> {
    match source {
        MealRecipe::None => Ok(None),
        MealRecipe::Shared(recipe_id) => plan
            .recipe(&recipe_id)
            .cloned()
            .map(Some)
            .ok_or_else(|| PlannerError::RecipeNotFound {
                id: recipe_id.to_string(),
            }),
        MealRecipe::Custom(fields) => {
            let fields = fields.validate()?;
            Ok(Some(recipe_from_fields(RecipeId::generate_custom(), fields)))
        }
    }
}

pub(super) fn recipe_from_fields(id: RecipeId, fields: RecipeFields) -> Recipe {
    Recipe {
        id,
        name: fields.name,
        cook_time: fields.cook_time,
        servings: fields.servings,
        ingredients: fields.ingredients,
        instructions: fields.instructions,
    }
}

fn build_meal(id: MealId, fields: MealFields, recipe: Option<Recipe>) -> Meal {
    Meal {
        id,
        name: fields.name,
        meal_type: fields.meal_type,
        day: fields.day,
        recipe,
        notes: fields.notes,
        image_url: fields.image_url,
        is_favorite: fields.is_favorite,
    }
}
