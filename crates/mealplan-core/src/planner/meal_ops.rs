//! Meal and recipe operations for the Planner.
//!
//! All of these act on the active plan and persist on success.

use super::Planner;
use crate::{
    error::Result,
    models::{MealId, RecipeId},
    params::{MealFields, RecipeFields},
};

impl Planner {
    /// Adds a meal to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan`, `PlannerError::InvalidInput` or
    /// `PlannerError::RecipeNotFound`.
    pub fn add_meal(&mut self, fields: MealFields) -> Result<MealId> {
        self.mutate(|store| store.add_meal(fields))
    }

    /// Replaces a meal of the active plan, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan`, `PlannerError::MealNotFound`,
    /// `PlannerError::InvalidInput` or `PlannerError::RecipeNotFound`.
    pub fn edit_meal(&mut self, id: &MealId, fields: MealFields) -> Result<()> {
        self.mutate(|store| store.edit_meal(id, fields))
    }

    /// Removes a meal. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn delete_meal(&mut self, id: &MealId) -> Result<()> {
        self.mutate(|store| store.delete_meal(id))
    }

    /// Flips a meal's favorite flag and returns the new value, `None` when
    /// the meal does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn toggle_favorite(&mut self, id: &MealId) -> Result<Option<bool>> {
        self.mutate(|store| store.toggle_favorite(id))
    }

    /// Adds a shared recipe to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` or `PlannerError::InvalidInput`.
    pub fn add_recipe(&mut self, fields: RecipeFields) -> Result<RecipeId> {
        self.mutate(|store| store.add_recipe(fields))
    }

    /// Replaces a shared recipe and refreshes the meals using it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan`, `PlannerError::RecipeNotFound`
    /// or `PlannerError::InvalidInput`.
    pub fn edit_recipe(&mut self, id: &RecipeId, fields: RecipeFields) -> Result<()> {
        self.mutate(|store| store.edit_recipe(id, fields))
    }

    /// Removes a shared recipe and detaches it from every meal using it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn delete_recipe(&mut self, id: &RecipeId) -> Result<()> {
        self.mutate(|store| store.delete_recipe(id))
    }
}
