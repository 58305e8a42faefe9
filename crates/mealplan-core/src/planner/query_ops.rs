//! Read-only views of the active plan.

use super::Planner;
use crate::{
    analytics,
    display::{Meals, Recipes, ShoppingList, WeeklyView},
    error::{PlannerError, Result},
    models::{Meal, MealFilter, MealId, PlanStats, PreparationSummary, Recipe, RecipeId, Weekday},
    queries, shopping,
};

impl Planner {
    /// All meals of the active plan in insertion order.
    pub fn meals(&self) -> Meals {
        Meals(self.active_meals().to_vec())
    }

    /// Shared recipes of the active plan.
    pub fn recipes(&self) -> Recipes {
        Recipes(
            self.active_plan()
                .map(|plan| plan.recipes.clone())
                .unwrap_or_default(),
        )
    }

    /// Finds a meal of the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` or `PlannerError::MealNotFound`.
    pub fn meal(&self, id: &MealId) -> Result<&Meal> {
        self.require_active_plan()?
            .meal(id)
            .ok_or_else(|| PlannerError::MealNotFound { id: id.to_string() })
    }

    /// Finds a shared recipe of the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` or `PlannerError::RecipeNotFound`.
    pub fn recipe(&self, id: &RecipeId) -> Result<&Recipe> {
        self.require_active_plan()?
            .recipe(id)
            .ok_or_else(|| PlannerError::RecipeNotFound { id: id.to_string() })
    }

    /// Case-insensitive search over the active plan's meals.
    pub fn search_meals(&self, query: &str) -> Meals {
        Meals(queries::search_meals(self.active_meals(), query))
    }

    /// Structured filter over the active plan's meals.
    pub fn filter_meals(&self, filter: &MealFilter) -> Meals {
        Meals(queries::filter_meals(self.active_meals(), filter))
    }

    /// Favorite meals of the active plan.
    pub fn favorite_meals(&self) -> Meals {
        Meals(queries::favorite_meals(self.active_meals()))
    }

    /// The active plan's meals arranged by weekday and meal type.
    pub fn weekly_view(&self) -> WeeklyView {
        WeeklyView(queries::weekly_view(self.active_meals()))
    }

    /// Aggregated ingredients of the active plan.
    pub fn shopping_list(&self) -> ShoppingList {
        ShoppingList(shopping::aggregate_ingredients(self.active_meals()))
    }

    /// Statistics for the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn plan_stats(&self) -> Result<PlanStats> {
        Ok(analytics::plan_stats(self.require_active_plan()?))
    }

    /// Preparation summary for the week or a single day of the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoActivePlan` if no plan is active.
    pub fn preparation_summary(&self, day: Option<Weekday>) -> Result<PreparationSummary> {
        Ok(analytics::preparation_summary(self.require_active_plan()?, day))
    }
}
