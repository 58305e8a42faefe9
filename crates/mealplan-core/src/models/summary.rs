//! Read-only summaries derived from a plan.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{MealPlan, MealType, PlanCategory, PlanId, Weekday};

/// Statistics over one plan's meals and recipes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanStats {
    pub total_meals: usize,
    pub total_recipes: usize,
    pub favorite_meals: usize,
    /// Mean cook time over the shared recipes, in minutes
    pub average_cook_time: f64,
    /// Meal counts for all seven days, Monday first
    pub meals_by_day: Vec<(Weekday, usize)>,
    /// Meal counts per type, omitting types with no meals
    pub meals_by_type: Vec<(MealType, usize)>,
}

/// What needs preparing for the week or for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreparationSummary {
    /// Day the summary is restricted to, `None` for the whole week
    pub day: Option<Weekday>,
    /// Meals that carry a recipe
    pub meal_count: usize,
    /// Sum of cook times in minutes
    pub total_cook_time: u32,
    /// Sum of servings, counting one when unknown
    pub total_servings: u32,
    /// Distinct ingredients in first-seen order
    pub ingredients: Vec<String>,
}

/// Compact listing entry for a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    pub id: PlanId,
    pub name: String,
    pub description: Option<String>,
    pub category: PlanCategory,
    pub color: String,
    pub is_active: bool,
    pub meal_count: usize,
    pub recipe_count: usize,
    pub created_at: Timestamp,
}

impl From<&MealPlan> for PlanSummary {
    fn from(plan: &MealPlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            category: plan.category,
            color: plan.color.clone(),
            is_active: plan.is_active,
            meal_count: plan.meals.len(),
            recipe_count: plan.recipes.len(),
            created_at: plan.created_at,
        }
    }
}
