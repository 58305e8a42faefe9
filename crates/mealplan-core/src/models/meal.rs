//! Meal model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{MealId, MealType, Recipe, RecipeId, Weekday};

/// Image shown for meals that carry no image of their own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1651352650142-385087834d9d";

/// A meal scheduled on a weekday slot of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique identifier within the owning plan
    pub id: MealId,

    /// Display name
    pub name: String,

    /// Slot within the day
    #[serde(rename = "type")]
    pub meal_type: MealType,

    /// Weekday the meal repeats on
    pub day: Weekday,

    /// Snapshot of a shared recipe, or an inline custom recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Image shown on the meal card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Marked as a favorite
    #[serde(default)]
    pub is_favorite: bool,
}

impl Meal {
    /// Whether the meal's recipe carries the given identifier.
    pub fn references_recipe(&self, recipe_id: &RecipeId) -> bool {
        self.recipe.as_ref().is_some_and(|r| &r.id == recipe_id)
    }

    /// The meal image, or the placeholder when none is set.
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}
