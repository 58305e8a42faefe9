//! Recipe model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecipeId;

/// A recipe, either shared through a plan's recipe list or embedded in a
/// single meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier within the owning plan
    pub id: RecipeId,

    /// Display name
    pub name: String,

    /// Cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,

    /// Number of portions the recipe yields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// Ingredients as entered, in display order
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Free-text preparation instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Recipe {
    /// Whether the recipe was created inline for one meal.
    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }
}
