//! Meal plan model definition.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Meal, MealId, PlanCategory, PlanId, Recipe, RecipeId, PLAN_COLORS};

/// A named collection of meals and recipes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Unique identifier of the plan
    pub id: PlanId,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display color (hex color or theme key)
    #[serde(default = "default_color")]
    pub color: String,

    /// Meals in insertion order
    #[serde(default)]
    pub meals: Vec<Meal>,

    /// Shared recipes in insertion order
    #[serde(default)]
    pub recipes: Vec<Recipe>,

    /// Timestamp when the plan was created (UTC)
    #[serde(default = "Timestamp::now", deserialize_with = "lenient_timestamp::deserialize")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,

    /// Mirrors whether this plan is the active one
    #[serde(default)]
    pub is_active: bool,

    /// Category the plan is filed under
    #[serde(default)]
    pub category: PlanCategory,
}

fn default_color() -> String {
    PLAN_COLORS[0].to_string()
}

impl MealPlan {
    /// Finds a meal by identifier.
    pub fn meal(&self, id: &MealId) -> Option<&Meal> {
        self.meals.iter().find(|m| &m.id == id)
    }

    /// Finds a shared recipe by identifier.
    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Number of meals marked as favorite.
    pub fn favorite_count(&self) -> usize {
        self.meals.iter().filter(|m| m.is_favorite).count()
    }
}

/// Reads stored creation timestamps without ever rejecting them.
///
/// Accepts RFC 3339 strings and epoch milliseconds. Anything else is replaced
/// with the time of loading.
mod lenient_timestamp {
    use jiff::Timestamp;
    use log::warn;
    use serde::{de::IgnoredAny, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
        Other(IgnoredAny),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse::<Timestamp>().ok(),
            Raw::Millis(ms) => Timestamp::from_millisecond(ms).ok(),
            Raw::Other(_) => None,
        };
        Ok(parsed.unwrap_or_else(|| {
            warn!("Unreadable plan creation time, using the current time");
            Timestamp::now()
        }))
    }
}
