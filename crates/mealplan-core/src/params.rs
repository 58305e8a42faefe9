//! Parameter structures for meal planner operations
//!
//! This module contains the input structures accepted by the [`crate::Planner`]
//! and [`crate::store::PlanStore`] mutation methods. They carry no identifiers
//! or timestamps: those are generated by the store.
//!
//! Interface layers (the CLI, or any other view) build these structures from
//! their own argument types and hand them over, keeping framework derives out
//! of the core:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Plan Store    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every structure enumerates exactly the fields that may be set. Partial
//! plan updates go through [`UpdatePlan`], where `None` means "leave as is".

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{MealType, PlanCategory, RecipeId, Weekday, PLAN_COLORS},
};

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Name of the plan (required)
    pub name: String,
    /// Optional description of the plan
    pub description: Option<String>,
    /// Display color; defaults to the first palette entry
    pub color: Option<String>,
    /// Plan category
    #[serde(default)]
    pub category: PlanCategory,
}

/// Typed partial update of plan metadata.
///
/// Meals and recipes are not patchable here; they change only through the
/// meal and recipe operations of the active plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePlan {
    /// New name
    pub name: Option<String>,
    /// New description; an empty string clears it
    pub description: Option<String>,
    /// New display color
    pub color: Option<String>,
    /// New category
    pub category: Option<PlanCategory>,
}

impl UpdatePlan {
    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.category.is_none()
    }
}

/// Full field set of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecipeFields {
    /// Name of the recipe (required)
    pub name: String,
    /// Cooking time in minutes
    pub cook_time: Option<u32>,
    /// Number of portions, at least one
    pub servings: Option<u32>,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: Option<String>,
}

impl RecipeFields {
    /// Validate and normalize the fields.
    ///
    /// Trims the name and every ingredient, drops blank ingredients and turns
    /// blank instructions into `None`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the name is empty
    /// * `PlannerError::InvalidInput` - When servings is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mealplan_core::params::RecipeFields;
    ///
    /// let fields = RecipeFields {
    ///     name: " Pancakes ".to_string(),
    ///     ingredients: vec!["flour ".to_string(), "".to_string(), "eggs".to_string()],
    ///     ..Default::default()
    /// }
    /// .validate()?;
    /// assert_eq!(fields.name, "Pancakes");
    /// assert_eq!(fields.ingredients, vec!["flour", "eggs"]);
    /// # Result::<(), mealplan_core::PlannerError>::Ok(())
    /// ```
    pub fn validate(self) -> Result<Self> {
        let name = require_text("name", &self.name)?;
        if self.servings == Some(0) {
            return Err(PlannerError::invalid_input("servings").with_reason("must be at least 1"));
        }

        Ok(Self {
            name,
            cook_time: self.cook_time,
            servings: self.servings,
            ingredients: self
                .ingredients
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(String::from)
                .collect(),
            instructions: non_blank(self.instructions),
        })
    }
}

/// Where a meal's recipe comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MealRecipe {
    /// The meal has no recipe
    #[default]
    None,
    /// A recipe from the active plan's recipe list
    Shared(RecipeId),
    /// A recipe written for this meal only
    Custom(RecipeFields),
}

/// Full field set of a meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MealFields {
    /// Name of the meal (required)
    pub name: String,
    /// Slot within the day
    pub meal_type: MealType,
    /// Weekday the meal repeats on
    pub day: Weekday,
    /// Recipe attached to the meal
    #[serde(default)]
    pub recipe: MealRecipe,
    /// Free-text notes
    pub notes: Option<String>,
    /// Image shown on the meal card
    pub image_url: Option<String>,
    /// Marked as a favorite
    #[serde(default)]
    pub is_favorite: bool,
}

impl MealFields {
    /// Fields for a plain meal without recipe, notes or image.
    pub fn new(name: impl Into<String>, meal_type: MealType, day: Weekday) -> Self {
        Self {
            name: name.into(),
            meal_type,
            day,
            recipe: MealRecipe::None,
            notes: None,
            image_url: None,
            is_favorite: false,
        }
    }

    /// Attach a recipe source.
    pub fn with_recipe(mut self, recipe: MealRecipe) -> Self {
        self.recipe = recipe;
        self
    }

    /// Validate the name and normalize optional text fields.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the name is empty
    pub fn validate(self) -> Result<Self> {
        let name = require_text("name", &self.name)?;
        Ok(Self {
            name,
            notes: non_blank(self.notes),
            image_url: non_blank(self.image_url),
            ..self
        })
    }
}

impl CreatePlan {
    /// Validate the name and fill in the default color.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the name is empty
    pub fn validate(&self) -> Result<Self> {
        Ok(Self {
            name: require_text("name", &self.name)?,
            description: non_blank(self.description.clone()),
            color: Some(
                non_blank(self.color.clone()).unwrap_or_else(|| PLAN_COLORS[0].to_string()),
            ),
            category: self.category,
        })
    }
}

/// Trim a required text field, rejecting empty values.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, mapping blank values to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
