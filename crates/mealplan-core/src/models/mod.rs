//! Data models for meal plans, meals and recipes.
//!
//! This module contains the domain models of the meal planner. Display
//! implementations live in [`crate::display::models`] so the data structures
//! stay free of presentation logic.
//!
//! # Serialized Layout
//!
//! All models serialize with camelCase field names, the layout used by the
//! persisted state and by export files:
//!
//! - [`Recipe`]: `id`, `name`, `cookTime`, `servings`, `ingredients`,
//!   `instructions`
//! - [`Meal`]: `id`, `name`, `type`, `day`, `recipe`, `notes`, `imageUrl`,
//!   `isFavorite`
//! - [`MealPlan`]: `id`, `name`, `description`, `color`, `meals`, `recipes`,
//!   `createdAt`, `isActive`, `category`
//!
//! # Examples
//!
//! ```rust
//! use mealplan_core::models::{Meal, MealType, Weekday};
//!
//! let meal: Meal = serde_json::from_str(
//!     r#"{"id":"meal-1","name":"Porridge","type":"breakfast","day":"Monday"}"#,
//! )
//! .unwrap();
//! assert_eq!(meal.meal_type, MealType::Breakfast);
//! assert_eq!(meal.day, Weekday::Monday);
//! assert!(!meal.is_favorite);
//! ```

pub mod filters;
pub mod ids;
pub mod kinds;
pub mod meal;
pub mod plan;
pub mod recipe;
pub mod shopping;
pub mod summary;


pub use filters::MealFilter;
pub use ids::{MealId, PlanId, RecipeId};
pub use kinds::{MealType, PlanCategory, Weekday, PLAN_COLORS};
pub use meal::{Meal, PLACEHOLDER_IMAGE_URL};
pub use plan::MealPlan;
pub use recipe::Recipe;
pub use shopping::ShoppingItem;
pub use summary::{PlanStats, PlanSummary, PreparationSummary};
