//! Core library for the mealplan weekly meal planner.
//!
//! This crate holds the domain model (plans, meals, recipes), the in-memory
//! [`store::PlanStore`] that enforces the collection invariants, derived views
//! (shopping list, searches, analytics) and local persistence to SQLite.
//!
//! # Layers
//!
//! - **Domain Models** ([`models`]): serde-friendly data with camelCase
//!   layout
//! - **Plan Store** ([`store`]): synchronous mutations with validation
//! - **Planner** ([`planner`]): the store plus persistence after every
//!   mutation, and async file import/export
//! - **Display** ([`display`]): markdown rendering for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use mealplan_core::{
//!     models::{MealType, Weekday},
//!     params::{CreatePlan, MealFields},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some("mealplan.db"))
//!     .build()
//!     .await?;
//!
//! planner.create_plan(&CreatePlan {
//!     name: "Family week".to_string(),
//!     ..Default::default()
//! })?;
//! planner.add_meal(MealFields::new("Tacos", MealType::Dinner, Weekday::Tuesday))?;
//!
//! println!("{}", planner.weekly_view());
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod persistence;
pub mod planner;
pub mod queries;
pub mod shopping;
pub mod store;
pub mod transfer;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Meals, OperationStatus, PlanSummaries, Recipes, ShoppingList,
    UpdateResult, WeeklyView,
};
pub use error::{PlannerError, Result};
pub use models::{
    Meal, MealFilter, MealId, MealPlan, MealType, PlanCategory, PlanId, PlanStats, PlanSummary,
    PreparationSummary, Recipe, RecipeId, ShoppingItem, Weekday,
};
pub use params::{CreatePlan, MealFields, MealRecipe, RecipeFields, UpdatePlan};
pub use persistence::{KeyValueStore, PersistenceBridge};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
pub use transfer::{ExportDocument, ImportData};
