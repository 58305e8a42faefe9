//! High-level planner API for managing meal plans.
//!
//! This module provides the main [`Planner`] interface. The planner owns the
//! in-memory [`PlanStore`] together with the [`PersistenceBridge`] it is
//! mirrored to, and is the single entry point for interface layers.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │    PlanStore    │    │   Persistence   │
//! │ (plan_ops,      │───▶│ (invariants,    │    │     Bridge      │
//! │  meal_ops, ...) │    │  validation)    │    │  (via db/)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             ▲
//!          └──────────── persist after mutation ─────────┘
//! ```
//!
//! Every successful mutation is followed by a write of the whole state.
//! Write failures are logged and do not undo the mutation.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan creation, patching, deletion, activation, duplication
//! - [`meal_ops`]: Meal and recipe operations on the active plan
//! - [`query_ops`]: Searches, filters, weekly view, shopping list, analytics
//! - [`transfer_ops`]: Import and export files
//!
//! # Usage Examples
//!
//! ```rust
//! use mealplan_core::{
//!     models::{MealType, Weekday},
//!     params::{CreatePlan, MealFields, MealRecipe, RecipeFields},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new().in_memory().build().await?;
//!
//! planner.create_plan(&CreatePlan {
//!     name: "This week".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let pizza = RecipeFields {
//!     name: "Pizza".to_string(),
//!     ingredients: vec!["cheese".to_string(), "dough".to_string()],
//!     ..Default::default()
//! };
//! planner.add_meal(
//!     MealFields::new("Pizza", MealType::Dinner, Weekday::Friday)
//!         .with_recipe(MealRecipe::Custom(pizza)),
//! )?;
//!
//! let list = planner.shopping_list();
//! assert_eq!(list.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod meal_ops;
pub mod plan_ops;
pub mod query_ops;
pub mod transfer_ops;


use log::debug;

pub use builder::PlannerBuilder;

use crate::{
    error::{PlannerError, Result},
    models::{Meal, MealPlan, PlanId},
    persistence::PersistenceBridge,
    store::PlanStore,
};

/// Main planner interface for managing meal plans, meals and recipes.
pub struct Planner {
    store: PlanStore,
    persistence: PersistenceBridge,
}

impl Planner {
    /// Creates a planner from whatever state the bridge can load.
    pub(crate) fn new(persistence: PersistenceBridge) -> Self {
        let store = match persistence.load() {
            Some(state) => PlanStore::from_parts(state.plans, state.active_plan_id),
            None => PlanStore::new(),
        };
        debug!(
            "Planner ready with {} plan(s), active: {:?}",
            store.plans().len(),
            store.active_plan_id().map(PlanId::as_str)
        );
        Self { store, persistence }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// All plans in creation order.
    pub fn plans(&self) -> &[MealPlan] {
        self.store.plans()
    }

    /// The active plan, if any.
    pub fn active_plan(&self) -> Option<&MealPlan> {
        self.store.active_plan()
    }

    /// The active plan, or `PlannerError::NoActivePlan`.
    pub fn require_active_plan(&self) -> Result<&MealPlan> {
        self.store.active_plan().ok_or(PlannerError::NoActivePlan)
    }

    /// Meals of the active plan; empty when no plan is active.
    pub fn active_meals(&self) -> &[Meal] {
        self.store
            .active_plan()
            .map(|plan| plan.meals.as_slice())
            .unwrap_or_default()
    }

    /// Mirrors the current state to storage.
    fn persist(&mut self) {
        self.persistence
            .persist(self.store.plans(), self.store.active_plan_id());
    }

    /// Runs a store mutation and persists on success.
    fn mutate<T>(&mut self, op: impl FnOnce(&mut PlanStore) -> Result<T>) -> Result<T> {
        let value = op(&mut self.store)?;
        self.persist();
        Ok(value)
    }
}
