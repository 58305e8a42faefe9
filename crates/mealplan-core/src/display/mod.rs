//! Display formatting for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); groups of
//! them are rendered through newtype wrappers in [`collections`], and the
//! outcome of mutations through the wrappers in [`results`]. Everything is
//! markdown, which the CLI either renders or prints as-is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers      │    │    Markdown     │
//! │ (MealPlan, Meal)│───▶│ (Meals, Create- │───▶│     Output      │
//! │                 │    │  Result, ...)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: PlanSummaries, Meals, Recipes, ShoppingList, WeeklyView
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: one-line OperationStatus messages
//! - [`datetime`]: timestamp and duration formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Meals, PlanSummaries, Recipes, ShoppingList, WeeklyView};
pub use datetime::{LocalDateTime, Minutes};
pub use models::MealLine;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::{OperationStatus, StatusKind};
