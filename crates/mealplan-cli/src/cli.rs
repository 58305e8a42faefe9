//! Command-line argument definitions using clap
//!
//! Every command has a clap-derived argument structure that converts into
//! the matching core parameter type. Core params stay free of clap derives,
//! so the CLI can change flags, aliases and help text on its own:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Enumerations that clap lists as possible values (`MealTypeArg`, `DayArg`,
//! `CategoryArg`) mirror the core enums and convert with `From`.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use mealplan_core::{
    models::{
        filters::{DEFAULT_COOK_TIME_RANGE, DEFAULT_SERVINGS_RANGE},
        MealFilter, MealType, PlanCategory, Weekday,
    },
    params::{CreatePlan, MealFields, MealRecipe, RecipeFields, UpdatePlan},
    shopping::SHOPPING_LIST_FILE_NAME,
    MealId, PlanId, RecipeId,
};

// ============================================================================
// Plans
// ============================================================================

/// Create a new plan
///
/// The first plan created becomes the active plan.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    #[arg(short, long, help = "Optional description of the plan")]
    pub description: Option<String>,
    #[arg(short, long, help = "Display color such as #10b981")]
    pub color: Option<String>,
    #[arg(long, value_enum, default_value_t = CategoryArg::Personal)]
    pub category: CategoryArg,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            description: val.description,
            color: val.color,
            category: val.category.into(),
        }
    }
}

/// Show a plan with its meals and recipes
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Identifier of the plan to show; defaults to the active plan")]
    pub id: Option<String>,
}

/// Update plan metadata
///
/// Only the given fields change. An empty description clears it.
#[derive(Args)]
pub struct UpdatePlanArgs {
    #[arg(help = "Identifier of the plan to update")]
    pub id: String,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(short, long, help = "New display color")]
    pub color: Option<String>,
    #[arg(long, value_enum, help = "New category")]
    pub category: Option<CategoryArg>,
}

impl UpdatePlanArgs {
    /// Split into the plan identifier and the patch.
    pub fn into_parts(self) -> (PlanId, UpdatePlan) {
        let patch = UpdatePlan {
            name: self.name,
            description: self.description,
            color: self.color,
            category: self.category.map(Into::into),
        };
        (PlanId::from(self.id), patch)
    }
}

/// Arguments naming a single plan
#[derive(Args)]
pub struct PlanIdArgs {
    #[arg(help = "Identifier of the plan")]
    pub id: String,
}

impl From<PlanIdArgs> for PlanId {
    fn from(val: PlanIdArgs) -> Self {
        PlanId::from(val.id)
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan with its meals and recipes
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Update plan metadata
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete an inactive plan
    #[command(aliases = ["d", "rm"])]
    Delete(PlanIdArgs),
    /// Make a plan the active plan
    #[command(alias = "a")]
    Activate(PlanIdArgs),
    /// Copy a plan with all its meals and recipes
    #[command(alias = "dup")]
    Duplicate(PlanIdArgs),
}

// ============================================================================
// Meals
// ============================================================================

/// Recipe options of a meal
///
/// `--recipe` links a shared recipe of the active plan. Any of the other
/// options writes a custom recipe for this meal only; its name defaults to
/// the meal name.
#[derive(Args)]
pub struct MealRecipeArgs {
    #[arg(
        long,
        conflicts_with_all = ["recipe_name", "cook_time", "servings", "ingredients", "instructions"],
        help = "Identifier of a shared recipe to link"
    )]
    pub recipe: Option<String>,
    #[arg(long, help = "Name of a custom recipe")]
    pub recipe_name: Option<String>,
    #[arg(long, help = "Cooking time of the custom recipe in minutes")]
    pub cook_time: Option<u32>,
    #[arg(long, help = "Servings of the custom recipe")]
    pub servings: Option<u32>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Ingredients of the custom recipe as comma-separated list"
    )]
    pub ingredients: Vec<String>,
    #[arg(long, help = "Instructions of the custom recipe")]
    pub instructions: Option<String>,
}

impl MealRecipeArgs {
    fn into_recipe(self, meal_name: &str) -> MealRecipe {
        if let Some(id) = self.recipe {
            return MealRecipe::Shared(RecipeId::from(id));
        }

        let has_custom = self.recipe_name.is_some()
            || self.cook_time.is_some()
            || self.servings.is_some()
            || !self.ingredients.is_empty()
            || self.instructions.is_some();
        if !has_custom {
            return MealRecipe::None;
        }

        MealRecipe::Custom(RecipeFields {
            name: self.recipe_name.unwrap_or_else(|| meal_name.to_string()),
            cook_time: self.cook_time,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
        })
    }
}

/// Add a meal to the active plan
#[derive(Args)]
pub struct MealArgs {
    /// Name of the meal
    pub name: String,
    #[arg(short = 't', long = "type", value_enum, help = "Slot within the day")]
    pub meal_type: MealTypeArg,
    #[arg(short, long, value_enum, help = "Day of the week")]
    pub day: DayArg,
    #[command(flatten)]
    pub recipe: MealRecipeArgs,
    #[arg(short, long, help = "Free-text notes")]
    pub notes: Option<String>,
    #[arg(long, help = "Image shown for the meal")]
    pub image_url: Option<String>,
    #[arg(short, long, help = "Mark the meal as a favorite")]
    pub favorite: bool,
}

impl From<MealArgs> for MealFields {
    fn from(val: MealArgs) -> Self {
        let recipe = val.recipe.into_recipe(&val.name);
        MealFields {
            name: val.name,
            meal_type: val.meal_type.into(),
            day: val.day.into(),
            recipe,
            notes: val.notes,
            image_url: val.image_url,
            is_favorite: val.favorite,
        }
    }
}

/// Replace every field of a meal
///
/// A custom recipe keeps its identifier when the meal is edited.
#[derive(Args)]
pub struct EditMealArgs {
    #[arg(help = "Identifier of the meal to edit")]
    pub id: String,
    #[command(flatten)]
    pub meal: MealArgs,
}

/// Arguments naming a single meal
#[derive(Args)]
pub struct MealIdArgs {
    #[arg(help = "Identifier of the meal")]
    pub id: String,
}

impl From<MealIdArgs> for MealId {
    fn from(val: MealIdArgs) -> Self {
        MealId::from(val.id)
    }
}

/// List meals of the active plan
#[derive(Args)]
pub struct ListMealsArgs {
    #[arg(long, help = "Only show favorite meals")]
    pub favorites: bool,
}

/// Search meals by text
#[derive(Args)]
pub struct SearchMealsArgs {
    /// Text matched against names, types, days, notes, recipes and ingredients
    pub query: String,
}

/// Filter meals by type, day, cook time and servings
///
/// Meals whose recipe does not state a cook time or servings count are not
/// excluded by the corresponding range.
#[derive(Args)]
pub struct FilterMealsArgs {
    #[arg(short = 't', long = "type", value_enum, value_delimiter = ',')]
    pub types: Vec<MealTypeArg>,
    #[arg(short, long = "day", value_enum, value_delimiter = ',')]
    pub days: Vec<DayArg>,
    #[arg(long, default_value_t = *DEFAULT_COOK_TIME_RANGE.start())]
    pub min_cook_time: u32,
    #[arg(long, default_value_t = *DEFAULT_COOK_TIME_RANGE.end())]
    pub max_cook_time: u32,
    #[arg(long, default_value_t = *DEFAULT_SERVINGS_RANGE.start())]
    pub min_servings: u32,
    #[arg(long, default_value_t = *DEFAULT_SERVINGS_RANGE.end())]
    pub max_servings: u32,
}

impl From<FilterMealsArgs> for MealFilter {
    fn from(val: FilterMealsArgs) -> Self {
        MealFilter {
            types: val.types.into_iter().map(Into::into).collect(),
            days: val.days.into_iter().map(Into::into).collect(),
            cook_time: val.min_cook_time..=val.max_cook_time,
            servings: val.min_servings..=val.max_servings,
        }
    }
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// Add a meal to the active plan
    #[command(alias = "a")]
    Add(MealArgs),
    /// Replace every field of a meal
    #[command(alias = "e")]
    Edit(EditMealArgs),
    /// Delete a meal
    #[command(aliases = ["d", "rm"])]
    Delete(MealIdArgs),
    /// Toggle the favorite flag of a meal
    #[command(alias = "fav")]
    Favorite(MealIdArgs),
    /// List meals of the active plan
    #[command(aliases = ["l", "ls"])]
    List(ListMealsArgs),
    /// Search meals by text
    #[command(alias = "s")]
    Search(SearchMealsArgs),
    /// Filter meals by type, day, cook time and servings
    #[command(alias = "f")]
    Filter(FilterMealsArgs),
}

// ============================================================================
// Recipes
// ============================================================================

/// Add a shared recipe to the active plan
#[derive(Args)]
pub struct RecipeArgs {
    /// Name of the recipe
    pub name: String,
    #[arg(long, help = "Cooking time in minutes")]
    pub cook_time: Option<u32>,
    #[arg(long, help = "Number of servings")]
    pub servings: Option<u32>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Ingredients as comma-separated list"
    )]
    pub ingredients: Vec<String>,
    #[arg(long, help = "Preparation instructions")]
    pub instructions: Option<String>,
}

impl From<RecipeArgs> for RecipeFields {
    fn from(val: RecipeArgs) -> Self {
        RecipeFields {
            name: val.name,
            cook_time: val.cook_time,
            servings: val.servings,
            ingredients: val.ingredients,
            instructions: val.instructions,
        }
    }
}

/// Replace every field of a shared recipe
///
/// Meals using the recipe pick up the new fields.
#[derive(Args)]
pub struct EditRecipeArgs {
    #[arg(help = "Identifier of the recipe to edit")]
    pub id: String,
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

/// Arguments naming a single recipe
#[derive(Args)]
pub struct RecipeIdArgs {
    #[arg(help = "Identifier of the recipe")]
    pub id: String,
}

impl From<RecipeIdArgs> for RecipeId {
    fn from(val: RecipeIdArgs) -> Self {
        RecipeId::from(val.id)
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a shared recipe to the active plan
    #[command(alias = "a")]
    Add(RecipeArgs),
    /// Replace every field of a shared recipe
    #[command(alias = "e")]
    Edit(EditRecipeArgs),
    /// Delete a recipe and detach it from every meal
    #[command(aliases = ["d", "rm"])]
    Delete(RecipeIdArgs),
    /// List shared recipes
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a recipe
    #[command(alias = "s")]
    Show(RecipeIdArgs),
}

// ============================================================================
// Derived views and data transfer
// ============================================================================

/// Show the shopping list, optionally writing it to a text file
#[derive(Args)]
pub struct ShoppingArgs {
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = SHOPPING_LIST_FILE_NAME,
        help = "Write the list as plain text to FILE (default: shopping-list.txt)"
    )]
    pub output: Option<PathBuf>,
}

/// Summarize cooking work
#[derive(Args)]
pub struct PrepArgs {
    #[arg(short, long, value_enum, help = "Only summarize this day")]
    pub day: Option<DayArg>,
}

/// Export the active plan
#[derive(Args)]
pub struct ExportArgs {
    #[arg(long, default_value = ".", help = "Directory to write the export file into")]
    pub dir: PathBuf,
}

/// Import meals and recipes into the active plan
///
/// Lists present in the file replace the active plan's lists. The whole file
/// is rejected if any entry is malformed.
#[derive(Args)]
pub struct ImportArgs {
    /// JSON file previously written by `mp export`
    pub file: PathBuf,
}

/// Delete all stored data
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the deletion (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line representation of meal slots
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum MealTypeArg {
    Breakfast,
    Lunch,
    Dinner,
    Supper,
}

impl From<MealTypeArg> for MealType {
    fn from(val: MealTypeArg) -> Self {
        match val {
            MealTypeArg::Breakfast => MealType::Breakfast,
            MealTypeArg::Lunch => MealType::Lunch,
            MealTypeArg::Dinner => MealType::Dinner,
            MealTypeArg::Supper => MealType::Supper,
        }
    }
}

/// Command-line representation of weekdays
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DayArg {
    #[value(alias = "mon")]
    Monday,
    #[value(alias = "tue")]
    Tuesday,
    #[value(alias = "wed")]
    Wednesday,
    #[value(alias = "thu")]
    Thursday,
    #[value(alias = "fri")]
    Friday,
    #[value(alias = "sat")]
    Saturday,
    #[value(alias = "sun")]
    Sunday,
}

impl From<DayArg> for Weekday {
    fn from(val: DayArg) -> Self {
        match val {
            DayArg::Monday => Weekday::Monday,
            DayArg::Tuesday => Weekday::Tuesday,
            DayArg::Wednesday => Weekday::Wednesday,
            DayArg::Thursday => Weekday::Thursday,
            DayArg::Friday => Weekday::Friday,
            DayArg::Saturday => Weekday::Saturday,
            DayArg::Sunday => Weekday::Sunday,
        }
    }
}

/// Command-line representation of plan categories
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CategoryArg {
    Personal,
    Family,
    Diet,
    Fitness,
    Custom,
}

impl From<CategoryArg> for PlanCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Personal => PlanCategory::Personal,
            CategoryArg::Family => PlanCategory::Family,
            CategoryArg::Diet => PlanCategory::Diet,
            CategoryArg::Fitness => PlanCategory::Fitness,
            CategoryArg::Custom => PlanCategory::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_args() -> MealRecipeArgs {
        MealRecipeArgs {
            recipe: None,
            recipe_name: None,
            cook_time: None,
            servings: None,
            ingredients: Vec::new(),
            instructions: None,
        }
    }

    fn meal_args(recipe: MealRecipeArgs) -> MealArgs {
        MealArgs {
            name: "Pizza".to_string(),
            meal_type: MealTypeArg::Dinner,
            day: DayArg::Friday,
            recipe,
            notes: None,
            image_url: None,
            favorite: true,
        }
    }

    #[test]
    fn test_meal_without_recipe() {
        let fields = MealFields::from(meal_args(recipe_args()));
        assert_eq!(fields.recipe, MealRecipe::None);
        assert_eq!(fields.meal_type, MealType::Dinner);
        assert_eq!(fields.day, Weekday::Friday);
        assert!(fields.is_favorite);
    }

    #[test]
    fn test_meal_with_shared_recipe() {
        let fields = MealFields::from(meal_args(MealRecipeArgs {
            recipe: Some("recipe-1".to_string()),
            ..recipe_args()
        }));
        assert_eq!(fields.recipe, MealRecipe::Shared(RecipeId::from("recipe-1")));
    }

    #[test]
    fn test_custom_recipe_defaults_to_meal_name() {
        let fields = MealFields::from(meal_args(MealRecipeArgs {
            ingredients: vec!["cheese".to_string(), "dough".to_string()],
            ..recipe_args()
        }));
        match fields.recipe {
            MealRecipe::Custom(recipe) => {
                assert_eq!(recipe.name, "Pizza");
                assert_eq!(recipe.ingredients, vec!["cheese", "dough"]);
            }
            other => panic!("Expected custom recipe, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_conversion() {
        let filter = MealFilter::from(FilterMealsArgs {
            types: vec![MealTypeArg::Lunch],
            days: vec![DayArg::Monday, DayArg::Sunday],
            min_cook_time: 0,
            max_cook_time: 30,
            min_servings: 1,
            max_servings: 8,
        });
        assert_eq!(filter.types, vec![MealType::Lunch]);
        assert_eq!(filter.days, vec![Weekday::Monday, Weekday::Sunday]);
        assert_eq!(filter.active_filter_count(), 4);
    }

    #[test]
    fn test_update_plan_parts() {
        let (id, patch) = UpdatePlanArgs {
            id: "plan-1".to_string(),
            name: None,
            description: Some(String::new()),
            color: None,
            category: Some(CategoryArg::Diet),
        }
        .into_parts();
        assert_eq!(id, PlanId::from("plan-1"));
        assert_eq!(patch.description.as_deref(), Some(""));
        assert_eq!(patch.category, Some(PlanCategory::Diet));
    }
}
