//! Command handlers
//!
//! [`Cli`] owns the planner and the renderer for the duration of one
//! command. Each handler calls the planner, wraps the outcome in a core
//! display type and renders it.

use anyhow::{Context, Result};
use log::debug;
use mealplan_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{CreatePlan, MealFields, RecipeFields},
    MealFilter, MealId, MealPlan, PlanId, Planner, RecipeId,
};

use crate::{
    cli::{
        ClearArgs, ExportArgs, ImportArgs, MealCommands, PlanCommands, PrepArgs, RecipeCommands,
        ShoppingArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params = CreatePlan::from(args);
                let id = self
                    .planner
                    .create_plan(&params)
                    .context("Failed to create plan")?;
                let plan = self.planner.plan_or_not_found(&id)?.clone();
                self.renderer.show(&CreateResult::new(plan))
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let plan = match args.id {
                    Some(id) => self.planner.plan_or_not_found(&PlanId::from(id))?,
                    None => self.planner.require_active_plan()?,
                };
                self.renderer.show(plan)
            }
            PlanCommands::Update(args) => {
                let (id, patch) = args.into_parts();
                if patch.is_empty() {
                    return self
                        .renderer
                        .show(&OperationStatus::notice("Nothing to update"));
                }
                let result = self
                    .planner
                    .update_plan(&id, &patch)
                    .context("Failed to update plan")?;
                self.renderer.show(&result)
            }
            PlanCommands::Delete(args) => {
                let id = PlanId::from(args);
                let plan = match self.planner.plan_or_not_found(&id) {
                    Ok(plan) => plan.clone(),
                    Err(e) if e.is_not_found() => {
                        return self.renderer.show(&OperationStatus::notice(format!(
                            "Plan with ID {id} does not exist; nothing deleted"
                        )));
                    }
                    Err(e) => return Err(e.into()),
                };
                self.planner.delete_plan(&id)?;
                self.renderer.show(&DeleteResult::new(plan))
            }
            PlanCommands::Activate(args) => {
                let id = PlanId::from(args);
                self.planner.set_active_plan(&id)?;
                let plan = self.planner.plan_or_not_found(&id)?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Plan '{}' is now active",
                    plan.name
                )))
            }
            PlanCommands::Duplicate(args) => {
                let copy_id = self
                    .planner
                    .duplicate_plan(&PlanId::from(args))
                    .context("Failed to duplicate plan")?;
                let copy = self.planner.plan_or_not_found(&copy_id)?.clone();
                self.renderer.show(&CreateResult::new(copy))
            }
        }
    }

    pub async fn handle_meal_command(mut self, command: MealCommands) -> Result<()> {
        match command {
            MealCommands::Add(args) => {
                let id = self
                    .planner
                    .add_meal(MealFields::from(args))
                    .context("Failed to add meal")?;
                let meal = self.planner.meal(&id)?.clone();
                self.renderer.show(&CreateResult::new(meal))
            }
            MealCommands::Edit(args) => {
                let id = MealId::from(args.id);
                self.planner
                    .edit_meal(&id, MealFields::from(args.meal))
                    .context("Failed to edit meal")?;
                let meal = self.planner.meal(&id)?.clone();
                self.renderer.show(&UpdateResult::new(meal))
            }
            MealCommands::Delete(args) => {
                let id = MealId::from(args);
                let meal = match self.planner.meal(&id) {
                    Ok(meal) => meal.clone(),
                    Err(e) if e.is_not_found() => {
                        return self.renderer.show(&OperationStatus::notice(format!(
                            "Meal with ID {id} does not exist; nothing deleted"
                        )));
                    }
                    Err(e) => return Err(e.into()),
                };
                self.planner.delete_meal(&id)?;
                self.renderer.show(&DeleteResult::new(meal))
            }
            MealCommands::Favorite(args) => {
                let id = MealId::from(args);
                let status = match self.planner.toggle_favorite(&id)? {
                    Some(true) => OperationStatus::success(format!("Marked {id} as favorite")),
                    Some(false) => OperationStatus::success(format!("Removed {id} from favorites")),
                    None => OperationStatus::notice(format!("Meal with ID {id} does not exist")),
                };
                self.renderer.show(&status)
            }
            MealCommands::List(args) => {
                self.planner.require_active_plan()?;
                let meals = if args.favorites {
                    self.planner.favorite_meals()
                } else {
                    self.planner.meals()
                };
                self.renderer.show(&meals)
            }
            MealCommands::Search(args) => {
                let results = self.planner.search_meals(&args.query);
                debug!("Search '{}' matched {} meal(s)", args.query, results.len());
                self.renderer.show(&results)
            }
            MealCommands::Filter(args) => {
                let filter = MealFilter::from(args);
                let results = self.planner.filter_meals(&filter);
                self.renderer.render(&format!(
                    "## Filtered meals ({} active filters)\n\n{results}",
                    filter.active_filter_count()
                ))
            }
        }
    }

    pub async fn handle_recipe_command(mut self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => {
                let id = self
                    .planner
                    .add_recipe(RecipeFields::from(args))
                    .context("Failed to add recipe")?;
                let recipe = self.planner.recipe(&id)?.clone();
                self.renderer.show(&CreateResult::new(recipe))
            }
            RecipeCommands::Edit(args) => {
                let id = RecipeId::from(args.id);
                self.planner
                    .edit_recipe(&id, RecipeFields::from(args.recipe))
                    .context("Failed to edit recipe")?;
                let recipe = self.planner.recipe(&id)?.clone();
                self.renderer.show(&UpdateResult::new(recipe))
            }
            RecipeCommands::Delete(args) => {
                let id = RecipeId::from(args);
                let recipe = match self.planner.recipe(&id) {
                    Ok(recipe) => recipe.clone(),
                    Err(e) if e.is_not_found() => {
                        return self.renderer.show(&OperationStatus::notice(format!(
                            "Recipe with ID {id} does not exist; nothing deleted"
                        )));
                    }
                    Err(e) => return Err(e.into()),
                };
                self.planner.delete_recipe(&id)?;
                self.renderer.show(&DeleteResult::new(recipe))
            }
            RecipeCommands::List => {
                self.planner.require_active_plan()?;
                self.renderer.show(&self.planner.recipes())
            }
            RecipeCommands::Show(args) => {
                let recipe = self.planner.recipe(&RecipeId::from(args))?;
                self.renderer.show(recipe)
            }
        }
    }

    pub async fn shopping(self, args: ShoppingArgs) -> Result<()> {
        let plan = self.planner.require_active_plan()?;
        let list = self.planner.shopping_list();
        self.renderer
            .render(&format!("# Shopping list for {}\n\n{list}", plan.name))?;

        if let Some(path) = args.output {
            let count = self
                .planner
                .write_shopping_list(&path)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            self.renderer.show(&OperationStatus::success(format!(
                "Wrote {count} item(s) to {}",
                path.display()
            )))?;
        }
        Ok(())
    }

    pub async fn stats(self) -> Result<()> {
        let stats = self.planner.plan_stats()?;
        self.renderer.show(&stats)
    }

    pub async fn prep(self, args: PrepArgs) -> Result<()> {
        let summary = self
            .planner
            .preparation_summary(args.day.map(Into::into))?;
        self.renderer.show(&summary)
    }

    pub async fn export(self, args: ExportArgs) -> Result<()> {
        let path = self
            .planner
            .export_to_dir(&args.dir)
            .await
            .context("Failed to export plan")?;
        self.renderer.show(&OperationStatus::success(format!(
            "Exported to {}",
            path.display()
        )))
    }

    pub async fn import(mut self, args: ImportArgs) -> Result<()> {
        let data = self
            .planner
            .import_file(&args.file)
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;

        let status = if data.is_empty() {
            OperationStatus::notice("The file contains no meals or recipes; nothing changed")
        } else {
            let mut parts = Vec::new();
            if let Some(meals) = &data.meals {
                parts.push(format!("{} meal(s)", meals.len()));
            }
            if let Some(recipes) = &data.recipes {
                parts.push(format!("{} recipe(s)", recipes.len()));
            }
            OperationStatus::success(format!("Imported {}", parts.join(" and ")))
        };
        self.renderer.show(&status)
    }

    pub async fn clear(mut self, args: ClearArgs) -> Result<()> {
        if !args.confirm {
            return self.renderer.show(&OperationStatus::failure(
                "Clearing deletes every plan. Re-run with --confirm to proceed",
            ));
        }
        let count = self.planner.plans().len();
        self.planner.clear_all();
        self.renderer.show(&OperationStatus::success(format!(
            "Deleted {count} plan(s)"
        )))
    }

    /// Shows the active plan's week, or a hint when there is no plan yet.
    pub async fn week(self) -> Result<()> {
        let Some(plan) = self.planner.active_plan() else {
            return self.renderer.show(&OperationStatus::notice(
                "No active plan. Create one with `mp plan create <NAME>`",
            ));
        };
        self.renderer
            .render(&week_markdown(plan, &self.planner.weekly_view().to_string()))
    }

    pub async fn list_plans(self) -> Result<()> {
        self.renderer.show(&self.planner.plan_summaries())
    }
}

fn week_markdown(plan: &MealPlan, week: &str) -> String {
    format!(
        "# {} ({})\n\n{week}",
        plan.name,
        plan.category.with_icon()
    )
}
