use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ClearArgs, ExportArgs, ImportArgs, MealCommands, PlanCommands, PrepArgs, RecipeCommands,
    ShoppingArgs,
};

/// Weekly meal planner for the terminal
///
/// Organize meals into plans, one of which is active at a time. Meals and
/// recipes are always added to the active plan, and the shopping list,
/// statistics and preparation summary are derived from it.
#[derive(Parser)]
#[command(version, about, name = "mp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/mealplan/mealplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the meal planner CLI
///
/// Running `mp` without a command shows the active plan's week.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage meal plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage meals of the active plan
    #[command(alias = "m")]
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },
    /// Manage shared recipes of the active plan
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Show the aggregated shopping list
    #[command(alias = "shop")]
    Shopping(ShoppingArgs),
    /// Show statistics of the active plan
    Stats,
    /// Summarize cooking work for the week or a single day
    Prep(PrepArgs),
    /// Export the active plan's meals and recipes to JSON
    Export(ExportArgs),
    /// Replace the active plan's meals and recipes from a JSON export
    Import(ImportArgs),
    /// Delete every plan and the stored data
    Clear(ClearArgs),
    /// Print the JSON Schema of the export format
    Schema,
}
