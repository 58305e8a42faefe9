//! Mealplan CLI Application
//!
//! Command-line interface for planning a week of meals, keeping recipes and
//! deriving a shopping list from them.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use mealplan_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    if let Some(Schema) = command {
        let schema = mealplan_core::transfer::export_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Mealplan started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Meal { command }) => cli.handle_meal_command(command).await,
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(Shopping(args)) => cli.shopping(args).await,
        Some(Stats) => cli.stats().await,
        Some(Prep(args)) => cli.prep(args).await,
        Some(Export(args)) => cli.export(args).await,
        Some(Import(args)) => cli.import(args).await,
        Some(Clear(args)) => cli.clear(args).await,
        Some(Schema) => Ok(()),
        None => cli.week().await,
    }
}
