//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through termimad or print
//! it as-is.

use std::fmt;

use super::datetime::{LocalDateTime, Minutes};
use crate::models::{
    Meal, MealPlan, MealType, PlanCategory, PlanStats, PlanSummary, PreparationSummary, Recipe,
    ShoppingItem, Weekday,
};

const FAVORITE_MARK: &str = "★";

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Category: {}", self.category.with_icon())?;
        writeln!(f, "- Color: {}", self.color)?;
        writeln!(f, "- Active: {}", if self.is_active { "yes" } else { "no" })?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Meals ({})", self.meals.len())?;
        writeln!(f)?;
        if self.meals.is_empty() {
            writeln!(f, "No meals in this plan.")?;
        }
        for meal in &self.meals {
            writeln!(f, "- {}", MealLine(meal))?;
        }

        writeln!(f, "\n## Recipes ({})", self.recipes.len())?;
        writeln!(f)?;
        if self.recipes.is_empty() {
            writeln!(f, "No recipes in this plan.")?;
        }
        for recipe in &self.recipes {
            write!(f, "- **{}** (ID: {})", recipe.name, recipe.id)?;
            if let Some(minutes) = recipe.cook_time {
                write!(f, ", {}", Minutes(minutes))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// One-line meal rendering used inside lists.
pub struct MealLine<'a>(pub &'a Meal);

impl fmt::Display for MealLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meal = self.0;
        write!(f, "**{}** {}: {}", meal.day, meal.meal_type, meal.name)?;
        if meal.is_favorite {
            write!(f, " {FAVORITE_MARK}")?;
        }
        if let Some(minutes) = meal.recipe.as_ref().and_then(|r| r.cook_time) {
            write!(f, " ({})", Minutes(minutes))?;
        }
        write!(f, " `{}`", meal.id)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let favorite = if self.is_favorite {
            format!(" {FAVORITE_MARK}")
        } else {
            String::new()
        };
        writeln!(f, "### {}{favorite}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- When: {} {}", self.day, self.meal_type)?;
        writeln!(f, "- Image: {}", self.image_url_or_placeholder())?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        if let Some(recipe) = &self.recipe {
            let origin = if recipe.is_custom() { "custom" } else { "shared" };
            writeln!(f, "#### Recipe: {} ({origin})", recipe.name)?;
            writeln!(f)?;
            recipe.fmt_details(f)?;
        }

        Ok(())
    }
}

impl Recipe {
    fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(minutes) = self.cook_time {
            writeln!(f, "- Cook time: {}", Minutes(minutes))?;
        }
        if let Some(servings) = self.servings {
            writeln!(f, "- Servings: {servings}")?;
        }
        if !self.ingredients.is_empty() {
            writeln!(f, "- Ingredients: {}", self.ingredients.join(", "))?;
        }
        if let Some(instructions) = &self.instructions {
            writeln!(f)?;
            writeln!(f, "{instructions}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        self.fmt_details(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_active { " (active)" } else { "" };
        writeln!(f, "## {} (ID: {}){marker}", self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Category**: {}", self.category.with_icon())?;
        writeln!(
            f,
            "- **Contents**: {} meal(s), {} recipe(s)",
            self.meal_count, self.recipe_count
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "({}x) ", self.count)?;
        }
        write!(f, "{}", self.name)?;

        // Only the first few meals are named
        let mut sources: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !sources.contains(&source.as_str()) {
                sources.push(source);
            }
        }
        if !sources.is_empty() {
            let shown = sources.iter().take(3).copied().collect::<Vec<_>>().join(", ");
            let more = sources.len().saturating_sub(3);
            if more > 0 {
                write!(f, " *from {shown} and {more} more*")?;
            } else {
                write!(f, " *from {shown}*")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Total meals: {}", self.total_meals)?;
        writeln!(f, "- Total recipes: {}", self.total_recipes)?;
        writeln!(f, "- Favorite meals: {}", self.favorite_meals)?;
        writeln!(
            f,
            "- Average cook time: {}",
            Minutes(self.average_cook_time.round() as u32)
        )?;

        writeln!(f, "\n### Meals by day")?;
        writeln!(f)?;
        for (day, count) in &self.meals_by_day {
            writeln!(f, "- {day}: {count}")?;
        }

        writeln!(f, "\n### Meals by type")?;
        writeln!(f)?;
        if self.meals_by_type.is_empty() {
            writeln!(f, "No meals planned.")?;
        }
        for (meal_type, count) in &self.meals_by_type {
            writeln!(f, "- {meal_type}: {count}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PreparationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => writeln!(f, "## Preparation for {day}")?,
            None => writeln!(f, "## Preparation for the week")?,
        }
        writeln!(f)?;

        if self.meal_count == 0 {
            return writeln!(f, "No meals with recipes to prepare.");
        }

        writeln!(f, "- Meals to cook: {}", self.meal_count)?;
        writeln!(f, "- Total cook time: {}", Minutes(self.total_cook_time))?;
        writeln!(f, "- Total servings: {}", self.total_servings)?;

        writeln!(f, "\n### Ingredients")?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }
        Ok(())
    }
}
