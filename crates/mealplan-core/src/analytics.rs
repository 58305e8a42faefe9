//! Plan statistics and preparation summaries.

use crate::models::{MealPlan, MealType, PlanStats, PreparationSummary, Weekday};

/// Computes the statistics shown on the analytics view.
///
/// The average cook time is taken over the plan's shared recipes, counting a
/// missing cook time as zero.
pub fn plan_stats(plan: &MealPlan) -> PlanStats {
    let average_cook_time = if plan.recipes.is_empty() {
        0.0
    } else {
        let total: u64 = plan
            .recipes
            .iter()
            .map(|r| u64::from(r.cook_time.unwrap_or(0)))
            .sum();
        total as f64 / plan.recipes.len() as f64
    };

    let meals_by_day = Weekday::ALL
        .iter()
        .map(|&day| (day, plan.meals.iter().filter(|m| m.day == day).count()))
        .collect();

    let meals_by_type = MealType::ALL
        .iter()
        .map(|&meal_type| {
            let count = plan.meals.iter().filter(|m| m.meal_type == meal_type).count();
            (meal_type, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect();

    PlanStats {
        total_meals: plan.meals.len(),
        total_recipes: plan.recipes.len(),
        favorite_meals: plan.favorite_count(),
        average_cook_time,
        meals_by_day,
        meals_by_type,
    }
}

/// Summarizes what needs cooking, for the whole week or a single day.
///
/// Only meals with a recipe are considered. Unknown cook times count as zero
/// and unknown servings as one. Totals saturate at `u32::MAX`.
pub fn preparation_summary(plan: &MealPlan, day: Option<Weekday>) -> PreparationSummary {
    let meals: Vec<_> = plan
        .meals
        .iter()
        .filter(|m| day.map_or(true, |d| m.day == d))
        .filter_map(|m| m.recipe.as_ref())
        .collect();

    let mut ingredients: Vec<String> = Vec::new();
    for ingredient in meals.iter().flat_map(|r| &r.ingredients) {
        if !ingredients.contains(ingredient) {
            ingredients.push(ingredient.clone());
        }
    }

    PreparationSummary {
        day,
        meal_count: meals.len(),
        total_cook_time: meals
            .iter()
            .map(|r| r.cook_time.unwrap_or(0))
            .fold(0, u32::saturating_add),
        total_servings: meals
            .iter()
            .map(|r| r.servings.unwrap_or(1))
            .fold(0, u32::saturating_add),
        ingredients,
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Meal, MealId, PlanCategory, PlanId, Recipe, RecipeId};

    fn recipe(cook_time: Option<u32>, servings: Option<u32>, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::generate(),
            name: "Recipe".to_string(),
            cook_time,
            servings,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: None,
        }
    }

    fn meal(day: Weekday, meal_type: MealType, recipe: Option<Recipe>) -> Meal {
        Meal {
            id: MealId::generate(),
            name: format!("{} {}", day.as_str(), meal_type.label()),
            meal_type,
            day,
            recipe,
            notes: None,
            image_url: None,
            is_favorite: false,
        }
    }

    fn plan(meals: Vec<Meal>, recipes: Vec<Recipe>) -> MealPlan {
        MealPlan {
            id: PlanId::generate(),
            name: "Stats".to_string(),
            description: None,
            color: "#3ecfcf".to_string(),
            meals,
            recipes,
            created_at: Timestamp::now(),
            is_active: true,
            category: PlanCategory::Personal,
        }
    }

    #[test]
    fn test_plan_stats_empty_plan() {
        let stats = plan_stats(&plan(Vec::new(), Vec::new()));

        assert_eq!(stats.total_meals, 0);
        assert_eq!(stats.average_cook_time, 0.0);
        assert_eq!(stats.meals_by_day.len(), 7);
        assert!(stats.meals_by_day.iter().all(|&(_, n)| n == 0));
        assert!(stats.meals_by_type.is_empty());
    }

    #[test]
    fn test_plan_stats_counts() {
        let mut favorite = meal(Weekday::Monday, MealType::Dinner, None);
        favorite.is_favorite = true;
        let meals = vec![
            favorite,
            meal(Weekday::Monday, MealType::Breakfast, None),
            meal(Weekday::Friday, MealType::Dinner, None),
        ];
        let recipes = vec![
            recipe(Some(30), None, &[]),
            recipe(None, None, &[]),
            recipe(Some(15), None, &[]),
        ];

        let stats = plan_stats(&plan(meals, recipes));
        assert_eq!(stats.total_meals, 3);
        assert_eq!(stats.total_recipes, 3);
        assert_eq!(stats.favorite_meals, 1);
        assert_eq!(stats.average_cook_time, 15.0);
        assert_eq!(stats.meals_by_day[0], (Weekday::Monday, 2));
        assert_eq!(stats.meals_by_day[4], (Weekday::Friday, 1));
        assert_eq!(
            stats.meals_by_type,
            vec![(MealType::Breakfast, 1), (MealType::Dinner, 2)]
        );
    }

    #[test]
    fn test_preparation_summary_week() {
        let meals = vec![
            meal(
                Weekday::Monday,
                MealType::Lunch,
                Some(recipe(Some(20), Some(2), &["rice", "beans"])),
            ),
            meal(Weekday::Monday, MealType::Dinner, None),
            meal(
                Weekday::Tuesday,
                MealType::Dinner,
                Some(recipe(None, None, &["rice", "Rice", "onion"])),
            ),
        ];
        let summary = preparation_summary(&plan(meals, Vec::new()), None);

        assert_eq!(summary.day, None);
        assert_eq!(summary.meal_count, 2);
        assert_eq!(summary.total_cook_time, 20);
        assert_eq!(summary.total_servings, 3);
        // Exact-text deduplication
        assert_eq!(summary.ingredients, vec!["rice", "beans", "Rice", "onion"]);
    }

    #[test]
    fn test_preparation_summary_single_day() {
        let meals = vec![
            meal(Weekday::Monday, MealType::Lunch, Some(recipe(Some(20), Some(2), &["rice"]))),
            meal(Weekday::Sunday, MealType::Dinner, Some(recipe(Some(60), Some(4), &["lamb"]))),
        ];
        let summary = preparation_summary(&plan(meals, Vec::new()), Some(Weekday::Sunday));

        assert_eq!(summary.meal_count, 1);
        assert_eq!(summary.total_cook_time, 60);
        assert_eq!(summary.total_servings, 4);
        assert_eq!(summary.ingredients, vec!["lamb"]);
    }

    #[test]
    fn test_preparation_summary_saturates() {
        let large = Some(u32::MAX - 1);
        let meals = vec![
            meal(Weekday::Friday, MealType::Lunch, Some(recipe(large, large, &[]))),
            meal(Weekday::Friday, MealType::Dinner, Some(recipe(large, large, &[]))),
        ];
        let summary = preparation_summary(&plan(meals, Vec::new()), None);

        assert_eq!(summary.meal_count, 2);
        assert_eq!(summary.total_cook_time, u32::MAX);
        assert_eq!(summary.total_servings, u32::MAX);
        assert!(!summary.to_string().is_empty());
    }
}
