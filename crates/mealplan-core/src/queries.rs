//! Read-only queries over a plan's meals.

use std::ops::RangeInclusive;

use crate::models::{Meal, MealFilter, Weekday};

/// Meals of one weekday, grouped by meal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    /// Meals ordered by meal type, insertion order kept within a type
    pub meals: Vec<Meal>,
}

/// Case-insensitive substring search.
///
/// A meal matches when the query occurs in its name, type, day, recipe name,
/// any recipe ingredient or its notes. A blank query matches nothing.
pub fn search_meals(meals: &[Meal], query: &str) -> Vec<Meal> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    meals
        .iter()
        .filter(|meal| meal_matches(meal, &query))
        .cloned()
        .collect()
}

fn meal_matches(meal: &Meal, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);

    contains(&meal.name)
        || contains(meal.meal_type.as_str())
        || contains(meal.day.as_str())
        || meal.notes.as_deref().is_some_and(contains)
        || meal.recipe.as_ref().is_some_and(|recipe| {
            contains(&recipe.name) || recipe.ingredients.iter().any(|i| contains(i))
        })
}

/// Applies a structured filter.
///
/// Empty type and day selections match every meal. Cook time and servings
/// only exclude a meal when its recipe states a non-zero value outside the
/// range.
pub fn filter_meals(meals: &[Meal], filter: &MealFilter) -> Vec<Meal> {
    meals
        .iter()
        .filter(|meal| filter.types.is_empty() || filter.types.contains(&meal.meal_type))
        .filter(|meal| filter.days.is_empty() || filter.days.contains(&meal.day))
        .filter(|meal| {
            let recipe = meal.recipe.as_ref();
            within(recipe.and_then(|r| r.cook_time), &filter.cook_time)
                && within(recipe.and_then(|r| r.servings), &filter.servings)
        })
        .cloned()
        .collect()
}

fn within(value: Option<u32>, range: &RangeInclusive<u32>) -> bool {
    match value {
        Some(v) if v > 0 => range.contains(&v),
        _ => true,
    }
}

/// Meals marked as favorite, in plan order.
pub fn favorite_meals(meals: &[Meal]) -> Vec<Meal> {
    meals.iter().filter(|m| m.is_favorite).cloned().collect()
}

/// Groups meals into a Monday-first week.
///
/// Every weekday is present, including days without meals.
pub fn weekly_view(meals: &[Meal]) -> Vec<DaySchedule> {
    Weekday::ALL
        .iter()
        .map(|&day| {
            let mut day_meals: Vec<Meal> = meals.iter().filter(|m| m.day == day).cloned().collect();
            // Stable sort keeps insertion order within a meal type
            day_meals.sort_by_key(|m| m.meal_type);
            DaySchedule {
                day,
                meals: day_meals,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealId, MealType, Recipe, RecipeId};

    fn meal(name: &str, meal_type: MealType, day: Weekday) -> Meal {
        Meal {
            id: MealId::generate(),
            name: name.to_string(),
            meal_type,
            day,
            recipe: None,
            notes: None,
            image_url: None,
            is_favorite: false,
        }
    }

    fn with_recipe(mut meal: Meal, cook_time: Option<u32>, servings: Option<u32>) -> Meal {
        meal.recipe = Some(Recipe {
            id: RecipeId::generate(),
            name: format!("{} recipe", meal.name),
            cook_time,
            servings,
            ingredients: vec!["Basil".to_string(), "tomato".to_string()],
            instructions: None,
        });
        meal
    }

    fn names(meals: &[Meal]) -> Vec<&str> {
        meals.iter().map(|m| m.name.as_str()).collect()
    }

    fn sample() -> Vec<Meal> {
        let mut notes = meal("Porridge", MealType::Breakfast, Weekday::Monday);
        notes.notes = Some("Soak oats overnight".to_string());
        vec![
            notes,
            with_recipe(meal("Caprese", MealType::Lunch, Weekday::Tuesday), Some(10), Some(2)),
            with_recipe(meal("Lasagna", MealType::Dinner, Weekday::Sunday), Some(90), Some(6)),
            meal("Soup", MealType::Supper, Weekday::Monday),
        ]
    }

    #[test]
    fn test_search_matches_each_field() {
        let meals = sample();

        assert_eq!(names(&search_meals(&meals, "PORRIDGE")), vec!["Porridge"]);
        assert_eq!(names(&search_meals(&meals, "supper")), vec!["Soup"]);
        assert_eq!(names(&search_meals(&meals, "tues")), vec!["Caprese"]);
        assert_eq!(names(&search_meals(&meals, "lasagna rec")), vec!["Lasagna"]);
        assert_eq!(names(&search_meals(&meals, "basil")), vec!["Caprese", "Lasagna"]);
        assert_eq!(names(&search_meals(&meals, "oats")), vec!["Porridge"]);
        assert!(search_meals(&meals, "sushi").is_empty());
    }

    #[test]
    fn test_search_blank_query_matches_nothing() {
        assert!(search_meals(&sample(), "").is_empty());
        assert!(search_meals(&sample(), "   ").is_empty());
    }

    #[test]
    fn test_filter_default_excludes_long_recipes_only() {
        let filtered = filter_meals(&sample(), &MealFilter::default());
        assert_eq!(names(&filtered), vec!["Porridge", "Caprese", "Soup"]);
    }

    #[test]
    fn test_filter_by_type_and_day() {
        let filter = MealFilter {
            types: vec![MealType::Breakfast, MealType::Supper],
            days: vec![Weekday::Monday],
            ..Default::default()
        };
        assert_eq!(names(&filter_meals(&sample(), &filter)), vec!["Porridge", "Soup"]);
    }

    #[test]
    fn test_filter_servings_range() {
        let filter = MealFilter {
            cook_time: 0..=120,
            servings: 4..=8,
            ..Default::default()
        };
        assert_eq!(
            names(&filter_meals(&sample(), &filter)),
            vec!["Porridge", "Lasagna", "Soup"]
        );
    }

    #[test]
    fn test_favorite_meals() {
        let mut meals = sample();
        meals[2].is_favorite = true;
        assert_eq!(names(&favorite_meals(&meals)), vec!["Lasagna"]);
    }

    #[test]
    fn test_weekly_view_orders_by_type() {
        let meals = vec![
            meal("Late soup", MealType::Supper, Weekday::Monday),
            meal("Eggs", MealType::Breakfast, Weekday::Monday),
            meal("Toast", MealType::Breakfast, Weekday::Monday),
            meal("Roast", MealType::Dinner, Weekday::Sunday),
        ];

        let week = weekly_view(&meals);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, Weekday::Monday);
        assert_eq!(names(&week[0].meals), vec!["Eggs", "Toast", "Late soup"]);
        assert!(week[1].meals.is_empty());
        assert_eq!(names(&week[6].meals), vec!["Roast"]);
    }
}
