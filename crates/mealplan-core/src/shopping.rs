//! Shopping list aggregation.
//!
//! The shopping list is derived on demand from a plan's meals and never
//! stored. Ingredients are grouped by their normalized key (trimmed and
//! lowercased), so "Rice" and " rice" end up on one line.
//!
//! # Examples
//!
//! ```rust
//! use mealplan_core::shopping::{aggregate_ingredients, to_plain_text};
//!
//! let items = aggregate_ingredients(&[]);
//! assert!(items.is_empty());
//! assert_eq!(to_plain_text(&items), "");
//! ```

use std::{cmp::Ordering, collections::HashMap};

use crate::models::{Meal, ShoppingItem};

/// Default file name for a written shopping list.
pub const SHOPPING_LIST_FILE_NAME: &str = "shopping-list.txt";

/// Grouping key of an ingredient.
pub fn normalized_key(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Aggregates the ingredients of every meal that has a recipe.
///
/// Each entry keeps the text of the first occurrence, counts every
/// occurrence (a meal listing an ingredient twice counts twice) and records
/// the meal name for each one. Entries are sorted by name, case-insensitively.
pub fn aggregate_ingredients(meals: &[Meal]) -> Vec<ShoppingItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut items: Vec<ShoppingItem> = Vec::new();

    let occurrences = meals.iter().filter_map(|meal| {
        meal.recipe
            .as_ref()
            .map(|recipe| recipe.ingredients.iter().map(move |i| (meal, i)))
    });

    for (meal, ingredient) in occurrences.flatten() {
        match index.get(&normalized_key(ingredient)) {
            Some(&position) => {
                let item = &mut items[position];
                item.count += 1;
                item.sources.push(meal.name.clone());
            }
            None => {
                index.insert(normalized_key(ingredient), items.len());
                items.push(ShoppingItem {
                    name: ingredient.clone(),
                    count: 1,
                    sources: vec![meal.name.clone()],
                });
            }
        }
    }

    items.sort_by(|a, b| compare_names(&a.name, &b.name));
    items
}

/// Alphabetical order that ignores case, placing lowercase first on ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        // Uppercase ASCII sorts before lowercase, so reverse the raw order
        .then_with(|| b.cmp(a))
}

/// Renders the list as plain text, one ingredient per line.
///
/// Ingredients needed more than once are prefixed with `(<count>x) `.
pub fn to_plain_text(items: &[ShoppingItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.count > 1 {
                format!("({}x) {}", item.count, item.name)
            } else {
                item.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
