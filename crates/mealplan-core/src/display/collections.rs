//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper owns its items, offers slice-like access and renders an
//! explicit message when empty.

use std::{fmt, ops::Index};

use super::models::MealLine;
use crate::{
    models::{Meal, PlanSummary, Recipe, ShoppingItem},
    queries::DaySchedule,
};

macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

collection_wrapper!(
    /// Plan summaries, rendered one section per plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mealplan_core::display::PlanSummaries;
    ///
    /// let summaries = PlanSummaries(Vec::new());
    /// assert_eq!(summaries.to_string(), "No plans found.\n");
    /// ```
    PlanSummaries,
    PlanSummary
);

collection_wrapper!(
    /// Meals rendered as a compact bullet list.
    Meals,
    Meal
);

collection_wrapper!(
    /// Shared recipes with their details.
    Recipes,
    Recipe
);

collection_wrapper!(
    /// Aggregated shopping list entries.
    ShoppingList,
    ShoppingItem
);

collection_wrapper!(
    /// A Monday-first week of meals.
    WeeklyView,
    DaySchedule
);

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in self {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Meals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No meals found.");
        }
        for meal in self {
            writeln!(f, "- {}", MealLine(meal))?;
        }
        Ok(())
    }
}

impl fmt::Display for Recipes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for recipe in self {
            write!(f, "{recipe}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No ingredients to shop for.");
        }
        for item in self {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WeeklyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, schedule) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## {}", schedule.day)?;
            writeln!(f)?;
            if schedule.meals.is_empty() {
                writeln!(f, "No meals planned.")?;
                continue;
            }
            for meal in &schedule.meals {
                let favorite = if meal.is_favorite { " ★" } else { "" };
                writeln!(f, "- **{}**: {}{favorite}", meal.meal_type, meal.name)?;
            }
        }
        Ok(())
    }
}
