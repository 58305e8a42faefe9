//! Result wrapper types for displaying operation outcomes.
//!
//! Creation and update results show a confirmation line followed by the full
//! resource; deletions only confirm.

use std::fmt;

use crate::models::{Meal, MealPlan, Recipe};

/// Resource kinds that operation results can report on.
pub trait Resource: fmt::Display {
    /// Lowercase noun used in messages.
    const KIND: &'static str;

    fn resource_id(&self) -> &str;

    fn resource_name(&self) -> &str;
}

impl Resource for MealPlan {
    const KIND: &'static str = "plan";

    fn resource_id(&self) -> &str {
        self.id.as_str()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

impl Resource for Meal {
    const KIND: &'static str = "meal";

    fn resource_id(&self) -> &str {
        self.id.as_str()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

impl Resource for Recipe {
    const KIND: &'static str = "recipe";

    fn resource_id(&self) -> &str {
        self.id.as_str()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

/// Result of a create operation.
///
/// # Examples
///
/// ```rust
/// use mealplan_core::{
///     display::CreateResult,
///     models::{Recipe, RecipeId},
/// };
///
/// let recipe = Recipe {
///     id: RecipeId::from("recipe-1"),
///     name: "Pesto".to_string(),
///     cook_time: Some(10),
///     servings: None,
///     ingredients: vec!["basil".to_string()],
///     instructions: None,
/// };
/// let output = CreateResult::new(recipe).to_string();
/// assert!(output.starts_with("Created recipe with ID: recipe-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.resource_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of an update operation, optionally listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.resource_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of a delete operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.resource_name(),
            self.resource.resource_id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealId, MealType, Weekday};

    fn create_test_meal() -> Meal {
        Meal {
            id: MealId::from("meal-7"),
            name: "Soup".to_string(),
            meal_type: MealType::Supper,
            day: Weekday::Wednesday,
            recipe: None,
            notes: None,
            image_url: None,
            is_favorite: false,
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            create_test_meal(),
            vec!["Moved to Wednesday".to_string()],
        );
        let output = result.to_string();

        assert!(output.starts_with("Updated meal with ID: meal-7\n"));
        assert!(output.contains("Changes made:\n- Moved to Wednesday"));
        assert!(output.contains("### Soup"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(create_test_meal()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::new(create_test_meal()).to_string(),
            "Deleted meal 'Soup' (ID: meal-7)\n"
        );
    }
}
