//! Typed string identifiers for plans, meals and recipes.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "schema", derive(JsonSchema))]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh identifier.
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4().simple()))
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a [`crate::models::MealPlan`].
    PlanId,
    "plan"
);

string_id!(
    /// Identifier of a [`crate::models::Meal`], unique within its plan.
    MealId,
    "meal"
);

string_id!(
    /// Identifier of a [`crate::models::Recipe`], unique within its plan.
    RecipeId,
    "recipe"
);

impl RecipeId {
    /// Generates an identifier for a recipe that lives only inside one meal.
    pub fn generate_custom() -> Self {
        Self(format!("custom-{}", Uuid::new_v4().simple()))
    }

    /// Whether this identifier was issued for an inline recipe.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with("custom-")
    }
}
