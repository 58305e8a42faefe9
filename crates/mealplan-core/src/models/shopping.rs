//! Shopping list entry model.

use serde::{Deserialize, Serialize};

/// One aggregated ingredient of a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Ingredient text as first entered
    pub name: String,

    /// Number of occurrences across all meals
    pub count: u32,

    /// Name of the originating meal for every occurrence
    pub sources: Vec<String>,
}
