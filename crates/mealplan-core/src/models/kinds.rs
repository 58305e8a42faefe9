//! Closed enumerations used by meals and plans.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of meal slots within a day.
///
/// Variants are declared in the order they appear on the weekly calendar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Supper,
}

impl MealType {
    /// All meal types in calendar order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Supper,
    ];

    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Supper => "supper",
        }
    }

    /// Capitalized label for headings.
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Supper => "Supper",
        }
    }
}

/// Day of the week a meal repeats on. There is no calendar date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Weekday {
    #[serde(alias = "monday")]
    Monday,
    #[serde(alias = "tuesday")]
    Tuesday,
    #[serde(alias = "wednesday")]
    Wednesday,
    #[serde(alias = "thursday")]
    Thursday,
    #[serde(alias = "friday")]
    Friday,
    #[serde(alias = "saturday")]
    Saturday,
    #[serde(alias = "sunday")]
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day name as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Category a plan is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanCategory {
    #[default]
    Personal,
    Family,
    Diet,
    Fitness,
    Custom,
}

impl PlanCategory {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCategory::Personal => "personal",
            PlanCategory::Family => "family",
            PlanCategory::Diet => "diet",
            PlanCategory::Fitness => "fitness",
            PlanCategory::Custom => "custom",
        }
    }

    /// Category with its badge icon.
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanCategory::Personal => "👤 Personal",
            PlanCategory::Family => "👨‍👩‍👧‍👦 Family",
            PlanCategory::Diet => "🥗 Diet",
            PlanCategory::Fitness => "💪 Fitness",
            PlanCategory::Custom => "⚙️ Custom",
        }
    }
}

/// Palette offered for new plans; the first entry is the default.
pub const PLAN_COLORS: [&str; 10] = [
    "#3ecfcf", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
    "#ec4899", "#6366f1",
];
