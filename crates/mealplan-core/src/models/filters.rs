//! Filter options for querying meals.

use std::ops::RangeInclusive;

use super::{MealType, Weekday};

/// Default cook time window in minutes.
pub const DEFAULT_COOK_TIME_RANGE: RangeInclusive<u32> = 0..=60;

/// Default servings window.
pub const DEFAULT_SERVINGS_RANGE: RangeInclusive<u32> = 1..=8;

/// Structured filter over a plan's meals.
///
/// Empty type and day lists match every meal. The ranges only exclude meals
/// whose recipe actually states a cook time or servings count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFilter {
    /// Restrict to these meal types
    pub types: Vec<MealType>,

    /// Restrict to these days
    pub days: Vec<Weekday>,

    /// Accepted cook time in minutes
    pub cook_time: RangeInclusive<u32>,

    /// Accepted number of servings
    pub servings: RangeInclusive<u32>,
}

impl Default for MealFilter {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            days: Vec::new(),
            cook_time: DEFAULT_COOK_TIME_RANGE,
            servings: DEFAULT_SERVINGS_RANGE,
        }
    }
}

impl MealFilter {
    /// Number of active criteria: one per selected type and day, plus one
    /// for each range narrowed from its default.
    pub fn active_filter_count(&self) -> usize {
        let narrowed = |range: &RangeInclusive<u32>, default: &RangeInclusive<u32>| {
            usize::from(range.start() > default.start() || range.end() < default.end())
        };
        self.types.len()
            + self.days.len()
            + narrowed(&self.cook_time, &DEFAULT_COOK_TIME_RANGE)
            + narrowed(&self.servings, &DEFAULT_SERVINGS_RANGE)
    }
}
