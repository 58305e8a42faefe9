//! Persistence bridge between the plan store and a durable key-value store.
//!
//! The whole plan collection is stored as one JSON value under [`PLANS_KEY`]
//! and the active plan identifier as a plain string under
//! [`ACTIVE_PLAN_KEY`]. Reads and writes are best-effort: failures are
//! logged and never reach the caller.

use log::{debug, warn};

use crate::{
    error::Result,
    models::{MealPlan, PlanId},
};

/// Key holding the JSON array of plans.
pub const PLANS_KEY: &str = "plans";

/// Key holding the active plan identifier.
pub const ACTIVE_PLAN_KEY: &str = "active-plan-id";

/// Durable string key-value storage.
pub trait KeyValueStore: Send {
    /// Reads a value, `None` when the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes a value. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// State read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    pub plans: Vec<MealPlan>,
    pub active_plan_id: Option<PlanId>,
}

/// Serializes the plan collection into a [`KeyValueStore`] and back.
pub struct PersistenceBridge {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceBridge {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the stored state.
    ///
    /// Returns `None` when nothing is stored or the stored plans cannot be
    /// read. Unreadable creation timestamps are replaced rather than
    /// rejected.
    pub fn load(&self) -> Option<LoadedState> {
        let raw = match self.store.get(PLANS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read stored plans: {e}");
                return None;
            }
        };

        let plans: Vec<MealPlan> = match serde_json::from_str(&raw) {
            Ok(plans) => plans,
            Err(e) => {
                warn!("Ignoring malformed stored plans: {e}");
                return None;
            }
        };

        let active_plan_id = match self.store.get(ACTIVE_PLAN_KEY) {
            Ok(id) => id.filter(|id| !id.is_empty()).map(PlanId::from),
            Err(e) => {
                warn!("Failed to read the active plan id: {e}");
                None
            }
        };

        debug!("Loaded {} plan(s)", plans.len());
        Some(LoadedState {
            plans,
            active_plan_id,
        })
    }

    /// Writes the current state.
    ///
    /// Plans are written only when there are any, and the active identifier
    /// only when one is set; neither is ever removed here.
    pub fn persist(&mut self, plans: &[MealPlan], active_plan_id: Option<&PlanId>) {
        if !plans.is_empty() {
            match serde_json::to_string(plans) {
                Ok(json) => {
                    if let Err(e) = self.store.set(PLANS_KEY, &json) {
                        warn!("Failed to save plans: {e}");
                    }
                }
                Err(e) => warn!("Failed to serialize plans: {e}"),
            }
        }

        if let Some(id) = active_plan_id {
            if let Err(e) = self.store.set(ACTIVE_PLAN_KEY, id.as_str()) {
                warn!("Failed to save the active plan id: {e}");
            }
        }
    }

    /// Erases both stored values.
    pub fn clear(&mut self) {
        for key in [PLANS_KEY, ACTIVE_PLAN_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to clear {key}: {e}");
            }
        }
    }
}
