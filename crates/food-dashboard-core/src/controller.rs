//! Dashboard Controller
//!
//! Turns user intents into remote calls and folds the responses into the
//! state store. Failures are logged and handed back to the caller; what the
//! user sees is up to the view.

use log::{debug, info, warn};

use crate::api::{FoodApi, StateStore};
use crate::error::{DashboardError, DashboardResult};
use crate::model::{Food, FoodDraft, FoodId, NewFood};
use crate::state::Action;

/// When a deleted food leaves the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Removed as soon as the request is issued, kept removed whatever the outcome
    #[default]
    Optimistic,
    /// Removed only once the server confirms
    Confirmed,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletePolicy::Optimistic => "optimistic",
            DeletePolicy::Confirmed => "confirmed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Some(DeletePolicy::Optimistic),
            "confirmed" => Some(DeletePolicy::Confirmed),
            _ => None,
        }
    }
}

/// Owner of the dashboard's remote sync
#[derive(Clone)]
pub struct DashboardController<A, S> {
    api: A,
    store: S,
    delete_policy: DeletePolicy,
}

impl<A: FoodApi, S: StateStore> DashboardController<A, S> {
    pub fn new(api: A, store: S, delete_policy: DeletePolicy) -> Self {
        Self {
            api,
            store,
            delete_policy,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// Fetch the whole collection and replace the list with it.
    /// Returns the number of foods loaded.
    pub async fn initialize(&self) -> DashboardResult<usize> {
        match self.api.list_foods().await {
            Ok(foods) => {
                let count = foods.len();
                info!("[DASHBOARD] Loaded {} foods", count);
                self.store.dispatch(Action::Loaded(foods));
                Ok(count)
            }
            Err(err) => {
                warn!("[DASHBOARD] Failed to load foods: {}", err);
                Err(err.into())
            }
        }
    }

    /// Create a food from `draft` (always submitted as available) and append
    /// the server's representation.
    pub async fn add_food(&self, draft: FoodDraft) -> DashboardResult<Food> {
        let body = NewFood::from_draft(draft);
        match self.api.create_food(&body).await {
            Ok(created) => {
                info!("[DASHBOARD] Created food #{}", created.id);
                self.store.dispatch(Action::Added(created.clone()));
                Ok(created)
            }
            Err(err) => {
                warn!("[DASHBOARD] Failed to create food: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn request_edit(&self, food: Food) {
        debug!("[DASHBOARD] Editing food #{}", food.id);
        self.store.dispatch(Action::EditRequested(food));
    }

    /// Submit the food being edited with `patch` merged over it and replace
    /// the list entry with the server's answer.
    pub async fn update_food(&self, patch: FoodDraft) -> DashboardResult<Food> {
        let editing = self
            .store
            .with_state(|state| state.editing.clone())
            .ok_or(DashboardError::NotEditing)?;
        let id = editing.id;
        self.begin(id)?;

        let body = editing.merged(&patch);
        let result = self.api.update_food(id, &body).await;
        self.store.dispatch(Action::Settled(id));

        match result {
            Ok(updated) => {
                info!("[DASHBOARD] Updated food #{}", updated.id);
                self.store.dispatch(Action::Updated(updated.clone()));
                Ok(updated)
            }
            Err(err) => {
                warn!("[DASHBOARD] Failed to update food #{}: {}", id, err);
                Err(err.into())
            }
        }
    }

    /// Delete a food; when it leaves the list depends on the [`DeletePolicy`].
    pub async fn delete_food(&self, id: FoodId) -> DashboardResult<()> {
        self.begin(id)?;
        if self.delete_policy == DeletePolicy::Optimistic {
            self.store.dispatch(Action::Removed(id));
        }

        let result = self.api.delete_food(id).await;
        self.store.dispatch(Action::Settled(id));

        match result {
            Ok(()) => {
                if self.delete_policy == DeletePolicy::Confirmed {
                    self.store.dispatch(Action::Removed(id));
                }
                info!("[DASHBOARD] Deleted food #{}", id);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "[DASHBOARD] Failed to delete food #{} ({} policy): {}",
                    id,
                    self.delete_policy.as_str(),
                    err
                );
                Err(err.into())
            }
        }
    }

    pub fn toggle_add_dialog(&self) {
        self.store.dispatch(Action::ToggleAddDialog);
        debug!(
            "[DASHBOARD] Add dialog open: {}",
            self.store.with_state(|state| state.add_dialog_open)
        );
    }

    pub fn toggle_edit_dialog(&self) {
        self.store.dispatch(Action::ToggleEditDialog);
        debug!(
            "[DASHBOARD] Edit dialog open: {}",
            self.store.with_state(|state| state.edit_dialog_open)
        );
    }

    /// Claim `id` for a request, rejecting overlaps
    fn begin(&self, id: FoodId) -> DashboardResult<()> {
        if self.store.with_state(|state| state.is_pending(id)) {
            warn!("[DASHBOARD] Food #{} is busy, request rejected", id);
            return Err(DashboardError::Busy(id));
        }
        self.store.dispatch(Action::Began(id));
        Ok(())
    }
}
