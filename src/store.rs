//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! core `DashboardState`.

use leptos::prelude::*;
use reactive_stores::Store;

use food_dashboard_core::{
    Action, DashboardController, DashboardState, DashboardStateStoreFields, StateField, StateStore,
};

use crate::api::HttpFoodApi;

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Controller wired to the HTTP API and the reactive store
pub type AppController = DashboardController<HttpFoodApi, StoreHandle>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Lets the controller read and drive the reactive store
#[derive(Clone, Copy)]
pub struct StoreHandle(pub DashboardStore);

impl StateStore for StoreHandle {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.0.with_untracked(f)
    }

    /// Reduce without tracking, then wake only the fields the action touched
    fn dispatch(&self, action: Action) {
        let store = self.0;
        let touched = action.touches();
        {
            let mut state = store.write_untracked();
            *state = std::mem::take(&mut *state).apply(action);
        }
        for field in touched {
            match field {
                StateField::Items => store.items().notify(),
                StateField::Editing => store.editing().notify(),
                StateField::AddDialog => store.add_dialog_open().notify(),
                StateField::EditDialog => store.edit_dialog_open().notify(),
                StateField::Pending => store.pending().notify(),
            }
        }
    }
}
