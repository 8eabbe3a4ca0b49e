//! Core Traits
//!
//! The remote collection the dashboard syncs with, and the place its
//! state lives. The browser app backs these with HTTP and a reactive
//! store; tests back them with a scripted mock and a `RefCell`.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{Food, FoodId, NewFood};
use crate::state::{Action, DashboardState};

/// CRUD contract of the `/foods` resource
///
/// Futures are not `Send`: the browser runs them on its single event loop.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`
    async fn create_food(&self, food: &NewFood) -> ApiResult<Food>;

    /// `PUT /foods/{id}`
    async fn update_food(&self, id: FoodId, food: &Food) -> ApiResult<Food>;

    /// `DELETE /foods/{id}`; the response body is ignored
    async fn delete_food(&self, id: FoodId) -> ApiResult<()>;
}

/// Holder of the [`DashboardState`]
pub trait StateStore {
    /// Read the current snapshot
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;

    /// Fold an action into the current snapshot
    fn dispatch(&self, action: Action);
}

impl StateStore for RefCell<DashboardState> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }

    fn dispatch(&self, action: Action) {
        let current = self.take();
        *self.borrow_mut() = current.apply(action);
    }
}

impl<T: StateStore> StateStore for Rc<T> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        (**self).with_state(f)
    }

    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}
