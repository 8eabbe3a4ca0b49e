//! Food Dashboard Core
//!
//! Target-independent half of the dashboard:
//! - model: food entities and request payloads
//! - state: view state and its reducer
//! - api: the remote collection contract
//! - controller: user intents -> remote calls -> state transitions

mod api;
mod controller;
mod error;
mod model;
mod state;


pub use api::{FoodApi, StateStore};
pub use controller::{DashboardController, DeletePolicy};
pub use error::{ApiError, ApiResult, DashboardError, DashboardResult};
pub use model::{Food, FoodDraft, FoodId, NewFood, Price};
pub use state::{Action, DashboardState, DashboardStateStoreFields, StateField};
