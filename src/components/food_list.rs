//! Food List Component
//!
//! Renders the store's foods in server order.

use leptos::prelude::*;

use food_dashboard_core::{DashboardStateStoreFields, Food, FoodId};

use crate::components::FoodCard;
use crate::store::use_dashboard_store;

#[component]
pub fn FoodList(
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<FoodId>,
) -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.items().get()
                key=|food| {
                    // Whole entry, so any change from the server re-renders the card
                    (food.id, serde_json::to_string(food).unwrap_or_default())
                }
                children=move |food| {
                    let id = food.id;
                    let pending = Signal::derive(move || store.pending().with(|p| p.contains(&id)));
                    view! {
                        <FoodCard food=food pending=pending on_edit=on_edit on_delete=on_delete />
                    }
                }
            />
        </div>
        <p class="item-count">{move || format!("{} foods", store.items().with(Vec::len))}</p>
    }
}
