//! Food Card Component
//!
//! A single food in the list, with edit and delete actions.

use leptos::prelude::*;

use food_dashboard_core::{Food, FoodId};

use crate::components::DeleteConfirmButton;
use crate::store::use_dashboard_store;

#[component]
pub fn FoodCard(
    food: Food,
    /// A request for this food is in flight
    #[prop(into)]
    pending: Signal<bool>,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<FoodId>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let id = food.id;
    let available = food.is_available();
    let price = food.price.as_ref().map(ToString::to_string).unwrap_or_default();
    let name = food.name.unwrap_or_default();
    let image = food.image.unwrap_or_default();
    let description = food.description.unwrap_or_default();

    // Edit the entry as it is in the list now, not as it was rendered
    let edit = move |_: leptos::ev::MouseEvent| {
        if let Some(current) = store.with_untracked(|state| state.find(id).cloned()) {
            on_edit.run(current);
        }
    };

    let card_class = move || {
        let mut c = String::from("food-card");
        if !available {
            c.push_str(" unavailable");
        }
        if pending.get() {
            c.push_str(" pending");
        }
        c
    };

    view! {
        <div class=card_class data-testid=format!("food-{}", id)>
            <div class="food-card-image">
                <img src=image alt=name.clone() />
            </div>
            <section class="food-card-body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price"><b>{price}</b></p>
            </section>
            <section class="food-card-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        title="Edit"
                        data-testid=format!("edit-food-{}", id)
                        disabled=move || pending.get()
                        on:click=edit
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon delete-btn"
                        disabled=pending
                        on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                    />
                </div>
                <div class="availability">
                    <span class=if available { "availability-dot on" } else { "availability-dot off" } />
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                </div>
            </section>
        </div>
    }
}
