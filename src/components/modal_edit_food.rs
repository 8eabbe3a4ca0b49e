//! Edit Food Modal
//!
//! Food form pre-filled from the food being edited; closes after submitting.

use leptos::prelude::*;

use food_dashboard_core::{Food, FoodDraft};

use crate::components::{FoodForm, Modal};
use crate::forms::FoodFormValues;

#[component]
pub fn ModalEditFood(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing: Signal<Option<Food>>,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let initial = Signal::derive(move || {
        editing
            .get()
            .map(|food| FoodFormValues::from_food(&food))
            .unwrap_or_default()
    });

    // Closing only hides the dialog; `editing` stays set for the spawned update
    let submit = Callback::new(move |draft: FoodDraft| {
        on_submit.run(draft);
        on_close.run(());
    });

    view! {
        <Modal open=open on_close=on_close title="Edit food">
            <FoodForm initial=initial submit_label="Save changes" on_submit=submit />
        </Modal>
    }
}
