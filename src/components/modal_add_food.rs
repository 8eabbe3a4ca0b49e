//! Add Food Modal
//!
//! Empty food form in a modal; closes after submitting.

use leptos::prelude::*;

use food_dashboard_core::FoodDraft;

use crate::components::{FoodForm, Modal};
use crate::forms::FoodFormValues;

#[component]
pub fn ModalAddFood(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |draft: FoodDraft| {
        on_submit.run(draft);
        on_close.run(());
    });

    view! {
        <Modal open=open on_close=on_close title="New food">
            <FoodForm
                initial=Signal::derive(FoodFormValues::default)
                submit_label="Add food"
                on_submit=submit
            />
        </Modal>
    }
}
