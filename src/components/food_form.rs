//! Food Form Component
//!
//! Controlled inputs for a food; emits a `FoodDraft` on submit.

use leptos::prelude::*;

use food_dashboard_core::FoodDraft;

use crate::forms::FoodFormValues;

/// Form shared by the add and edit dialogs
///
/// Fields reset to `initial` whenever it changes and after each submit.
/// Blank submissions are ignored.
#[component]
pub fn FoodForm(
    #[prop(into)] initial: Signal<FoodFormValues>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let (values, set_values) = signal(FoodFormValues::default());

    Effect::new(move |_| {
        set_values.set(initial.get());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = values.get_untracked().to_draft();
        if draft.is_empty() {
            return;
        }
        on_submit.run(draft);
        set_values.set(initial.get_untracked());
    };

    view! {
        <form class="food-form" on:submit=submit>
            <label class="food-form-field">
                <span>"Image URL"</span>
                <input
                    type="text"
                    name="image"
                    placeholder="Paste the image link here"
                    prop:value=move || values.with(|v| v.image.clone())
                    on:input=move |ev| set_values.update(|v| v.image = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                <span>"Name"</span>
                <input
                    type="text"
                    name="name"
                    placeholder="Ex: Moda Italiana"
                    prop:value=move || values.with(|v| v.name.clone())
                    on:input=move |ev| set_values.update(|v| v.name = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                <span>"Price"</span>
                <input
                    type="text"
                    name="price"
                    placeholder="Ex: 19.90"
                    prop:value=move || values.with(|v| v.price.clone())
                    on:input=move |ev| set_values.update(|v| v.price = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                <span>"Description"</span>
                <textarea
                    name="description"
                    rows="3"
                    placeholder="Description"
                    prop:value=move || values.with(|v| v.description.clone())
                    on:input=move |ev| set_values.update(|v| v.description = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="food-form-submit" data-testid="food-form-submit">
                {submit_label}
            </button>
        </form>
    }
}
