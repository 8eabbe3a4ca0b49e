//! Header Component
//!
//! Title bar with the button that opens the add dialog.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-content">
                <h1 class="app-title">"Food Dashboard"</h1>
                <button
                    type="button"
                    class="add-food-btn"
                    data-testid="open-add-food"
                    on:click=move |_| on_open_add.run(())
                >
                    <span class="add-food-text">"New food"</span>
                    <span class="add-food-icon">"+"</span>
                </button>
            </div>
        </header>
    }
}
