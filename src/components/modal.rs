//! Modal Component
//!
//! Backdrop plus dialog shell. Children are only mounted while open.

use leptos::prelude::*;

/// Generic modal dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `on_close` - Called on backdrop click or the × button
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || open.get().then(|| view! {
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        })}
    }
}
