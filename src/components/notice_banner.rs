//! Notice Banner Component
//!
//! Shows the latest error notice from `NoticeContext`.

use leptos::prelude::*;

use crate::context::NoticeContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<NoticeContext>();

    view! {
        {move || notices.notice.get().map(|notice| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{notice.message}</span>
                <button type="button" class="notice-dismiss" on:click=move |_| notices.dismiss()>
                    "×"
                </button>
            </div>
        })}
    }
}
