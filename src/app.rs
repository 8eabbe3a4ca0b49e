//! Food Dashboard App
//!
//! Root component: owns the store and the controller, wires user intents
//! to controller operations and reports failures as notices.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use food_dashboard_core::{
    DashboardController, DashboardState, DashboardStateStoreFields, Food, FoodDraft, FoodId,
};

use crate::api::HttpFoodApi;
use crate::components::{FoodList, Header, ModalAddFood, ModalEditFood, NoticeBanner};
use crate::config::AppConfig;
use crate::context::NoticeContext;
use crate::store::{AppController, DashboardStore, StoreHandle};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    log::info!(
        "[APP] Foods API at {} (delete policy: {})",
        config.api_base_url,
        config.delete_policy.as_str()
    );

    // State
    let store: DashboardStore = Store::new(DashboardState::new());
    let notices = NoticeContext::new(signal(None), config.notice_timeout_ms);

    // Provide context to all children
    provide_context(store);
    provide_context(notices);

    let controller: StoredValue<AppController> = StoredValue::new(DashboardController::new(
        HttpFoodApi::new(&config),
        StoreHandle(store),
        config.delete_policy,
    ));

    // Load foods on mount
    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(err) = ctrl.initialize().await {
                notices.report(&err);
            }
        });
    });

    let toggle_add = Callback::new(move |_: ()| controller.with_value(|c| c.toggle_add_dialog()));
    let toggle_edit = Callback::new(move |_: ()| controller.with_value(|c| c.toggle_edit_dialog()));

    let handle_add = Callback::new(move |draft: FoodDraft| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(err) = ctrl.add_food(draft).await {
                notices.report(&err);
            }
        });
    });

    let handle_update = Callback::new(move |patch: FoodDraft| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(err) = ctrl.update_food(patch).await {
                notices.report(&err);
            }
        });
    });

    let handle_delete = Callback::new(move |id: FoodId| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            if let Err(err) = ctrl.delete_food(id).await {
                notices.report(&err);
            }
        });
    });

    let handle_edit = Callback::new(move |food: Food| controller.with_value(|c| c.request_edit(food)));

    view! {
        <div class="app-layout">
            <Header on_open_add=toggle_add />
            <NoticeBanner />

            <ModalAddFood
                open=Signal::derive(move || store.add_dialog_open().get())
                on_close=toggle_add
                on_submit=handle_add
            />
            <ModalEditFood
                open=Signal::derive(move || store.edit_dialog_open().get())
                on_close=toggle_edit
                editing=Signal::derive(move || store.editing().get())
                on_submit=handle_update
            />

            <main class="main-content">
                <FoodList on_edit=handle_edit on_delete=handle_delete />
            </main>
        </div>
    }
}
