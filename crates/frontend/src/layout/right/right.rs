use crate::domain::a102_service::ui::ServicesPanel;
use crate::layout::global_context::use_navigation;
use leptos::prelude::*;

#[component]
pub fn Right() -> impl IntoView {
    let nav = use_navigation();
    let is_open = nav.services_open();

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open.get()
        >
            <ServicesPanel />
        </div>
    }
}
