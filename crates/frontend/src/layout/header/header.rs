use crate::layout::global_context::use_navigation;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigation();
    let services_open = nav.services_open();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"डिजिटल सेवा केंद्र"</span>
            </div>
            <div class="header__actions">
                <button
                    type="button"
                    class="button button--ghost"
                    class:button--active=move || services_open.get()
                    aria-label="Toggle services"
                    on:click=move |_| nav.toggle_services()
                >
                    {icon("services")}
                    <span>"सेवाएं"</span>
                </button>
            </div>
        </header>
    }
}
