use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::layout::Shell;
use crate::shared::data::catalog_store::CatalogStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let catalog = CatalogStore::new();
    provide_context(catalog);
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());

    // The single startup load; the shell renders empty lists until it resolves.
    catalog.load();

    view! {
        <Shell />
    }
}
