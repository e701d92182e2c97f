use crate::domain::a101_tool::ui::{CategoryGrid, ToolList};
use crate::layout::global_context::use_navigation;
use crate::layout::navigation_state::MainView;
use leptos::prelude::*;

/// Category drill-down. Exactly one of the main grid or the tool list is shown.
#[component]
pub fn Left() -> impl IntoView {
    let nav = use_navigation();
    let view_state = nav.view();

    view! {
        <div data-zone="left" class="left">
            {move || match view_state.get() {
                MainView::Main => view! { <CategoryGrid /> }.into_any(),
                MainView::SubCategory(key) => view! { <ToolList category=key /> }.into_any(),
            }}
        </div>
    }
}
