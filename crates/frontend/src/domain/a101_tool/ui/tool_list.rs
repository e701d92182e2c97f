use crate::layout::global_context::use_navigation;
use crate::shared::components::card_list::{render_cards, CardList, CardModel};
use crate::shared::data::catalog_store::use_catalog;
use crate::shared::icons::{class_icon, icon};
use contracts::domain::a101_tool::aggregate::Tool;
use leptos::prelude::*;

pub const EMPTY_TOOLS_TEXT: &str = "इस श्रेणी में अभी कोई टूल नहीं है";

/// Tools without a URL render as static cards
pub fn tool_card(tool: &Tool) -> CardModel<String> {
    CardModel {
        title: tool.name.clone(),
        icon: tool.icon.clone(),
        action: tool.url.clone().filter(|_| tool.is_interactive()),
    }
}

/// Sub-category view: title, back button and the tools of `category`
#[component]
pub fn ToolList(#[prop(into)] category: String) -> impl IntoView {
    let nav = use_navigation();
    let catalog = use_catalog();
    let title = nav.title();

    let key = category.clone();
    let cards = Signal::derive(move || render_cards(&catalog.tools_for(&key), tool_card));

    view! {
        <section class="subcategories">
            <div class="subcategories__header">
                <button
                    type="button"
                    class="button button--ghost"
                    aria-label="Back"
                    on:click=move |_| nav.back()
                >
                    {icon("arrow-left")}
                </button>
                {move || title.get().map(|t| view! {
                    <h2 class="subcategories__title">
                        {class_icon(&t.icon)}
                        <span>{t.label}</span>
                    </h2>
                })}
            </div>
            <CardList
                cards=cards
                on_select=Callback::new(move |url: String| {
                    nav.select_tool(&url);
                })
                empty_text=EMPTY_TOOLS_TEXT
            />
        </section>
    }
}
