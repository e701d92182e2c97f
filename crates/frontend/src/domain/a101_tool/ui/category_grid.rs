use crate::layout::global_context::use_navigation;
use crate::shared::components::card_list::{render_cards, CardList, CardModel};
use contracts::domain::a101_tool::aggregate::ToolCategory;
use leptos::prelude::*;

pub fn category_card(category: &ToolCategory) -> CardModel<String> {
    CardModel {
        title: category.display_name().to_string(),
        icon: category.icon_class().to_string(),
        action: Some(category.key().to_string()),
    }
}

/// Main view: one card per tool category
#[component]
pub fn CategoryGrid() -> impl IntoView {
    let nav = use_navigation();
    let cards = Signal::derive(|| render_cards(&ToolCategory::ALL, category_card));

    view! {
        <section class="categories">
            <CardList
                cards=cards
                on_select=Callback::new(move |key: String| nav.select_category(&key))
                class="card-list--grid"
            />
        </section>
    }
}
