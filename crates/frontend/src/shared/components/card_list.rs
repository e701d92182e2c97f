//! Card lists for tools, services and jobs.
//!
//! Building the card models is a pure step ([`render_cards`]); [`CardList`]
//! draws them and binds one click handler per interactive card. The whole list
//! is rebuilt whenever its input changes.

use crate::shared::icons::{class_icon, icon};
use leptos::prelude::*;

/// One rendered card. `action` is `None` for decorative cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel<A> {
    pub title: String,
    pub icon: String,
    pub action: Option<A>,
}

impl<A> CardModel<A> {
    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }
}

/// Builds one card per item, in input order.
pub fn render_cards<T, A>(items: &[T], card_builder: impl Fn(&T) -> CardModel<A>) -> Vec<CardModel<A>> {
    items.iter().map(card_builder).collect()
}

#[component]
pub fn CardList<A>(
    #[prop(into)] cards: Signal<Vec<CardModel<A>>>,
    /// Called with the card's action on click. Without it every card is static.
    #[prop(optional)]
    on_select: Option<Callback<A>>,
    #[prop(optional, into)] class: String,
    /// Shown when there are no cards
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView
where
    A: Clone + Send + Sync + 'static,
{
    let list_class = if class.is_empty() {
        "card-list".to_string()
    } else {
        format!("card-list {class}")
    };

    view! {
        <div class=list_class>
            {move || {
                let cards = cards.get();
                if cards.is_empty() {
                    return empty_text
                        .clone()
                        .map(|text| view! { <div class="card-list__empty">{text}</div> }.into_any())
                        .unwrap_or_else(|| view! { <></> }.into_any());
                }
                cards
                    .into_iter()
                    .map(|card| card_view(card, on_select))
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

fn card_view<A>(card: CardModel<A>, on_select: Option<Callback<A>>) -> AnyView
where
    A: Clone + Send + Sync + 'static,
{
    let CardModel { title, icon: icon_class, action } = card;
    match (action, on_select) {
        (Some(action), Some(on_select)) => view! {
            <div class="card card--interactive" on:click=move |_| on_select.run(action.clone())>
                <span class="card__icon">{class_icon(&icon_class)}</span>
                <span class="card__title">{title}</span>
                <span class="card__chevron">{icon("chevron-right")}</span>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="card card--static">
                <span class="card__icon">{class_icon(&icon_class)}</span>
                <span class="card__title">{title}</span>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, action: Option<&str>) -> CardModel<String> {
        CardModel {
            title: title.to_string(),
            icon: String::new(),
            action: action.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_input_gives_no_cards() {
        let items: Vec<(&str, Option<&str>)> = vec![];
        let cards = render_cards(&items, |(t, a)| card(t, *a));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_order_and_interactivity_preserved() {
        let items = vec![("b", Some("https://b.test")), ("a", None), ("c", Some("https://c.test"))];
        let cards = render_cards(&items, |(t, a)| card(t, *a));
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
        let interactive: Vec<bool> = cards.iter().map(CardModel::is_interactive).collect();
        assert_eq!(interactive, vec![true, false, true]);
    }
}
