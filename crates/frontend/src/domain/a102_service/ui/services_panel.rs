use crate::layout::modal_service::use_intake;
use crate::shared::components::card_list::{render_cards, CardList, CardModel};
use crate::shared::data::catalog_store::use_catalog;
use contracts::domain::a102_service::aggregate::Service;
use leptos::prelude::*;

pub const EMPTY_SERVICES_TEXT: &str = "अभी कोई सेवा उपलब्ध नहीं है";

/// The card action is the canonical service string, not the display name.
pub fn service_card(service: &Service) -> CardModel<String> {
    CardModel {
        title: service.name.clone(),
        icon: service.icon.clone(),
        action: Some(service.service.clone()),
    }
}

#[component]
pub fn ServicesPanel() -> impl IntoView {
    let catalog = use_catalog();
    let intake = use_intake();
    let cards = Signal::derive(move || render_cards(&catalog.services(), service_card));

    view! {
        <section class="services">
            <h2 class="services__title">"सरकारी सेवाएं"</h2>
            <CardList
                cards=cards
                on_select=Callback::new(move |service: String| intake.open(&service))
                empty_text=EMPTY_SERVICES_TEXT
            />
        </section>
    }
}
