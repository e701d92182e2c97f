use crate::domain::a103_job::partition::partition_jobs;
use crate::shared::components::card_list::{render_cards, CardList, CardModel};
use crate::shared::data::catalog_store::use_catalog;
use contracts::domain::a103_job::aggregate::{Job, JobSlot};
use leptos::prelude::*;

pub fn job_card(job: &Job) -> CardModel<String> {
    CardModel {
        title: job.name.clone(),
        icon: job.icon.clone(),
        action: Some(job.url.clone()).filter(|url| !url.is_empty()),
    }
}

/// Three job lists (top, left, right) sharing one embedded frame.
#[component]
pub fn JobPanel() -> impl IntoView {
    let catalog = use_catalog();
    let frame_url = RwSignal::new(None::<String>);

    let groups = Memo::new(move |_| partition_jobs(&catalog.jobs()));
    let cards_for = move |slot: JobSlot| {
        Signal::derive(move || groups.with(|g| render_cards(g.slot(slot), job_card)))
    };
    // selecting another job only swaps the frame source
    let on_select = Callback::new(move |url: String| frame_url.set(Some(url)));

    view! {
        <section class="jobs">
            <CardList cards=cards_for(JobSlot::Top) on_select=on_select class="jobs__top" />
            <div class="jobs__body">
                <CardList cards=cards_for(JobSlot::Left) on_select=on_select class="jobs__left" />
                <div class="jobs__frame">
                    {move || match frame_url.get() {
                        Some(url) => view! {
                            <iframe class="jobs__iframe" src=url title="Job listing"></iframe>
                        }
                        .into_any(),
                        None => view! {
                            <div class="jobs__placeholder">"नौकरी चुनें"</div>
                        }
                        .into_any(),
                    }}
                </div>
                <CardList cards=cards_for(JobSlot::Right) on_select=on_select class="jobs__right" />
            </div>
        </section>
    }
}
