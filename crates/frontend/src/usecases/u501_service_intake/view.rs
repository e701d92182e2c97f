use crate::layout::modal_service::use_intake;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::usecases::u501_service_intake::state::IntakeModal;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Intake modal. Rendered only while the controller holds an open modal, so
/// its content is rebuilt from scratch on every open.
#[component]
pub fn ServiceIntakeModal() -> impl IntoView {
    let intake = use_intake();
    let modal = intake.modal();

    view! {
        {move || {
            modal
                .get()
                .map(|m| view! { <IntakeForm modal=m /> }.into_any())
                .unwrap_or_else(|| view! { <></> }.into_any())
        }}
    }
}

#[component]
fn IntakeForm(modal: IntakeModal) -> impl IntoView {
    let intake = use_intake();
    let IntakeModal { service, documents } = modal;

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());

    let title = service.clone();
    let service_for_submit = service.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        intake.submit(&service_for_submit, &name.get_untracked(), &phone.get_untracked());
    };

    view! {
        <ModalFrame
            title=title
            on_close=Callback::new(move |_| intake.close())
            modal_class="intake-modal"
        >
            <section class="intake__section">
                <h3 class="intake__heading">"सेवा"</h3>
                <p class="intake__service">{service}</p>
            </section>

            <section class="intake__section">
                <h3 class="intake__heading">"आवश्यक दस्तावेज़"</h3>
                <ul class="intake__documents">
                    {documents
                        .into_iter()
                        .map(|doc| view! {
                            <li class="intake__document">
                                {icon("file-check")}
                                <span>{doc}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>

            <form class="intake__form" on:submit=on_submit>
                <div class="form-group">
                    <label for="intake-name">"पूरा नाम"</label>
                    <input
                        type="text"
                        id="intake-name"
                        name="name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="intake-phone">"मोबाइल नंबर"</label>
                    <input
                        type="tel"
                        id="intake-phone"
                        name="phone"
                        autocomplete="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn-primary">"आगे बढ़ें"</button>
            </form>
        </ModalFrame>
    }
}
