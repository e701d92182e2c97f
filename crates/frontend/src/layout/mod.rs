pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;
pub mod modal_service;
pub mod navigation_state;
pub mod right;

pub use modal_service::ModalService;

use crate::usecases::u501_service_intake::ServiceIntakeModal;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// | Categories |   Tool area   |  Services   |
/// |   (Left)   |   (Center)    |  (Right)    |
/// +------------------------------------------+
/// |              Jobs (Footer)               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left />
                <div class="app-main">
                    <center::Center />
                </div>
                <right::Right />
            </div>
            <footer::Footer />
            <ServiceIntakeModal />
        </div>
    }
}
