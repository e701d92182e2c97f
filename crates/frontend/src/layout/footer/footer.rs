use crate::domain::a103_job::ui::JobPanel;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <JobPanel />
        </footer>
    }
}
