use crate::layout::global_context::use_navigation;
use crate::layout::navigation_state::ToolFrame;
use leptos::prelude::*;
use thaw::*;

/// Tool area: the default placeholder or the active tool frame.
#[component]
pub fn Center() -> impl IntoView {
    let nav = use_navigation();
    let tool = nav.tool();

    // Changes only when a new tool is activated, so clearing the loading flag
    // does not recreate (and reload) the frame.
    let activation = Memo::new(move |_| {
        tool.with(|t| match t {
            ToolFrame::Active { url, generation, .. } => Some((url.clone(), *generation)),
            ToolFrame::Inactive => None,
        })
    });
    let loading = Signal::derive(move || tool.with(ToolFrame::is_loading));

    view! {
        <div data-zone="center" class="tool-area">
            {move || match activation.get() {
                None => view! {
                    <div class="tool-area__placeholder">
                        <p>"कोई टूल चुनें"</p>
                    </div>
                }
                .into_any(),
                Some((url, generation)) => view! {
                    <div class="tool-area__frame">
                        <Show when=move || loading.get()>
                            <div class="tool-area__loading">
                                <Spinner />
                            </div>
                        </Show>
                        <iframe
                            class="tool-area__iframe"
                            src=url
                            title="Tool"
                            on:load=move |_| nav.frame_loaded(generation)
                        ></iframe>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
