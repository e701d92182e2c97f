use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// `true` only when the event was dispatched on the element the handler is
/// bound to. Clicks on descendants bubble up with a different target.
pub fn is_backdrop_event<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    match (target, current_target) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    }
}

/// Modal frame: backdrop + surface with a close button.
///
/// Closes on the close button or on a click whose target is the backdrop itself.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_deferred = move || {
        // Defer close to next tick: avoids Leptos event delegation calling a dropped handler
        // when the backdrop is removed synchronously during its own click dispatch.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        if is_backdrop_event(ev.target(), ev.current_target()) {
            close_deferred();
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay" on:click=handle_backdrop_click>
            <div class=surface_class role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| close_deferred()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_identity() {
        assert!(is_backdrop_event(Some("overlay"), Some("overlay")));
    }

    #[test]
    fn test_nested_target_does_not_close() {
        assert!(!is_backdrop_event(Some("modal-body"), Some("overlay")));
        assert!(!is_backdrop_event(Some("input#phone"), Some("overlay")));
    }

    #[test]
    fn test_missing_targets() {
        assert!(!is_backdrop_event::<&str>(None, Some("overlay")));
        assert!(!is_backdrop_event::<&str>(Some("overlay"), None));
        assert!(!is_backdrop_event::<&str>(None, None));
    }
}
