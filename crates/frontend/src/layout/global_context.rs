use crate::layout::navigation_state::{CategoryTitle, MainView, NavigationState, ToolFrame};
use leptos::prelude::*;

/// Navigation controller. Sole writer of the navigation state; views read it
/// through the memos below, each of which only notifies when its own part of
/// the state changes.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    nav: RwSignal<NavigationState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavigationState::default()),
        }
    }

    pub fn view(&self) -> Memo<MainView> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|s| s.view.clone()))
    }

    pub fn tool(&self) -> Memo<ToolFrame> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|s| s.tool.clone()))
    }

    pub fn title(&self) -> Memo<Option<CategoryTitle>> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|s| s.title()))
    }

    pub fn services_open(&self) -> Memo<bool> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|s| s.services_open))
    }

    pub fn select_category(&self, key: &str) {
        log::debug!("select_category: key='{}'", key);
        self.nav.update(|s| s.select_category(key));
    }

    pub fn back(&self) {
        log::debug!("back to main categories");
        self.nav.update(|s| s.back());
    }

    /// Points the tool frame at `url`; the returned generation must be passed
    /// back to [`Self::frame_loaded`] by that frame's load handler.
    pub fn select_tool(&self, url: &str) -> u64 {
        let mut generation = 0;
        self.nav.update(|s| generation = s.select_tool(url));
        log::debug!("select_tool: url='{}', generation={}", url, generation);
        generation
    }

    pub fn frame_loaded(&self, generation: u64) {
        let mut cleared = false;
        self.nav.update(|s| cleared = s.frame_loaded(generation));
        if !cleared {
            log::debug!("ignored load signal for generation {}", generation);
        }
    }

    pub fn toggle_services(&self) {
        self.nav.update(|s| s.toggle_services());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts how often a view depending on `source` would be rebuilt.
    fn rebuild_counter<T>(source: Memo<T>) -> (Memo<()>, Arc<AtomicUsize>)
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let dependent = Memo::new(move |_| {
            source.track();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (dependent, runs)
    }

    #[test]
    fn test_tool_activity_does_not_touch_view() {
        Owner::new().with(|| {
            let nav = AppGlobalContext::new();
            nav.select_category("image");

            let (view_dependent, view_runs) = rebuild_counter(nav.view());
            let (title_dependent, title_runs) = rebuild_counter(nav.title());
            view_dependent.get();
            title_dependent.get();

            let generation = nav.select_tool("https://tools.test/resize");
            nav.frame_loaded(generation);
            nav.toggle_services();
            view_dependent.get();
            title_dependent.get();

            assert_eq!(view_runs.load(Ordering::SeqCst), 1);
            assert_eq!(title_runs.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_category_change_updates_view() {
        Owner::new().with(|| {
            let nav = AppGlobalContext::new();
            let view = nav.view();
            let (view_dependent, view_runs) = rebuild_counter(view);
            view_dependent.get();

            nav.select_category("pdf");
            view_dependent.get();

            assert_eq!(view.get_untracked(), MainView::SubCategory("pdf".into()));
            assert_eq!(view_runs.load(Ordering::SeqCst), 2);
        });
    }
}
