//! Plain navigation state: which category view is showing, which tool frame
//! is active and whether the services panel is open.
//!
//! Kept free of signals so transitions can be tested natively. The
//! `AppGlobalContext` owns the only writable copy.

use contracts::domain::a101_tool::aggregate::ToolCategory;

const UNKNOWN_CATEGORY_ICON: &str = "fas fa-th-large";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MainView {
    #[default]
    Main,
    /// Raw category key. Unknown keys still transition and render empty.
    SubCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolFrame {
    #[default]
    Inactive,
    Active {
        url: String,
        generation: u64,
        loading: bool,
    },
}

impl ToolFrame {
    pub fn url(&self) -> Option<&str> {
        match self {
            ToolFrame::Active { url, .. } => Some(url),
            ToolFrame::Inactive => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ToolFrame::Active { loading: true, .. })
    }
}

/// Title shown above the sub-category tool list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTitle {
    pub icon: String,
    pub label: String,
}

impl CategoryTitle {
    pub fn for_key(key: &str) -> Self {
        match ToolCategory::from_key(key) {
            Some(category) => Self {
                icon: category.icon_class().to_string(),
                label: category.display_name().to_string(),
            },
            None => Self {
                icon: UNKNOWN_CATEGORY_ICON.to_string(),
                label: key.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub view: MainView,
    pub tool: ToolFrame,
    pub services_open: bool,
    generation: u64,
}

impl NavigationState {
    /// Shows the tool list of `key` and drops any active tool frame.
    pub fn select_category(&mut self, key: &str) {
        self.view = MainView::SubCategory(key.to_string());
        self.tool = ToolFrame::Inactive;
    }

    pub fn back(&mut self) {
        self.view = MainView::Main;
    }

    /// Activates a tool frame and returns the generation its load signal must carry.
    pub fn select_tool(&mut self, url: &str) -> u64 {
        self.generation += 1;
        self.tool = ToolFrame::Active {
            url: url.to_string(),
            generation: self.generation,
            loading: true,
        };
        self.generation
    }

    /// Clears the loading indicator once. Returns `false` for stale or repeated signals.
    pub fn frame_loaded(&mut self, generation: u64) -> bool {
        match &mut self.tool {
            ToolFrame::Active {
                generation: current,
                loading,
                ..
            } if *current == generation && *loading => {
                *loading = false;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_services(&mut self) {
        self.services_open = !self.services_open;
    }

    pub fn current_category(&self) -> Option<&str> {
        match &self.view {
            MainView::SubCategory(key) => Some(key),
            MainView::Main => None,
        }
    }

    pub fn title(&self) -> Option<CategoryTitle> {
        self.current_category().map(CategoryTitle::for_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_back_restores_main() {
        for category in ToolCategory::ALL {
            let before = NavigationState::default();
            let mut state = before.clone();
            state.select_category(category.key());
            assert_eq!(state.view, MainView::SubCategory(category.key().into()));
            state.back();
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_select_category_resets_tool() {
        let mut state = NavigationState::default();
        state.select_category("image");
        state.select_tool("https://tools.test/resize");
        assert!(state.tool.is_loading());

        state.select_category("pdf");
        assert_eq!(state.tool, ToolFrame::Inactive);
    }

    #[test]
    fn test_back_keeps_active_tool() {
        let mut state = NavigationState::default();
        state.select_category("video");
        state.select_tool("https://tools.test/trim");
        state.back();
        assert_eq!(state.view, MainView::Main);
        assert_eq!(state.tool.url(), Some("https://tools.test/trim"));
    }

    #[test]
    fn test_frame_loaded_is_single_shot() {
        let mut state = NavigationState::default();
        let generation = state.select_tool("https://tools.test/a");
        assert!(state.frame_loaded(generation));
        assert!(!state.tool.is_loading());
        assert!(!state.frame_loaded(generation));
    }

    #[test]
    fn test_stale_load_signal_ignored() {
        let mut state = NavigationState::default();
        let first = state.select_tool("https://tools.test/a");
        let second = state.select_tool("https://tools.test/b");
        assert_ne!(first, second);

        assert!(!state.frame_loaded(first));
        assert!(state.tool.is_loading());
        assert!(state.frame_loaded(second));
    }

    #[test]
    fn test_frame_loaded_without_tool() {
        let mut state = NavigationState::default();
        assert!(!state.frame_loaded(1));
        assert_eq!(state.tool, ToolFrame::Inactive);
    }

    #[test]
    fn test_unknown_category_title() {
        let mut state = NavigationState::default();
        assert_eq!(state.title(), None);

        state.select_category("audio");
        let title = state.title().unwrap();
        assert_eq!(title.label, "audio");
        assert_eq!(title.icon, UNKNOWN_CATEGORY_ICON);

        state.select_category("pdf");
        assert_eq!(state.title().unwrap().label, "PDF Tools");
    }

    #[test]
    fn test_toggle_services() {
        let mut state = NavigationState::default();
        state.toggle_services();
        assert!(state.services_open);
        state.toggle_services();
        assert!(!state.services_open);
    }
}
