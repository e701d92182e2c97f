use serde::Deserialize;

// ============================================================================
// Category
// ============================================================================

/// Tool category. The set is closed: display names and icons come from the
/// static tables below, not from the catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Image,
    Pdf,
    Video,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 3] = [ToolCategory::Image, ToolCategory::Pdf, ToolCategory::Video];

    /// Key used both in the catalog file and in navigation
    pub fn key(&self) -> &'static str {
        match self {
            ToolCategory::Image => "image",
            ToolCategory::Pdf => "pdf",
            ToolCategory::Video => "video",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolCategory::Image => "Image Tools",
            ToolCategory::Pdf => "PDF Tools",
            ToolCategory::Video => "Video Tools",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ToolCategory::Image => "fas fa-image",
            ToolCategory::Pdf => "fas fa-file-pdf",
            ToolCategory::Video => "fas fa-video",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

// ============================================================================
// Tool
// ============================================================================

/// Single tool card. Without `url` the card is decorative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Tool {
    pub fn is_interactive(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}
