//! Catalog data set: tools per category, services and jobs.
//!
//! Loaded once at startup and never mutated afterwards. Every collection
//! defaults to empty, so a file that omits a group still parses.

use crate::domain::a101_tool::aggregate::{Tool, ToolCategory};
use crate::domain::a102_service::aggregate::Service;
use crate::domain::a103_job::aggregate::Job;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub image: Vec<Tool>,
    #[serde(default)]
    pub pdf: Vec<Tool>,
    #[serde(default)]
    pub video: Vec<Tool>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Item counts, used for load diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub tools: usize,
    pub services: usize,
    pub jobs: usize,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn tools_for(&self, category: ToolCategory) -> &[Tool] {
        match category {
            ToolCategory::Image => &self.image,
            ToolCategory::Pdf => &self.pdf,
            ToolCategory::Video => &self.video,
        }
    }

    /// Lookup by raw navigation key. Unknown keys give an empty slice.
    pub fn tools_for_key(&self, key: &str) -> &[Tool] {
        ToolCategory::from_key(key)
            .map(|category| self.tools_for(category))
            .unwrap_or(&[])
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            tools: ToolCategory::ALL
                .iter()
                .map(|c| self.tools_for(*c).len())
                .sum(),
            services: self.services.len(),
            jobs: self.jobs.len(),
        }
    }
}
