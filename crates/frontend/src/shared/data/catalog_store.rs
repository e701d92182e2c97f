//! Catalog store: fetches the catalog once and exposes read-only lookups.
//!
//! Any fetch or parse failure is logged and replaced by the empty catalog, so
//! readers never see a missing collection.

use crate::shared::config::CATALOG_URL;
use contracts::domain::a101_tool::aggregate::Tool;
use contracts::domain::a102_service::aggregate::Service;
use contracts::domain::a103_job::aggregate::Job;
use contracts::shared::catalog::Catalog;
use gloo_net::http::Request;
use leptos::prelude::*;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLoad {
    #[default]
    Pending,
    Ready(Arc<Catalog>),
}

#[derive(Clone, Copy)]
pub struct CatalogStore {
    state: RwSignal<CatalogLoad>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CatalogLoad::Pending),
        }
    }

    /// Starts the one and only catalog fetch. Later calls are ignored.
    pub fn load(&self) {
        if self.is_ready_untracked() {
            return;
        }
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let catalog = catalog_or_empty(fetch_catalog(CATALOG_URL).await);
            if state.with_untracked(|s| matches!(s, CatalogLoad::Pending)) {
                state.set(CatalogLoad::Ready(Arc::new(catalog)));
            }
        });
    }

    fn is_ready_untracked(&self) -> bool {
        self.state
            .with_untracked(|s| matches!(s, CatalogLoad::Ready(_)))
    }

    fn with_catalog<T>(&self, f: impl FnOnce(&Catalog) -> T) -> T {
        self.state.with(|s| match s {
            CatalogLoad::Ready(catalog) => f(catalog),
            CatalogLoad::Pending => f(&Catalog::default()),
        })
    }

    pub fn tools_for(&self, key: &str) -> Vec<Tool> {
        self.with_catalog(|c| c.tools_for_key(key).to_vec())
    }

    pub fn services(&self) -> Vec<Service> {
        self.with_catalog(|c| c.services().to_vec())
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.with_catalog(|c| c.jobs().to_vec())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore not provided in context")
}

/// Resolves a load result to a usable catalog.
pub fn catalog_or_empty(result: Result<Catalog, CatalogError>) -> Catalog {
    match result {
        Ok(catalog) => {
            let summary = catalog.summary();
            log::info!(
                "catalog loaded: {} tools, {} services, {} jobs",
                summary.tools,
                summary.services,
                summary.jobs
            );
            catalog
        }
        Err(e) => {
            log::warn!("catalog unavailable, using empty catalog: {}", e);
            Catalog::default()
        }
    }
}

async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    Ok(Catalog::from_json(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_give_empty_catalog() {
        let failures = vec![
            CatalogError::Network("offline".into()),
            CatalogError::Status(404),
            CatalogError::Parse(Catalog::from_json("<html>").unwrap_err()),
        ];
        for failure in failures {
            let catalog = catalog_or_empty(Err(failure));
            assert!(catalog.tools_for_key("image").is_empty());
            assert!(catalog.tools_for_key("pdf").is_empty());
            assert!(catalog.tools_for_key("video").is_empty());
            assert!(catalog.services().is_empty());
            assert!(catalog.jobs().is_empty());
        }
    }

    #[test]
    fn test_success_passes_through() {
        let catalog = Catalog::from_json(
            r#"{"services": [{"name": "Voter", "icon": "", "service": "वोटर कार्ड"}]}"#,
        )
        .unwrap();
        let loaded = catalog_or_empty(Ok(catalog.clone()));
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CatalogError::Status(500).to_string(), "HTTP 500");
        assert_eq!(
            CatalogError::Network("timeout".into()).to_string(),
            "request failed: timeout"
        );
    }
}
