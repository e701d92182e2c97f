//! Startup sanity check of the catalog file.
//!
//! The browser falls back to an empty catalog on its own, so a missing or
//! broken file is only reported here, never fatal.

use crate::shared::error::HostError;
use contracts::shared::catalog::{Catalog, CatalogSummary};
use std::path::Path;

pub fn check_catalog_text(text: &str) -> Result<CatalogSummary, HostError> {
    Ok(Catalog::from_json(text)?.summary())
}

pub fn check_catalog_file(path: &Path) -> Result<CatalogSummary, HostError> {
    let text = std::fs::read_to_string(path).map_err(|source| HostError::Read {
        path: path.display().to_string(),
        source,
    })?;
    check_catalog_text(&text)
}

/// Logs the outcome of [`check_catalog_file`].
pub fn report_catalog(path: &Path) {
    match check_catalog_file(path) {
        Ok(summary) => tracing::info!(
            "catalog {}: {} tools, {} services, {} jobs",
            path.display(),
            summary.tools,
            summary.services,
            summary.jobs
        ),
        Err(e) => tracing::warn!("catalog check failed, browser will show an empty catalog: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_catalog_summary() {
        let summary = check_catalog_text(
            r#"{
                "image": [{"name": "Crop", "icon": "fas fa-crop", "url": "https://t.test/crop"}],
                "video": [{"name": "Soon", "icon": ""}],
                "jobs": [{"name": "SSC", "icon": "", "url": "https://j.test", "position": "middle"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            summary,
            CatalogSummary {
                tools: 2,
                services: 0,
                jobs: 1
            }
        );
    }

    #[test]
    fn test_malformed_catalog_reported() {
        assert!(matches!(check_catalog_text("[]"), Err(HostError::Catalog(_))));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = check_catalog_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, HostError::Read { .. }));
        assert!(err.to_string().contains("here.json"));
    }
}
