//! Catalog loading.
//!
//! The catalog is a static, read-only JSON array of prints, loaded once
//! at startup. Unlike the cart slot, a catalog that fails to load is a
//! fatal startup error - the storefront has nothing to sell without it.

use std::path::{Path, PathBuf};

use backyard_birds_core::Catalog;
use thiserror::Error;

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the catalog from `<content_dir>/catalog.json`.
///
/// # Errors
///
/// Returns `CatalogError` if the file is missing or unparsable.
pub fn load(content_dir: &Path) -> Result<Catalog, CatalogError> {
    let path = content_dir.join("catalog.json");

    let bytes = std::fs::read(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;

    let catalog: Catalog =
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: path.clone(),
            source,
        })?;

    tracing::info!("Loaded {} prints from {:?}", catalog.len(), path);
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use backyard_birds_core::PrintId;

    use super::*;

    #[test]
    fn test_load_parses_catalog_array() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"[
                {"id": 1, "title": "Tui at Dawn", "price": "12.50",
                 "category": "native", "imageRef": "/static/images/prints/tui.jpg"},
                {"id": 2, "title": "Eastern Rosella", "price": "9.50",
                 "category": "exotic", "imageRef": "/static/images/prints/rosella.jpg"}
            ]"#,
        )
        .unwrap();

        let catalog = load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(PrintId::new(2)).is_some());
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path()), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("catalog.json"), b"[{").unwrap();
        assert!(matches!(load(dir.path()), Err(CatalogError::Parse { .. })));
    }
}
