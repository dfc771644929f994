//! Loads the product catalog from the JSON file exported by the scraping scripts.

use std::path::Path;

use camisa_core::{Catalog, Product};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(String),
}

#[tracing::instrument(name = "load_catalog", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse_catalog(&raw)?;
    tracing::info!(products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogLoadError> {
    let products: Vec<Product> = serde_json::from_str(raw)?;

    let mut ids = std::collections::HashSet::new();
    for product in &products {
        if !ids.insert(product.id.as_str()) {
            return Err(CatalogLoadError::DuplicateId(product.id.clone()));
        }
    }

    Ok(Catalog::new(products))
}
