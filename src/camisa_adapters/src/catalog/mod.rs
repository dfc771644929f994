pub mod json_catalog;

pub use json_catalog::{CatalogLoadError, load_catalog, parse_catalog};
