//! Error types for fitroom-catalog.

use thiserror::Error;

/// Failures reaching or reading the catalog store.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog files hold a single JSON array of product objects.
    #[error("catalog file must contain a JSON array of objects")]
    NotAnArray,

    #[error("catalog entry {index} is not a JSON object")]
    NotAnObject { index: usize },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("query is required and cannot be empty")]
    EmptyQuery,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Error, Debug)]
pub enum ClosetError {
    #[error("product id is required")]
    EmptyProductId,

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
