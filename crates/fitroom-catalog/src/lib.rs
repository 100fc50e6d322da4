//! fitroom-catalog: the document-store side of fitroom.
//!
//! The interpreter in `fitroom-core` produces a [`FilterExpression`]; this
//! crate executes it. The store is reached through the [`Catalog`] trait and
//! handed to the services that need it, never held as ambient global state.
//!
//! - [`MemoryCatalog`]: in-process document store with the same matching
//!   rules as the production store.
//! - [`ProductSearch`]: validate → interpret → find → summarize.
//! - [`Closet`]: the saved-items collection.

pub mod closet;
pub mod error;
pub mod memory;
pub mod search;

pub use closet::{ClearReport, Closet, ClosetItem, ClosetSummary};
pub use error::{CatalogError, ClosetError, SearchError};
pub use memory::MemoryCatalog;
pub use search::{ProductSearch, ProductSummary, SearchOutcome};

use fitroom_core::{Document, FilterExpression};
use std::future::Future;

/// Read access to a product catalog.
///
/// Result order is store-defined; callers must not rely on it.
pub trait Catalog: Send + Sync {
    /// Up to `limit` documents matching `filter`.
    fn find(
        &self,
        filter: &FilterExpression,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Document>, CatalogError>> + Send;

    /// The document whose `_id` equals `id`.
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Document>, CatalogError>> + Send;
}
