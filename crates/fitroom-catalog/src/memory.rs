//! In-memory catalog backed by a `Vec` of documents.
//!
//! Documents keep insertion order, which is also the order `find` returns
//! them in. Every document gets a string `_id` on insert if it lacks one.

use crate::{Catalog, CatalogError};
use fitroom_core::{Document, FilterExpression};
use serde_json::Value;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    docs: RwLock<Vec<Document>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let docs = docs.into_iter().map(with_id).collect();
        Self { docs: RwLock::new(docs) }
    }

    /// Parse a JSON array of product objects.
    pub fn from_json_str(src: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(src)?;
        let Value::Array(items) = value else {
            return Err(CatalogError::NotAnArray);
        };
        let docs = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(doc) => Ok(doc),
                _ => Err(CatalogError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_documents(docs))
    }

    /// Read a catalog file (see [`MemoryCatalog::from_json_str`]).
    pub async fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let src = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&src)?;
        tracing::info!(path = %path.display(), products = catalog.len().await, "catalog loaded");
        Ok(catalog)
    }

    /// Insert a document and return its `_id`.
    pub async fn insert(&self, doc: Document) -> String {
        let doc = with_id(doc);
        let id = document_id(&doc).unwrap_or_default();
        self.docs.write().await.push(doc);
        id
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    async fn find(
        &self,
        filter: &FilterExpression,
        limit: usize,
    ) -> Result<Vec<Document>, CatalogError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|doc| filter.matches(doc))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Document>, CatalogError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .find(|doc| document_id(doc).as_deref() == Some(id))
            .cloned())
    }
}

/// The `_id` of a document as a string. Numeric ids are stringified.
pub fn document_id(doc: &Document) -> Option<String> {
    match doc.get("_id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn with_id(mut doc: Document) -> Document {
    if !doc.contains_key("_id") {
        doc.insert("_id".to_string(), Value::String(uuid::Uuid::new_v4().to_string()));
    }
    doc
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
