//! Closet: the collection of items a shopper has saved.
//!
//! Items are schemaless documents with two bookkeeping fields pulled out:
//! `closet_item_id` and `created_at`. Ownership is read from
//! `closet_metadata.user_id`, falling back to a top-level `user_id`, since
//! both shapes occur in stored items.

use crate::search::ProductSummary;
use crate::{Catalog, ClosetError};
use chrono::{DateTime, Utc};
use fitroom_core::config::Config;
use fitroom_core::filter::lookup;
use fitroom_core::Document;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosetItem {
    pub closet_item_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub document: Document,
}

impl ClosetItem {
    /// Split the bookkeeping fields out of `document`, generating any that
    /// are missing or unusable.
    fn from_document(mut document: Document) -> Self {
        let closet_item_id = match document.remove("closet_item_id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => uuid::Uuid::new_v4().to_string(),
        };
        let created_at = document
            .remove("created_at")
            .and_then(|v| v.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok()))
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);
        Self { closet_item_id, created_at, document }
    }

    /// The `type` field (`saved_product`, `generated_photo`, …).
    pub fn item_type(&self) -> Option<&str> {
        self.document.get("type").and_then(Value::as_str)
    }

    pub fn owner(&self) -> Option<&str> {
        lookup(&self.document, "closet_metadata.user_id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| self.document.get("user_id").and_then(Value::as_str))
            .filter(|s| !s.is_empty())
    }

    pub fn summary(&self) -> ProductSummary {
        ProductSummary::from_document(&self.document)
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClearReport {
    pub initial_count: usize,
    pub deleted_count: usize,
    pub final_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosetSummary {
    pub total_items: usize,
    pub type_counts: BTreeMap<String, usize>,
    pub user_counts: BTreeMap<String, usize>,
    /// Titles of the most recently created items, newest first.
    pub recent: Vec<String>,
}

// ---------------------------------------------------------------------------
// Closet
// ---------------------------------------------------------------------------

pub struct Closet<C> {
    catalog: Arc<C>,
    items: RwLock<Vec<ClosetItem>>,
    recent_count: usize,
}

impl<C: Catalog> Closet<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            items: RwLock::new(Vec::new()),
            recent_count: 3,
        }
    }

    /// Build from the `[closet]` section.
    pub fn from_config(catalog: Arc<C>, config: &Config) -> Self {
        Self::new(catalog).with_recent_count(config.closet.recent_count)
    }

    pub fn with_recent_count(mut self, count: usize) -> Self {
        self.recent_count = count;
        self
    }

    /// Store `document` and return its `closet_item_id`.
    pub async fn add(&self, document: Document) -> String {
        let item = ClosetItem::from_document(document);
        let id = item.closet_item_id.clone();
        let mut items = self.items.write().await;
        items.push(item);
        tracing::info!(closet_item_id = %id, total = items.len(), "item added to closet");
        id
    }

    /// Copy a catalog product into the closet. The product's `_id` is kept
    /// as `product_id`.
    pub async fn add_product(&self, product_id: &str) -> Result<String, ClosetError> {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Err(ClosetError::EmptyProductId);
        }
        let Some(mut document) = self.catalog.get(product_id).await? else {
            tracing::warn!(product_id, "product not found for closet");
            return Err(ClosetError::ProductNotFound(product_id.to_string()));
        };
        document.remove("_id");
        document.insert("product_id".to_string(), Value::String(product_id.to_string()));
        document
            .entry("type")
            .or_insert_with(|| Value::String("saved_product".to_string()));
        Ok(self.add(document).await)
    }

    /// Items in insertion order, optionally only those owned by `user_id`
    /// and at most `limit` of them.
    pub async fn items(&self, user_id: Option<&str>, limit: Option<usize>) -> Vec<ClosetItem> {
        let items = self.items.read().await;
        let selected: Vec<ClosetItem> = items
            .iter()
            .filter(|item| user_id.is_none_or(|user| item.owner() == Some(user)))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        tracing::debug!(?user_id, ?limit, count = selected.len(), "closet items listed");
        selected
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn clear(&self) -> ClearReport {
        let mut items = self.items.write().await;
        let initial_count = items.len();
        items.clear();
        let report = ClearReport {
            initial_count,
            deleted_count: initial_count,
            final_count: items.len(),
        };
        tracing::info!(deleted = report.deleted_count, "closet cleared");
        report
    }

    pub async fn summary(&self) -> ClosetSummary {
        let items = self.items.read().await;

        let mut type_counts = BTreeMap::new();
        let mut user_counts = BTreeMap::new();
        for item in items.iter() {
            if let Some(kind) = item.item_type() {
                *type_counts.entry(kind.to_string()).or_insert(0) += 1;
            }
            if let Some(owner) = item.owner() {
                *user_counts.entry(owner.to_string()).or_insert(0) += 1;
            }
        }

        let mut by_age: Vec<&ClosetItem> = items.iter().collect();
        by_age.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent = by_age
            .into_iter()
            .take(self.recent_count)
            .map(|item| item.summary().product_title)
            .collect();

        ClosetSummary {
            total_items: items.len(),
            type_counts,
            user_counts,
            recent,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
