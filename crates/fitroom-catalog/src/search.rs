//! Product search: the request path behind the search endpoint.
//!
//! ```text
//! raw query ──► reject blank ──► interpret ──► Catalog::find(limit) ──► ProductSummary
//! ```
//!
//! Blank input is rejected here rather than in the interpreter, which would
//! otherwise produce a match-everything fallback filter.

use crate::{Catalog, SearchError};
use fitroom_core::config::Config;
use fitroom_core::filter::lookup;
use fitroom_core::{Color, Document, LexiconError, QueryInterpreter};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A catalog document reduced to the fields a client displays.
///
/// Each field falls back through the names older documents used, ending in
/// `"N/A"` (or an empty string for URLs).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub product_title: String,
    pub product_url: String,
    pub product_price: Value,
    pub product_color: String,
    pub product_size: String,
    pub product_category: String,
    pub image_url: String,
}

impl ProductSummary {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: first_text(doc, &["_id"]).unwrap_or_default(),
            product_title: first_text(doc, &["product_title", "product_name", "title"])
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            product_url: first_text(doc, &["product_url"]).unwrap_or_default(),
            product_price: first_present(doc, &["product_price", "metadata.price"])
                .cloned()
                .unwrap_or_else(|| Value::String(NOT_AVAILABLE.to_string())),
            product_color: first_text(doc, &["product_color", "colors.primary"])
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            product_size: first_text(doc, &["product_size"])
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            product_category: first_text(doc, &["product_category", "category", "subcategory"])
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            image_url: first_text(doc, &["image_url", "urls.image"]).unwrap_or_default(),
        }
    }
}

/// Result of one search, with the interpreter's diagnostics attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub color: Option<Color>,
    pub category: Option<String>,
    pub total_results: usize,
    pub products: Vec<ProductSummary>,
}

// ---------------------------------------------------------------------------
// ProductSearch
// ---------------------------------------------------------------------------

pub struct ProductSearch<C> {
    catalog: Arc<C>,
    interpreter: QueryInterpreter,
    limit: usize,
    summary_count: usize,
}

impl<C: Catalog> ProductSearch<C> {
    /// A search over `catalog` with the default limit of 10 results.
    pub fn new(catalog: Arc<C>, interpreter: QueryInterpreter) -> Self {
        Self {
            catalog,
            interpreter,
            limit: 10,
            summary_count: 5,
        }
    }

    /// Build from the `[search]`, `[fields]` and `[lexicon]` sections.
    pub fn from_config(catalog: Arc<C>, config: &Config) -> Result<Self, LexiconError> {
        Ok(Self::new(catalog, config.interpreter()?)
            .with_limit(config.search.result_limit)
            .with_summary_count(config.search.summary_count))
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_summary_count(mut self, count: usize) -> Self {
        self.summary_count = count;
        self
    }

    pub fn interpreter(&self) -> &QueryInterpreter {
        &self.interpreter
    }

    pub async fn search(&self, raw_query: &str) -> Result<SearchOutcome, SearchError> {
        tracing::info!(query = raw_query, "product search request");

        let query = raw_query.trim();
        if query.is_empty() {
            tracing::warn!("empty or blank query rejected");
            return Err(SearchError::EmptyQuery);
        }

        let interpretation = self.interpreter.interpret(query);
        tracing::info!(
            color = ?interpretation.color,
            category = ?interpretation.category,
            fallback = interpretation.filter.is_fallback(),
            "query interpreted"
        );

        let docs = self.catalog.find(&interpretation.filter, self.limit).await?;
        let products: Vec<ProductSummary> = docs.iter().map(ProductSummary::from_document).collect();
        tracing::info!(count = products.len(), "products matched");

        for (rank, product) in products.iter().take(self.summary_count).enumerate() {
            tracing::debug!(
                rank = rank + 1,
                title = %product.product_title,
                color = %product.product_color,
                price = %product.product_price,
                "match"
            );
        }
        if products.len() > self.summary_count {
            tracing::debug!(more = products.len() - self.summary_count, "further matches not logged");
        }

        Ok(SearchOutcome {
            query: query.to_string(),
            color: interpretation.color,
            category: interpretation.category,
            total_results: products.len(),
            products,
        })
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// First path whose value is present, non-null and not an empty string.
fn first_present<'a>(doc: &'a Document, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| match lookup(doc, path)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(value),
    })
}

/// Like [`first_present`], rendered as text. Numbers and booleans are
/// stringified; arrays and objects are skipped.
fn first_text(doc: &Document, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| match lookup(doc, path)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCatalog;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("test document must be an object: {other}"),
        }
    }

    #[test]
    fn summary_uses_current_schema_fields() {
        let summary = ProductSummary::from_document(&doc(json!({
            "_id": "p-1",
            "product_title": "Linen Shirt",
            "product_url": "https://shop.example/linen",
            "product_price": 39.5,
            "product_color": "white",
            "product_size": "M",
            "product_category": "Shirts",
            "image_url": "https://cdn.example/linen.png",
        })));
        assert_eq!(summary.id, "p-1");
        assert_eq!(summary.product_title, "Linen Shirt");
        assert_eq!(summary.product_price, json!(39.5));
        assert_eq!(summary.product_size, "M");
    }

    #[test]
    fn summary_falls_back_to_legacy_fields() {
        let summary = ProductSummary::from_document(&doc(json!({
            "product_title": "",
            "product_name": "Cherry Polo",
            "metadata": {"price": "24.00"},
            "colors": {"primary": "red"},
            "category": "T-shirts & Polos",
            "urls": {"image": "https://cdn.example/polo.png"},
        })));
        assert_eq!(summary.id, "");
        assert_eq!(summary.product_title, "Cherry Polo");
        assert_eq!(summary.product_price, json!("24.00"));
        assert_eq!(summary.product_color, "red");
        assert_eq!(summary.product_category, "T-shirts & Polos");
        assert_eq!(summary.image_url, "https://cdn.example/polo.png");
        assert_eq!(summary.product_size, "N/A");
        assert_eq!(summary.product_url, "");
    }

    #[tokio::test]
    async fn blank_query_is_rejected() {
        let search = ProductSearch::new(Arc::new(MemoryCatalog::new()), QueryInterpreter::builtin());
        assert!(matches!(search.search("   ").await, Err(SearchError::EmptyQuery)));
        assert!(matches!(search.search("").await, Err(SearchError::EmptyQuery)));
    }

    #[tokio::test]
    async fn search_reports_detections_and_caps_results() {
        let catalog = MemoryCatalog::with_documents((0..15).map(|i| {
            doc(json!({
                "product_name": format!("Blue Oxford {i}"),
                "subcategory": "Shirts",
            }))
        }));
        let search = ProductSearch::new(Arc::new(catalog), QueryInterpreter::builtin());
        let outcome = search.search("  Blue Shirts ").await.unwrap();
        assert_eq!(outcome.query, "Blue Shirts");
        assert_eq!(outcome.color, Some(Color::Blue));
        assert_eq!(outcome.category.as_deref(), Some("Shirts"));
        assert_eq!(outcome.total_results, 10);
        assert_eq!(outcome.products[0].product_title, "Blue Oxford 0");
    }

    #[tokio::test]
    async fn config_limit_applies() {
        let config = Config::from_toml_str("[search]\nresult_limit = 2").unwrap();
        let catalog = MemoryCatalog::with_documents(
            (0..5).map(|i| doc(json!({"product_name": format!("Item {i}"), "subcategory": "Jeans"}))),
        );
        let search = ProductSearch::from_config(Arc::new(catalog), &config).unwrap();
        let outcome = search.search("jeans").await.unwrap();
        assert_eq!(outcome.total_results, 2);
    }
}
