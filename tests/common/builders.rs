//! Test builders: ergonomic constructors for catalog and closet documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fitroom_core::Document;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// ProductBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for product documents in the catalog schema.
///
/// # Example
///
/// ```rust
/// let shirt = ProductBuilder::new("Classic Oxford Shirt")
///     .id("p-01")
///     .primary_color("blue")
///     .subcategory("Shirts")
///     .price(45)
///     .build();
/// ```
pub struct ProductBuilder {
    doc: Document,
}

impl ProductBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut doc = Document::new();
        doc.insert("product_name".into(), Value::String(name.into()));
        Self { doc }
    }

    pub fn id(self, id: &str) -> Self {
        self.field("_id", id)
    }

    pub fn primary_color(mut self, color: &str) -> Self {
        self.colors().insert("primary".into(), json!(color));
        self
    }

    pub fn secondary_color(mut self, color: &str) -> Self {
        self.colors().insert("secondary".into(), json!(color));
        self
    }

    pub fn subcategory(self, subcategory: &str) -> Self {
        self.field("subcategory", subcategory)
    }

    pub fn price(mut self, price: impl Into<Value>) -> Self {
        let metadata = self
            .doc
            .entry("metadata")
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .expect("metadata must be an object");
        metadata.insert("price".into(), price.into());
        self
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.doc.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }

    fn colors(&mut self) -> &mut Document {
        self.doc
            .entry("colors")
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .expect("colors must be an object")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a product with a primary color and subcategory.
pub fn product(name: &str, color: &str, subcategory: &str) -> Document {
    ProductBuilder::new(name)
        .primary_color(color)
        .subcategory(subcategory)
        .build()
}

/// Turn a `json!` object literal into a [`Document`].
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("test document must be an object: {other}"),
    }
}

/// `n` blue shirts named "Blue Shirt 0" … "Blue Shirt n-1".
pub fn blue_shirts(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| product(&format!("Blue Shirt {i}"), "blue", "Shirts"))
        .collect()
}
