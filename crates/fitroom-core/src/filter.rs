//! Filter expressions handed from the interpreter to a catalog store.
//!
//! A [`FilterExpression`] is one of two shapes:
//!
//! - [`FilterExpression::All`]: a [`Conjunction`] of one or two clauses (a
//!   color clause and/or a category clause).
//! - [`FilterExpression::Fallback`]: a disjunctive full-text constraint used
//!   when the query matched no lexicon term.
//!
//! A conjunction can only be built from at least one clause, so an empty
//! always-true conjunction is unrepresentable.
//!
//! [`FilterExpression::to_document`] renders the store's query dialect and
//! [`FilterExpression::matches`] evaluates the same semantics in process.

use crate::types::{Color, Document};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

/// The color name must appear, case-insensitively, in any of `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorClause {
    pub color: Color,
    pub fields: Vec<String>,
}

/// `field` must equal the canonical category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryClause {
    pub category: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Color(ColorClause),
    Category(CategoryClause),
}

/// AND of one or two clauses. Color comes before category when both exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunction {
    clauses: Vec<Clause>,
}

impl Conjunction {
    /// Returns `None` when neither clause is present.
    pub fn new(color: Option<ColorClause>, category: Option<CategoryClause>) -> Option<Self> {
        let clauses: Vec<Clause> = color
            .map(Clause::Color)
            .into_iter()
            .chain(category.map(Clause::Category))
            .collect();
        if clauses.is_empty() {
            None
        } else {
            Some(Self { clauses })
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn color(&self) -> Option<&ColorClause> {
        self.clauses.iter().find_map(|c| match c {
            Clause::Color(clause) => Some(clause),
            Clause::Category(_) => None,
        })
    }

    pub fn category(&self) -> Option<&CategoryClause> {
        self.clauses.iter().find_map(|c| match c {
            Clause::Category(clause) => Some(clause),
            Clause::Color(_) => None,
        })
    }
}

/// The whole normalized query must appear, case-insensitively, in any of
/// `fields`. An empty `text` matches every document that has one of the
/// fields as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub text: String,
    pub fields: Vec<String>,
}

// ---------------------------------------------------------------------------
// FilterExpression
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpression {
    All(Conjunction),
    Fallback(Fallback),
}

impl FilterExpression {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FilterExpression::Fallback(_))
    }

    /// The conjunction, if this is not the fallback form.
    pub fn conjunction(&self) -> Option<&Conjunction> {
        match self {
            FilterExpression::All(c) => Some(c),
            FilterExpression::Fallback(_) => None,
        }
    }

    /// Render as a document-store query.
    ///
    /// ```text
    /// {"$and": [{"$or": [{"colors.primary": {"$options": "i", "$regex": "blue"}}, …]},
    ///           {"subcategory": "Shirts"}]}
    /// {"$or":  [{"product_name": {"$options": "i", "$regex": "xyz"}}, …]}
    /// ```
    ///
    /// Patterns are regex-escaped so the store performs a literal substring
    /// match even when the query contains metacharacters.
    pub fn to_document(&self) -> Value {
        match self {
            FilterExpression::All(conj) => {
                let clauses: Vec<Value> = conj
                    .clauses()
                    .iter()
                    .map(|clause| match clause {
                        Clause::Color(c) => any_contains(&c.fields, c.color.as_str()),
                        Clause::Category(c) => field_value(&c.field, json!(c.category)),
                    })
                    .collect();
                json!({ "$and": clauses })
            }
            FilterExpression::Fallback(f) => any_contains(&f.fields, &f.text),
        }
    }

    /// Evaluate against a JSON document with the store's matching rules.
    ///
    /// Dotted paths walk nested objects. A substring test matches a string
    /// value, or any string element of an array, ignoring case. An equality
    /// test matches an equal string or an array containing one. Missing
    /// fields never match.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            FilterExpression::All(conj) => conj.clauses().iter().all(|clause| match clause {
                Clause::Color(c) => c
                    .fields
                    .iter()
                    .any(|f| contains_ignore_case(lookup(doc, f), c.color.as_str())),
                Clause::Category(c) => equals(lookup(doc, &c.field), &c.category),
            }),
            FilterExpression::Fallback(f) => f
                .fields
                .iter()
                .any(|field| contains_ignore_case(lookup(doc, field), &f.text)),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

fn field_value(field: &str, value: Value) -> Value {
    let mut m = Map::new();
    m.insert(field.to_string(), value);
    Value::Object(m)
}

fn any_contains(fields: &[String], pattern: &str) -> Value {
    let escaped = regex::escape(pattern);
    let alternatives: Vec<Value> = fields
        .iter()
        .map(|f| field_value(f, json!({ "$options": "i", "$regex": escaped.as_str() })))
        .collect();
    json!({ "$or": alternatives })
}

// ---------------------------------------------------------------------------
// Evaluation helpers
// ---------------------------------------------------------------------------

/// Resolve a dotted path (`colors.primary`) through nested objects.
pub fn lookup<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut keys = path.split('.');
    let root = doc.get(keys.next()?)?;
    keys.try_fold(root, |value, key| value.get(key))
}

fn contains_ignore_case(value: Option<&Value>, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    match value {
        Some(Value::String(s)) => s.to_lowercase().contains(&needle),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|s| s.to_lowercase().contains(&needle)),
        _ => false,
    }
}

fn equals(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(expected)),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
