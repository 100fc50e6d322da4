//! Query interpreter: free text to [`FilterExpression`].
//!
//! Interpretation is deterministic and total:
//!
//! 1. Normalize: lower-case, then trim. No tokenization.
//! 2. Detect a color: the first canonical color whose variants include a
//!    substring of the normalized query.
//! 3. Detect a category: the first keyword that is a substring of it.
//! 4. Build a conjunction of whichever clauses were detected, or the
//!    disjunctive fallback over the full normalized query when neither was.
//!
//! The two detections are independent; a color variant and a category
//! keyword may overlap in the query text.

use crate::filter::{CategoryClause, ColorClause, Conjunction, Fallback, FilterExpression};
use crate::lexicon::Lexicon;
use crate::types::{Color, FieldMap};
use std::sync::LazyLock;

static BUILTIN: LazyLock<QueryInterpreter> = LazyLock::new(QueryInterpreter::builtin);

/// Interpret `query` with the built-in lexicon and default field map.
pub fn interpret(query: &str) -> Interpretation {
    BUILTIN.interpret(query)
}

/// Lower-case and trim.
pub fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Result of one interpretation. `color` and `category` are diagnostics for
/// logging; the filter already encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub normalized: String,
    pub color: Option<Color>,
    pub category: Option<String>,
    pub filter: FilterExpression,
}

#[derive(Debug, Clone, Default)]
pub struct QueryInterpreter {
    lexicon: Lexicon,
    fields: FieldMap,
}

impl QueryInterpreter {
    pub fn new(lexicon: Lexicon, fields: FieldMap) -> Self {
        Self { lexicon, fields }
    }

    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin(), FieldMap::default())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn interpret(&self, query: &str) -> Interpretation {
        let normalized = normalize(query);
        let color = self.lexicon.detect_color(&normalized);
        let category = self.lexicon.detect_category(&normalized).map(str::to_string);

        let color_clause = color.map(|color| ColorClause {
            color,
            fields: vec![
                self.fields.primary_color.clone(),
                self.fields.secondary_color.clone(),
                self.fields.title.clone(),
            ],
        });
        let category_clause = category.as_ref().map(|label| CategoryClause {
            category: label.clone(),
            field: self.fields.category.clone(),
        });

        let filter = match Conjunction::new(color_clause, category_clause) {
            Some(conj) => FilterExpression::All(conj),
            None => FilterExpression::Fallback(Fallback {
                text: normalized.clone(),
                fields: vec![
                    self.fields.title.clone(),
                    self.fields.primary_color.clone(),
                    self.fields.category.clone(),
                ],
            }),
        };

        Interpretation { normalized, color, category, filter }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
