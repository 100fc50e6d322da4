//! Keyword lexicons: the two ordered tables the interpreter walks.
//!
//! The built-in tables are compile-time [`phf::OrderedMap`]s. Iteration order
//! is definition order, and definition order is the tie-break: the first color
//! with a matching variant wins, and the first category keyword contained in
//! the query wins. Keywords that contain other keywords ("t-shirt" contains
//! "shirt") must therefore be listed before them. "polo" follows "shirt", so
//! "polo shirt" is a shirt.
//!
//! Matching is plain substring containment on the normalized query, so
//! "reddish" resolves to red and "cherry" anywhere in a query does too. That
//! is a known precision limitation, not something this module guards against.

use crate::config::LexiconConfig;
use crate::error::LexiconError;
use crate::types::Color;
use phf::phf_ordered_map;

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// Canonical color → surface variants, in tie-break order.
pub static COLOR_VARIANTS: phf::OrderedMap<&'static str, &'static [&'static str]> = phf_ordered_map! {
    "blue" => &["blue", "navy", "dark blue", "light blue"],
    "red" => &["red", "maroon", "crimson", "cherry"],
    "green" => &["green", "olive", "forest green", "lime"],
    "black" => &["black", "dark"],
    "white" => &["white", "cream", "off-white"],
    "grey" => &["grey", "gray", "charcoal"],
    "yellow" => &["yellow", "golden"],
    "pink" => &["pink", "rose"],
    "brown" => &["brown", "tan", "beige"],
    "purple" => &["purple", "violet"],
    "orange" => &["orange"],
    "multi" => &["multi", "multicolor", "printed", "pattern"],
};

/// Surface keyword → canonical category label, in tie-break order.
pub static CATEGORY_KEYWORDS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "t-shirt" => "T-shirts & Polos",
    "tshirt" => "T-shirts & Polos",
    "t-shirts" => "T-shirts & Polos",
    "tshirts" => "T-shirts & Polos",
    "shirt" => "Shirts",
    "shirts" => "Shirts",
    "polo" => "T-shirts & Polos",
    "polos" => "T-shirts & Polos",
    "jeans" => "Jeans",
    "pants" => "Trousers & Chinos",
    "trousers" => "Trousers & Chinos",
    "chinos" => "Trousers & Chinos",
    "shorts" => "Shorts",
    "jacket" => "Jackets & Coats",
    "jackets" => "Jackets & Coats",
    "sweater" => "Sweaters",
    "sweaters" => "Sweaters",
    "hoodie" => "Hoodies & Sweatshirts",
    "hoodies" => "Hoodies & Sweatshirts",
};

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// One row of the color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub color: Color,
    pub variants: Vec<String>,
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub keyword: String,
    pub category: String,
}

/// A validated pair of ordered tables.
///
/// Construct with [`Lexicon::builtin`] or [`Lexicon::from_config`]. Once
/// built a lexicon is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    colors: Vec<ColorEntry>,
    categories: Vec<CategoryEntry>,
}

impl Lexicon {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            colors: builtin_colors(),
            categories: builtin_categories(),
        }
    }

    /// Validate and build a lexicon from explicit tables.
    ///
    /// Variants and keywords are lower-cased, since queries are normalized to
    /// lower case before matching and an upper-case variant could never hit.
    pub fn new(
        colors: Vec<ColorEntry>,
        categories: Vec<CategoryEntry>,
    ) -> Result<Self, LexiconError> {
        let mut seen = Vec::with_capacity(colors.len());
        let colors = colors
            .into_iter()
            .map(|entry| {
                if seen.contains(&entry.color) {
                    return Err(LexiconError::DuplicateColor(entry.color));
                }
                seen.push(entry.color);
                if entry.variants.iter().any(|v| v.trim().is_empty()) {
                    return Err(LexiconError::BlankVariant { color: entry.color });
                }
                Ok(ColorEntry {
                    color: entry.color,
                    variants: entry.variants.iter().map(|v| v.to_lowercase()).collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let categories = categories
            .into_iter()
            .map(|entry| {
                if entry.keyword.trim().is_empty() {
                    return Err(LexiconError::BlankKeyword);
                }
                if entry.category.trim().is_empty() {
                    return Err(LexiconError::BlankCategory { keyword: entry.keyword });
                }
                Ok(CategoryEntry {
                    keyword: entry.keyword.to_lowercase(),
                    category: entry.category,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { colors, categories })
    }

    /// Build from the `[lexicon]` config section. A table that is not given
    /// falls back to the built-in one.
    pub fn from_config(cfg: &LexiconConfig) -> Result<Self, LexiconError> {
        let colors = match &cfg.colors {
            Some(rows) => rows
                .iter()
                .map(|row| -> Result<ColorEntry, LexiconError> {
                    Ok(ColorEntry {
                        color: row.name.parse()?,
                        variants: row.variants.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => builtin_colors(),
        };
        let categories = match &cfg.categories {
            Some(rows) => rows
                .iter()
                .map(|row| CategoryEntry {
                    keyword: row.keyword.clone(),
                    category: row.category.clone(),
                })
                .collect(),
            None => builtin_categories(),
        };
        Self::new(colors, categories)
    }

    pub fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// First color, in table order, with any variant contained in `normalized`.
    pub fn detect_color(&self, normalized: &str) -> Option<Color> {
        self.colors
            .iter()
            .find(|entry| entry.variants.iter().any(|v| normalized.contains(v.as_str())))
            .map(|entry| entry.color)
    }

    /// Category label of the first keyword, in table order, contained in
    /// `normalized`.
    pub fn detect_category(&self, normalized: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|entry| normalized.contains(entry.keyword.as_str()))
            .map(|entry| entry.category.as_str())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_colors() -> Vec<ColorEntry> {
    COLOR_VARIANTS
        .entries()
        .filter_map(|(name, variants)| {
            let color = name.parse::<Color>().ok()?;
            Some(ColorEntry {
                color,
                variants: variants.iter().map(|v| v.to_string()).collect(),
            })
        })
        .collect()
}

fn builtin_categories() -> Vec<CategoryEntry> {
    CATEGORY_KEYWORDS
        .entries()
        .map(|(keyword, category)| CategoryEntry {
            keyword: keyword.to_string(),
            category: category.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
