//! Core types shared by the interpreter, the filter layer and the catalog.

use crate::error::UnknownColor;
use serde::{Deserialize, Serialize};

/// A catalog document. Products and closet items are schemaless JSON objects,
/// mirroring what the document store holds.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Canonical color names. The set is closed; lexicon tables may only remap
/// the surface variants that resolve to each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Black,
    White,
    Grey,
    Yellow,
    Pink,
    Brown,
    Purple,
    Orange,
    Multi,
}

impl Color {
    /// Every canonical color in definition order.
    pub const ALL: [Color; 12] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Black,
        Color::White,
        Color::Grey,
        Color::Yellow,
        Color::Pink,
        Color::Brown,
        Color::Purple,
        Color::Orange,
        Color::Multi,
    ];

    /// The lower-case name used in queries and in the store's color fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Black => "black",
            Color::White => "white",
            Color::Grey => "grey",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Multi => "multi",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Field map
// ---------------------------------------------------------------------------

/// Dotted document paths the generated filters refer to.
///
/// Loaded from the `[fields]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_primary_color() -> String { "colors.primary".to_string() }
fn default_secondary_color() -> String { "colors.secondary".to_string() }
fn default_title() -> String { "product_name".to_string() }
fn default_category() -> String { "subcategory".to_string() }

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            title: default_title(),
            category: default_category(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
