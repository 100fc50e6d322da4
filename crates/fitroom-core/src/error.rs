//! Error types for fitroom-core.

use crate::types::Color;
use thiserror::Error;

/// A string that does not name one of the canonical colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color {0:?}")]
pub struct UnknownColor(pub String);

/// Reasons a lexicon table is rejected at construction time.
///
/// The built-in tables always pass; these only fire for tables supplied
/// through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),

    #[error("color {0} is listed more than once")]
    DuplicateColor(Color),

    /// A blank variant is a substring of every query.
    #[error("color {color} has a blank variant")]
    BlankVariant { color: Color },

    #[error("category table contains a blank keyword")]
    BlankKeyword,

    #[error("keyword {keyword:?} maps to a blank category")]
    BlankCategory { keyword: String },
}
