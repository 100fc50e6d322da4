//! fitroom-core: query interpretation for the fitroom product catalog.
//!
//! This crate turns free-text shopper queries ("blue shirts", "red t-shirts")
//! into structured catalog filters. It owns the two static keyword tables, the
//! interpreter that walks them, and the filter types handed to a catalog store.
//!
//! # Pipeline
//!
//! ```text
//! query ──► normalize ──► detect color ──┐
//!                    └──► detect category ┴──► FilterExpression ──► Catalog
//! ```
//!
//! Nothing in here performs I/O except [`config::Config::load`]. The
//! interpreter is a pure function over immutable lexicons and may be shared
//! freely across threads.

pub mod config;
pub mod error;
pub mod filter;
pub mod interpreter;
pub mod lexicon;
pub mod types;

pub use error::{LexiconError, UnknownColor};
pub use filter::{CategoryClause, Clause, ColorClause, Conjunction, Fallback, FilterExpression};
pub use interpreter::{interpret, normalize, Interpretation, QueryInterpreter};
pub use lexicon::Lexicon;
pub use types::{Color, Document, FieldMap};
