//! Subcommand bodies. Each prints one JSON document to stdout.

use fitroom_catalog::{MemoryCatalog, ProductSearch};
use fitroom_core::config::Config;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

pub fn interpret(config: &Config, query: &str) -> anyhow::Result<()> {
    let interpretation = config.interpreter()?.interpret(query);
    tracing::debug!(query, normalized = %interpretation.normalized, "interpret");
    print_json(&json!({
        "query": interpretation.normalized,
        "color": interpretation.color,
        "category": interpretation.category,
        "fallback": interpretation.filter.is_fallback(),
        "filter": interpretation.filter.to_document(),
    }))
}

pub async fn search(config: &Config, query: &str, catalog: &Path) -> anyhow::Result<()> {
    let catalog = Arc::new(MemoryCatalog::load_json(catalog).await?);
    let search = ProductSearch::from_config(catalog, config)?;
    let outcome = search.search(query).await?;
    print_json(&outcome)
}

pub fn lexicon(config: &Config) -> anyhow::Result<()> {
    let lexicon = config.lexicon()?;
    let colors: Vec<_> = lexicon
        .colors()
        .iter()
        .map(|e| json!({ "name": e.color, "variants": e.variants }))
        .collect();
    let categories: Vec<_> = lexicon
        .categories()
        .iter()
        .map(|e| json!({ "keyword": e.keyword, "category": e.category }))
        .collect();
    print_json(&json!({ "colors": colors, "categories": categories }))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
