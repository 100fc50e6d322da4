//! Domain-specific assertion macros for fitroom harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! interpretation rule was violated and for *which* query.

// ---------------------------------------------------------------------------
// Interpretation shape
// ---------------------------------------------------------------------------

/// Assert that an interpretation is a conjunction with exactly the given
/// color and category clauses (`None` meaning the clause is absent).
///
/// ```rust
/// assert_conjunction!(interpret("blue shirts"), Some(Color::Blue), Some("Shirts"));
/// ```
#[macro_export]
macro_rules! assert_conjunction {
    ($interp:expr, $color:expr, $category:expr) => {{
        let interp: &fitroom_core::Interpretation = &$interp;
        let color: Option<fitroom_core::Color> = $color;
        let category: Option<&str> = $category;
        let Some(conj) = interp.filter.conjunction() else {
            panic!(
                "assert_conjunction! failed: {:?} produced the fallback filter",
                interp.normalized
            );
        };
        let expected_len = color.is_some() as usize + category.is_some() as usize;
        if conj.clauses().len() != expected_len {
            panic!(
                "assert_conjunction! failed for {:?}:\n  expected {} clause(s)\n  actual:   {:?}",
                interp.normalized,
                expected_len,
                conj.clauses()
            );
        }
        if conj.color().map(|c| c.color) != color || interp.color != color {
            panic!(
                "assert_conjunction! failed for {:?}:\n  expected color: {:?}\n  clause: {:?}\n  detected: {:?}",
                interp.normalized,
                color,
                conj.color(),
                interp.color
            );
        }
        if conj.category().map(|c| c.category.as_str()) != category
            || interp.category.as_deref() != category
        {
            panic!(
                "assert_conjunction! failed for {:?}:\n  expected category: {:?}\n  clause: {:?}\n  detected: {:?}",
                interp.normalized,
                category,
                conj.category(),
                interp.category
            );
        }
    }};
}

/// Assert that an interpretation took the fallback path over `text`, with
/// no color or category detected.
#[macro_export]
macro_rules! assert_fallback {
    ($interp:expr, $text:expr) => {{
        let interp: &fitroom_core::Interpretation = &$interp;
        let text: &str = $text;
        match &interp.filter {
            fitroom_core::FilterExpression::Fallback(f) if f.text == text => {}
            other => panic!(
                "assert_fallback! failed:\n  expected fallback over {:?}\n  actual: {:?}",
                text, other
            ),
        }
        if interp.color.is_some() || interp.category.is_some() {
            panic!(
                "assert_fallback! failed: detections on a fallback query\n  color: {:?}\n  category: {:?}",
                interp.color, interp.category
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// Assert that a search outcome returned exactly the given product ids, in
/// order.
#[macro_export]
macro_rules! assert_result_ids {
    ($outcome:expr, [$($id:expr),* $(,)?]) => {{
        let outcome: &fitroom_catalog::SearchOutcome = &$outcome;
        let actual: Vec<&str> = outcome.products.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        if actual != expected {
            panic!(
                "assert_result_ids! failed for {:?}:\n  expected: {:?}\n  actual:   {:?}",
                outcome.query, expected, actual
            );
        }
    }};
}
