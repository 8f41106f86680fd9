//! Whole-file category pre-scan
//!
//! Decides which category files a log needs before any line is routed.
//! The test runs on the raw content, so the two keywords of a pair may
//! come from different lines.

use crate::models::Category;
use crate::parser::contains_keywords;

/// Categories whose keyword pair occurs anywhere in `content`, in routing order
pub fn active_categories(content: &str) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|category| contains_keywords(content, &category.keywords()))
        .collect()
}

/// Subset of `active` that the individual `line` belongs to
pub fn line_categories<'a>(
    line: &'a str,
    active: &'a [Category],
) -> impl Iterator<Item = Category> + 'a {
    active
        .iter()
        .copied()
        .filter(move |category| contains_keywords(line, &category.keywords()))
}
