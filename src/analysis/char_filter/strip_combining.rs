//! Combining mark removal.

use unicode_normalization::char::is_combining_mark;

use super::CharFilter;

/// A char filter that drops every combining mark.
///
/// Only marks that are separate code points are removed, so this filter is
/// meant to run after NFD (or NFKD) decomposition. Letters that have no
/// decomposition, such as `đ`, pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct StripCombiningMarksCharFilter;

impl StripCombiningMarksCharFilter {
    pub fn new() -> Self {
        StripCombiningMarksCharFilter
    }
}

impl CharFilter for StripCombiningMarksCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !is_combining_mark(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "strip_combining_marks"
    }
}
