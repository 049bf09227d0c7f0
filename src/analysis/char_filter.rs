//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole text before it is passed to the
//! tokenizer. Chained in the order lowercase, NFD, strip combining marks they
//! fold accented and unaccented spellings onto the same form.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`strip_combining::StripCombiningMarksCharFilter`] - Drops combining diacritical marks
//!
//! # Examples
//!
//! ```
//! use emolex::analysis::char_filter::CharFilter;
//! use emolex::analysis::char_filter::strip_combining::StripCombiningMarksCharFilter;
//! use emolex::analysis::char_filter::unicode_normalize::{
//!     NormalizationForm, UnicodeNormalizationCharFilter,
//! };
//!
//! let nfd = UnicodeNormalizationCharFilter::new(NormalizationForm::NFD);
//! let strip = StripCombiningMarksCharFilter::new();
//! assert_eq!(strip.filter(&nfd.filter("mừng")), "mung");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod strip_combining;
pub mod unicode_normalize;
