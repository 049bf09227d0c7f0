//! Word analyzer used for both the input text and lexicon entries.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. UnicodeNormalizationCharFilter (NFD)
//! 3. StripCombiningMarksCharFilter
//! 4. RegexTokenizer (`\w+`)
//!
//! Accented and unaccented spellings therefore produce the same tokens:
//!
//! ```
//! use emolex::analysis::analyzer::analyzer::Analyzer;
//! use emolex::analysis::analyzer::emotion::EmotionAnalyzer;
//!
//! let analyzer = EmotionAnalyzer::new().unwrap();
//! let terms = analyzer.analyze_to_terms("Ồ, vui mừng!").unwrap();
//! assert_eq!(terms, vec!["o", "vui", "mung"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::strip_combining::StripCombiningMarksCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Case and diacritic folding word analyzer.
pub struct EmotionAnalyzer {
    inner: PipelineAnalyzer,
}

impl EmotionAnalyzer {
    /// Create the analyzer with the default `\w+` tokenizer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                NormalizationForm::NFD,
            )))
            .add_char_filter(Arc::new(StripCombiningMarksCharFilter::new()))
            .with_name("emotion");

        Ok(EmotionAnalyzer { inner: analyzer })
    }

    /// Fold case and diacritics without tokenizing.
    pub fn normalize(&self, text: &str) -> String {
        self.inner.normalize(text)
    }

    /// Normalize a lexicon entry into its lookup key.
    ///
    /// The entry is analyzed like running text and its tokens are joined with
    /// single spaces, so the key is exactly what a window of the same tokens
    /// produces. Returns the key and its length in words, or `None` if the
    /// entry contains no word characters.
    pub fn phrase_key(&self, entry: &str) -> Result<Option<(String, usize)>> {
        let terms = self.analyze_to_terms(entry)?;
        if terms.is_empty() {
            return Ok(None);
        }
        let len = terms.len();
        Ok(Some((terms.join(" "), len)))
    }
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self::new().expect("Emotion analyzer should be creatable with default settings")
    }
}

impl Analyzer for EmotionAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "emotion"
    }
}

impl std::fmt::Debug for EmotionAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
