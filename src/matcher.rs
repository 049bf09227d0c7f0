//! Lexicon matching over token sequences.
//!
//! - [`token::TokenMatcher`] - counts single tokens found in a lexicon
//! - [`phrase::PhraseMatcher`] - counts every window of 1..L consecutive
//!   tokens found in a lexicon
//!
//! Both produce a [`frequency::FrequencyTable`] keyed by the matched
//! (normalized) word or phrase.
//!
//! # Examples
//!
//! ```
//! use emolex::analysis::analyzer::analyzer::Analyzer;
//! use emolex::analysis::analyzer::emotion::EmotionAnalyzer;
//! use emolex::lexicon::word_list::WordList;
//! use emolex::matcher::Matcher;
//! use emolex::matcher::token::TokenMatcher;
//!
//! let analyzer = EmotionAnalyzer::new().unwrap();
//! let words = WordList::from_words(["joy"], &analyzer).unwrap();
//! let tokens = analyzer.analyze_to_tokens("I feel joy and JOY today").unwrap();
//!
//! let counts = TokenMatcher::new(&words).count(&tokens);
//! assert_eq!(counts.get("joy"), 2);
//! ```

use crate::analysis::token::Token;
use crate::matcher::frequency::FrequencyTable;

pub mod frequency;
pub mod phrase;
pub mod token;

/// Trait for matchers that count lexicon hits in a token sequence.
pub trait Matcher {
    /// Count the lexicon entries found in the tokens.
    fn count(&self, tokens: &[Token]) -> FrequencyTable;

    /// Get the name of this matcher (for logging).
    fn name(&self) -> &'static str;
}
