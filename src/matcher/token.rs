//! Single-token matching.

use log::debug;

use crate::analysis::token::Token;
use crate::lexicon::PhraseSet;
use crate::matcher::Matcher;
use crate::matcher::frequency::FrequencyTable;

/// Counts every token that is an entry of the lexicon.
///
/// Multi-word entries never match here; use
/// [`PhraseMatcher`](super::phrase::PhraseMatcher) for those.
pub struct TokenMatcher<'a> {
    lexicon: &'a dyn PhraseSet,
}

impl<'a> TokenMatcher<'a> {
    pub fn new(lexicon: &'a dyn PhraseSet) -> Self {
        TokenMatcher { lexicon }
    }
}

impl Matcher for TokenMatcher<'_> {
    fn count(&self, tokens: &[Token]) -> FrequencyTable {
        let mut counts = FrequencyTable::new();
        for token in tokens {
            if self.lexicon.contains_phrase(&token.text) {
                counts.increment(&token.text);
            }
        }

        debug!(
            "Token matcher: {} of {} tokens matched ({} distinct)",
            counts.total(),
            tokens.len(),
            counts.len()
        );
        counts
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::analyzer::Analyzer;
    use crate::analysis::analyzer::emotion::EmotionAnalyzer;
    use crate::lexicon::word_list::WordList;

    #[test]
    fn test_counts_lexicon_tokens_only() {
        let analyzer = EmotionAnalyzer::new().unwrap();
        let words = WordList::from_words(["joy", "fear"], &analyzer).unwrap();
        let tokens = analyzer
            .analyze_to_tokens("I feel joy and JOY today, no fear.")
            .unwrap();

        let counts = TokenMatcher::new(&words).count(&tokens);

        assert_eq!(counts.get("joy"), 2);
        assert_eq!(counts.get("fear"), 1);
        assert!(!counts.contains("today"));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_count_equals_occurrences() {
        let analyzer = EmotionAnalyzer::new().unwrap();
        let words = WordList::from_words(["a", "b"], &analyzer).unwrap();
        let tokens: Vec<Token> = ["a", "b", "a", "c", "a", "b"]
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(*t, i))
            .collect();

        let counts = TokenMatcher::new(&words).count(&tokens);
        for key in ["a", "b"] {
            let expected = tokens.iter().filter(|t| t.text == key).count() as u64;
            assert_eq!(counts.get(key), expected);
        }
        assert!(!counts.contains("c"));
    }

    #[test]
    fn test_multi_word_entries_do_not_match() {
        let analyzer = EmotionAnalyzer::new().unwrap();
        let words = WordList::from_words(["vui mừng"], &analyzer).unwrap();
        let tokens = analyzer.analyze_to_tokens("vui mừng").unwrap();

        assert!(TokenMatcher::new(&words).count(&tokens).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let words = WordList::new();
        let matcher = TokenMatcher::new(&words);
        assert!(matcher.count(&[]).is_empty());
        assert_eq!(matcher.name(), "token");
    }
}
