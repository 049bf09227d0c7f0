//! Sliding-window phrase matching.
//!
//! For every window size `w` in `1..=L` and every start `i` in `0..=N-w`,
//! the tokens `i..i+w` are joined with single spaces and counted if the
//! joined string is a lexicon entry. `L` is the longest lexicon entry in
//! words, so the scan costs O(N·L) lookups. Overlapping windows are all
//! counted: "very very happy" yields two "very" hits and, if present, one
//! "very happy" hit.

use log::debug;

use crate::analysis::token::Token;
use crate::lexicon::PhraseSet;
use crate::matcher::Matcher;
use crate::matcher::frequency::FrequencyTable;

/// Counts every window of consecutive tokens that is a lexicon entry.
pub struct PhraseMatcher<'a> {
    lexicon: &'a dyn PhraseSet,
    max_phrase_length: usize,
}

impl<'a> PhraseMatcher<'a> {
    /// Create a matcher whose longest window is the lexicon's longest entry.
    pub fn new(lexicon: &'a dyn PhraseSet) -> Self {
        PhraseMatcher {
            max_phrase_length: lexicon.longest_phrase(),
            lexicon,
        }
    }

    /// Cap the window length. The cap never raises it above the lexicon's
    /// longest entry, since longer windows cannot match.
    pub fn with_max_phrase_length(mut self, max_phrase_length: usize) -> Self {
        self.max_phrase_length = max_phrase_length.min(self.lexicon.longest_phrase());
        self
    }

    /// The longest window this matcher tries.
    pub fn max_phrase_length(&self) -> usize {
        self.max_phrase_length
    }
}

impl Matcher for PhraseMatcher<'_> {
    fn count(&self, tokens: &[Token]) -> FrequencyTable {
        let mut counts = FrequencyTable::new();
        let mut phrase = String::new();

        for window in 1..=self.max_phrase_length.min(tokens.len()) {
            for start in 0..=tokens.len() - window {
                phrase.clear();
                for (offset, token) in tokens[start..start + window].iter().enumerate() {
                    if offset > 0 {
                        phrase.push(' ');
                    }
                    phrase.push_str(&token.text);
                }

                if self.lexicon.contains_phrase(&phrase) {
                    counts.increment(&phrase);
                }
            }
        }

        debug!(
            "Phrase matcher: {} hits ({} distinct) over {} tokens, windows up to {}",
            counts.total(),
            counts.len(),
            tokens.len(),
            self.max_phrase_length
        );
        counts
    }

    fn name(&self) -> &'static str {
        "phrase"
    }
}
