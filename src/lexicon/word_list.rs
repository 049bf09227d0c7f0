//! Plain word-list lexicons.

use std::path::Path;

use ahash::AHashSet;
use log::{debug, info, warn};

use crate::analysis::analyzer::emotion::EmotionAnalyzer;
use crate::error::Result;
use crate::lexicon::{PhraseSet, clean_headers, open_csv, parse_cell, word_column};

/// Name of the optional numeric column in per-emotion word lists.
pub const VALUE_COLUMN: &str = "value";

/// A set of normalized words or phrases.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: AHashSet<String>,
    max_phrase_length: usize,
}

impl WordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from raw entries, normalizing each one.
    pub fn from_words<I, S>(words: I, analyzer: &EmotionAnalyzer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::new();
        for word in words {
            list.insert(word.as_ref(), analyzer)?;
        }
        Ok(list)
    }

    /// Load a word list from a CSV file with a `word` column.
    ///
    /// A missing file is an error. If the file also has a `value` column,
    /// rows whose value is 0 are left out.
    pub fn from_path<P: AsRef<Path>>(path: P, analyzer: &EmotionAnalyzer) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let mut reader = open_csv(path)?;

        let headers = clean_headers(reader.headers()?);
        let word_idx = word_column(&headers, &source)?;
        let value_idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(VALUE_COLUMN));

        let mut list = WordList::new();
        let mut excluded = 0usize;
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1.
            let line = row + 2;

            if let Some(idx) = value_idx {
                let value = parse_cell(record.get(idx).unwrap_or(""), &source, line)?;
                if value == Some(0.0) {
                    excluded += 1;
                    continue;
                }
            }

            let word = record.get(word_idx).unwrap_or("");
            if !list.insert(word, analyzer)? {
                warn!("Skipping lexicon entry '{word}' in {source} line {line}: no word characters");
            }
        }

        info!("Loaded {} words from {}", list.len(), source);
        if excluded > 0 {
            debug!("Excluded {excluded} zero-valued rows from {source}");
        }
        Ok(list)
    }

    /// Load a word list, substituting an empty list if the file is missing.
    ///
    /// Only a missing file is tolerated; a file that exists but cannot be
    /// parsed is still an error.
    pub fn from_path_or_empty<P: AsRef<Path>>(
        path: P,
        analyzer: &EmotionAnalyzer,
    ) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            warn!(
                "Lexicon file not found: {}; treating it as empty",
                path.display()
            );
            return Ok(WordList::new());
        }
        Self::from_path(path, analyzer)
    }

    /// Normalize and add one entry. Returns `false` if the entry had no words.
    pub fn insert(&mut self, entry: &str, analyzer: &EmotionAnalyzer) -> Result<bool> {
        match analyzer.phrase_key(entry)? {
            Some((key, len)) => {
                self.max_phrase_length = self.max_phrase_length.max(len);
                self.words.insert(key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Check whether a normalized word or phrase is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Longest entry in words (0 for an empty list).
    pub fn max_phrase_length(&self) -> usize {
        self.max_phrase_length
    }

    /// Iterate over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl PhraseSet for WordList {
    fn contains_phrase(&self, phrase: &str) -> bool {
        self.contains(phrase)
    }

    fn longest_phrase(&self) -> usize {
        self.max_phrase_length
    }
}
