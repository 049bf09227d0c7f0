//! One-hot emotion lexicons.
//!
//! The file layout is a `word` column followed by one binary column per
//! emotion; the emotion list is taken from the header in column order:
//!
//! ```csv
//! word,anger,joy,trust
//! happy,0,1,1
//! vui mừng,0,1,0
//! ```

use std::collections::hash_map::Entry;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info, warn};

use crate::analysis::analyzer::emotion::EmotionAnalyzer;
use crate::error::{EmolexError, Result};
use crate::lexicon::{PhraseSet, clean_headers, open_csv, parse_cell, word_column};

/// A lexicon mapping normalized phrases to the emotions they belong to.
#[derive(Debug, Clone, Default)]
pub struct EmotionLexicon {
    /// Emotion names in column order.
    emotions: Vec<String>,
    /// Phrase -> sorted, deduplicated indices into `emotions`.
    entries: AHashMap<String, Vec<usize>>,
    max_phrase_length: usize,
}

impl EmotionLexicon {
    /// Create an empty lexicon over the given emotions.
    pub fn new<I, S>(emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EmotionLexicon {
            emotions: emotions.into_iter().map(Into::into).collect(),
            entries: AHashMap::new(),
            max_phrase_length: 0,
        }
    }

    /// Load a one-hot lexicon from a CSV file.
    ///
    /// A cell marks membership when it parses as a number equal to 1. A
    /// missing file, a missing `word` column or a row with the wrong number
    /// of cells is an error.
    pub fn from_path<P: AsRef<Path>>(path: P, analyzer: &EmotionAnalyzer) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let mut reader = open_csv(path)?;

        let headers = clean_headers(reader.headers()?);
        let word_idx = word_column(&headers, &source)?;
        let emotion_columns: Vec<(usize, &String)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != word_idx)
            .collect();

        let mut lexicon = EmotionLexicon::new(emotion_columns.iter().map(|(_, h)| h.as_str()));

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let line = row + 2;
            let word = record.get(word_idx).unwrap_or("");

            let mut flagged = Vec::new();
            for (emotion_idx, (column, _)) in emotion_columns.iter().enumerate() {
                let value = parse_cell(record.get(*column).unwrap_or(""), &source, line)?;
                if value == Some(1.0) {
                    flagged.push(emotion_idx);
                }
            }

            if !lexicon.insert_indices(word, flagged, analyzer)? {
                warn!("Skipping lexicon entry '{word}' in {source} line {line}: no word characters");
            }
        }

        info!(
            "Loaded {} phrases over {} emotions from {} (longest phrase: {} words)",
            lexicon.len(),
            lexicon.emotions.len(),
            source,
            lexicon.max_phrase_length
        );
        Ok(lexicon)
    }

    /// Add an entry flagged for the named emotions.
    ///
    /// If the entry folds onto a key that is already present, the existing
    /// flags are kept. Unknown emotion names are an error. Returns `false`
    /// if the entry had no words and was skipped.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        entry: &str,
        emotions: &[S],
        analyzer: &EmotionAnalyzer,
    ) -> Result<bool> {
        let indices = emotions
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.emotion_index(name).ok_or_else(|| {
                    EmolexError::lexicon(format!("Unknown emotion '{name}' for entry '{entry}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.insert_indices(entry, indices, analyzer)
    }

    fn insert_indices(
        &mut self,
        entry: &str,
        indices: Vec<usize>,
        analyzer: &EmotionAnalyzer,
    ) -> Result<bool> {
        let Some((key, len)) = analyzer.phrase_key(entry)? else {
            return Ok(false);
        };

        self.max_phrase_length = self.max_phrase_length.max(len);

        // The first row for a key decides its flags.
        match self.entries.entry(key) {
            Entry::Occupied(existing) => {
                debug!(
                    "Ignoring duplicate lexicon entry '{entry}' (already loaded as '{}')",
                    existing.key()
                );
            }
            Entry::Vacant(slot) => {
                let mut indices = indices;
                indices.sort_unstable();
                indices.dedup();
                slot.insert(indices);
            }
        }
        Ok(true)
    }

    /// Emotion names in column order.
    pub fn emotions(&self) -> &[String] {
        &self.emotions
    }

    /// Position of an emotion in column order.
    pub fn emotion_index(&self, emotion: &str) -> Option<usize> {
        self.emotions.iter().position(|e| e == emotion)
    }

    /// Check whether a normalized phrase is in the lexicon.
    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    /// Emotions flagged for a normalized phrase, in column order.
    ///
    /// Returns `None` if the phrase is not in the lexicon; a phrase with no
    /// flags yields an empty list.
    pub fn lookup(&self, phrase: &str) -> Option<Vec<&str>> {
        self.entries.get(phrase).map(|indices| {
            indices
                .iter()
                .map(|&idx| self.emotions[idx].as_str())
                .collect()
        })
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest phrase in words (0 for an empty lexicon).
    pub fn max_phrase_length(&self) -> usize {
        self.max_phrase_length
    }
}

impl PhraseSet for EmotionLexicon {
    fn contains_phrase(&self, phrase: &str) -> bool {
        self.contains(phrase)
    }

    fn longest_phrase(&self) -> usize {
        self.max_phrase_length
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_lexicon(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexicon.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_from_path() {
        let (_dir, path) = write_lexicon(
            "word,anger,joy,trust\nhappy,0,1,1\nVui Mừng,0,1,0\nfurious,1,0,0\nneutral,0,0,0\n",
        );
        let analyzer = EmotionAnalyzer::new().unwrap();
        let lexicon = EmotionLexicon::from_path(&path, &analyzer).unwrap();

        assert_eq!(lexicon.emotions(), &["anger", "joy", "trust"]);
        assert_eq!(lexicon.len(), 4);
        assert_eq!(lexicon.max_phrase_length(), 2);
        assert_eq!(lexicon.lookup("happy"), Some(vec!["joy", "trust"]));
        assert_eq!(lexicon.lookup("vui mung"), Some(vec!["joy"]));
        assert_eq!(lexicon.lookup("neutral"), Some(vec![]));
        assert_eq!(lexicon.lookup("sad"), None);
    }

    #[test]
    fn test_word_column_not_first() {
        let (_dir, path) = write_lexicon("joy,word,fear\n1,happy,0\n");
        let analyzer = EmotionAnalyzer::new().unwrap();
        let lexicon = EmotionLexicon::from_path(&path, &analyzer).unwrap();

        assert_eq!(lexicon.emotions(), &["joy", "fear"]);
        assert_eq!(lexicon.lookup("happy"), Some(vec!["joy"]));
    }

    #[test]
    fn test_duplicate_keys_keep_first_row() {
        let (_dir, path) =
            write_lexicon("word,anger,joy\nvui,0,1\nvui,1,0\ncafé,1,0\nCAFE,0,1\n");
        let analyzer = EmotionAnalyzer::new().unwrap();
        let lexicon = EmotionLexicon::from_path(&path, &analyzer).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("vui"), Some(vec!["joy"]));
        assert_eq!(lexicon.lookup("cafe"), Some(vec!["anger"]));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let analyzer = EmotionAnalyzer::new().unwrap();
        let err = EmotionLexicon::from_path(dir.path().join("missing.csv"), &analyzer).unwrap_err();
        assert!(matches!(err, EmolexError::Lexicon(_)));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let (_dir, path) = write_lexicon("word,anger,joy\nhappy,0\n");
        let analyzer = EmotionAnalyzer::new().unwrap();
        let err = EmotionLexicon::from_path(&path, &analyzer).unwrap_err();
        assert!(matches!(err, EmolexError::Csv(_)));
    }

    #[test]
    fn test_non_numeric_flag_is_an_error() {
        let (_dir, path) = write_lexicon("word,anger,joy\nhappy,0,yes\n");
        let analyzer = EmotionAnalyzer::new().unwrap();
        assert!(EmotionLexicon::from_path(&path, &analyzer).is_err());
    }

    #[test]
    fn test_insert() {
        let analyzer = EmotionAnalyzer::new().unwrap();
        let mut lexicon = EmotionLexicon::new(["anger", "joy"]);

        assert!(lexicon.insert("Joy", &["joy"], &analyzer).unwrap());
        assert!(!lexicon.insert("...", &["joy"], &analyzer).unwrap());
        assert!(lexicon.insert("rage", &["fury"], &analyzer).is_err());

        assert!(lexicon.contains("joy"));
        assert_eq!(lexicon.max_phrase_length(), 1);
    }

    #[test]
    fn test_empty_lexicon() {
        let (_dir, path) = write_lexicon("word,anger,joy\n");
        let analyzer = EmotionAnalyzer::new().unwrap();
        let lexicon = EmotionLexicon::from_path(&path, &analyzer).unwrap();

        assert!(lexicon.is_empty());
        assert_eq!(lexicon.max_phrase_length(), 0);
    }
}
