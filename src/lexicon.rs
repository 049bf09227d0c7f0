//! Lexicon loading.
//!
//! Three lexicon layouts are supported, all CSV with a header row:
//!
//! - [`word_list::WordList`] - a `word` column (other columns ignored), or a
//!   two-column `word,value` per-emotion file
//! - [`emotion::EmotionLexicon`] - a `word` column plus one binary column per
//!   emotion
//! - [`emotion_files::EmotionFileSet`] - one `NRC_EmoLex_<emotion>.csv` word
//!   list per emotion inside a directory
//!
//! Every entry is normalized with the same analyzer as the input text, so an
//! entry written with accents or odd spacing still matches the folded tokens.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{EmolexError, Result};

pub mod emotion;
pub mod emotion_files;
pub mod word_list;

/// The NRC emotion categories, in the order reports list them.
pub const NRC_EMOTIONS: [&str; 10] = [
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "negative",
    "positive",
    "sadness",
    "surprise",
    "trust",
];

/// Name of the column holding the word or phrase.
pub const WORD_COLUMN: &str = "word";

/// Membership test shared by every lexicon layout.
///
/// Keys are normalized phrases: folded tokens joined by single spaces.
pub trait PhraseSet {
    /// Check whether a normalized phrase is an entry.
    fn contains_phrase(&self, phrase: &str) -> bool;

    /// Longest entry in words (0 when there are no entries).
    fn longest_phrase(&self) -> usize;
}

/// Open a lexicon CSV file, failing if it does not exist.
pub(crate) fn open_csv(path: &Path) -> Result<Reader<File>> {
    if !path.is_file() {
        return Err(EmolexError::lexicon(format!(
            "Lexicon file not found: {}",
            path.display()
        )));
    }

    let reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    Ok(reader)
}

/// Header names with surrounding whitespace and any byte-order mark removed.
pub(crate) fn clean_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

/// Locate the `word` column.
pub(crate) fn word_column(headers: &[String], source: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(WORD_COLUMN))
        .ok_or_else(|| {
            EmolexError::lexicon(format!(
                "Lexicon '{source}' has no '{WORD_COLUMN}' column (found: {})",
                headers.join(", ")
            ))
        })
}

/// Parse a numeric lexicon cell. Empty cells read as `None`.
pub(crate) fn parse_cell(value: &str, source: &str, line: usize) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| {
        EmolexError::lexicon(format!(
            "Lexicon '{source}' line {line}: expected a number, found '{value}'"
        ))
    })
}
