//! Aggregation of match counts into CSV reports.
//!
//! # Output files
//!
//! | File | Columns | Pipeline |
//! |------|---------|----------|
//! | `token_frequencies.csv` | `token,frequency` | token |
//! | `aggregate_frequencies.csv` | `phrase,emotion,frequency` | phrase |
//! | `emotion_totals.csv` | `emotion,frequency` | phrase |
//! | `<emotion>_token_frequencies.csv` | `token,frequency` | emotion files |
//! | `token_emotion_breakdown.csv` | `token,emotion,frequency` | emotion files |
//! | `.emotion_summary.csv` | `emotion,total_tokens,unique_tokens` | emotion files |
//!
//! Every table is emitted in a deterministic order so repeated runs over the
//! same input produce byte-identical files.

use serde::{Deserialize, Serialize};

use crate::matcher::frequency::FrequencyTable;

pub mod aggregate;
pub mod breakdown;
pub mod writer;

pub const TOKEN_FREQUENCIES_FILE: &str = "token_frequencies.csv";
pub const AGGREGATE_FREQUENCIES_FILE: &str = "aggregate_frequencies.csv";
pub const EMOTION_TOTALS_FILE: &str = "emotion_totals.csv";
pub const TOKEN_EMOTION_BREAKDOWN_FILE: &str = "token_emotion_breakdown.csv";
pub const EMOTION_SUMMARY_FILE: &str = ".emotion_summary.csv";

/// File name of the per-emotion token table.
pub fn emotion_token_file_name(emotion: &str) -> String {
    format!("{emotion}_token_frequencies.csv")
}

/// A row type that can be written as a CSV table.
///
/// `HEADERS` is written even when the table has no rows.
pub trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// `token,frequency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub token: String,
    pub frequency: u64,
}

impl CsvRow for TokenFrequency {
    const HEADERS: &'static [&'static str] = &["token", "frequency"];
}

/// `phrase,emotion,frequency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub phrase: String,
    pub emotion: String,
    pub frequency: u64,
}

impl CsvRow for AggregateRow {
    const HEADERS: &'static [&'static str] = &["phrase", "emotion", "frequency"];
}

/// `emotion,frequency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTotal {
    pub emotion: String,
    pub frequency: u64,
}

impl CsvRow for EmotionTotal {
    const HEADERS: &'static [&'static str] = &["emotion", "frequency"];
}

/// `token,emotion,frequency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub token: String,
    pub emotion: String,
    pub frequency: u64,
}

impl CsvRow for BreakdownRow {
    const HEADERS: &'static [&'static str] = &["token", "emotion", "frequency"];
}

/// `emotion,total_tokens,unique_tokens`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub emotion: String,
    pub total_tokens: u64,
    pub unique_tokens: u64,
}

impl CsvRow for SummaryRow {
    const HEADERS: &'static [&'static str] = &["emotion", "total_tokens", "unique_tokens"];
}

/// Rows of a frequency table, most frequent first.
pub fn token_frequency_rows(counts: &FrequencyTable) -> Vec<TokenFrequency> {
    counts
        .sorted()
        .into_iter()
        .map(|(token, frequency)| TokenFrequency {
            token: token.to_string(),
            frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_frequency_rows() {
        let counts: FrequencyTable = ["sad", "joy", "joy"].into_iter().collect();
        let rows = token_frequency_rows(&counts);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "joy");
        assert_eq!(rows[0].frequency, 2);
        assert_eq!(rows[1].token, "sad");
    }

    #[test]
    fn test_emotion_token_file_name() {
        assert_eq!(emotion_token_file_name("fear"), "fear_token_frequencies.csv");
    }
}
