//! Per-phrase and per-emotion aggregation for one-hot lexicons.

use std::path::PathBuf;

use crate::error::Result;
use crate::lexicon::emotion::EmotionLexicon;
use crate::matcher::frequency::FrequencyTable;
use crate::report::writer::ReportWriter;
use crate::report::{AGGREGATE_FREQUENCIES_FILE, AggregateRow, EMOTION_TOTALS_FILE, EmotionTotal};

/// Matched phrases broken down by emotion, plus per-emotion totals.
///
/// Rows are ordered by frequency descending, then phrase, then the emotion's
/// column position in the lexicon. Totals are ordered by frequency
/// descending with ties kept in column order, and list only emotions that
/// matched at least once.
#[derive(Debug, Clone, Default)]
pub struct EmotionReport {
    rows: Vec<AggregateRow>,
    totals: Vec<EmotionTotal>,
}

impl EmotionReport {
    /// Build the report from phrase counts.
    ///
    /// Each counted phrase contributes one row per emotion it is flagged
    /// for, and its frequency to each of those emotions' totals. Phrases
    /// flagged for no emotion contribute nothing.
    pub fn build(counts: &FrequencyTable, lexicon: &EmotionLexicon) -> Self {
        let mut rows = Vec::new();
        let mut sums = vec![0u64; lexicon.emotions().len()];

        for (phrase, frequency) in counts.sorted() {
            let Some(emotions) = lexicon.lookup(phrase) else {
                continue;
            };
            for emotion in emotions {
                if let Some(idx) = lexicon.emotion_index(emotion) {
                    sums[idx] += frequency;
                }
                rows.push(AggregateRow {
                    phrase: phrase.to_string(),
                    emotion: emotion.to_string(),
                    frequency,
                });
            }
        }

        let mut totals: Vec<EmotionTotal> = lexicon
            .emotions()
            .iter()
            .zip(sums)
            .filter(|(_, sum)| *sum > 0)
            .map(|(emotion, frequency)| EmotionTotal {
                emotion: emotion.clone(),
                frequency,
            })
            .collect();
        // Stable: ties stay in column order.
        totals.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        EmotionReport { rows, totals }
    }

    /// `(phrase, emotion, frequency)` rows.
    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    /// Per-emotion totals, highest first.
    pub fn totals(&self) -> &[EmotionTotal] {
        &self.totals
    }

    /// Total for one emotion (0 if it never matched).
    pub fn total_for(&self, emotion: &str) -> u64 {
        self.totals
            .iter()
            .find(|t| t.emotion == emotion)
            .map(|t| t.frequency)
            .unwrap_or(0)
    }

    /// Write `aggregate_frequencies.csv` and `emotion_totals.csv`.
    pub fn write(&self, writer: &ReportWriter) -> Result<Vec<PathBuf>> {
        Ok(vec![
            writer.write_table(AGGREGATE_FREQUENCIES_FILE, &self.rows)?,
            writer.write_table(EMOTION_TOTALS_FILE, &self.totals)?,
        ])
    }
}
