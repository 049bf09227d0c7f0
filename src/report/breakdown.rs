//! Reports for per-emotion word lists.

use std::path::PathBuf;

use crate::error::Result;
use crate::matcher::frequency::FrequencyTable;
use crate::report::writer::ReportWriter;
use crate::report::{
    BreakdownRow, EMOTION_SUMMARY_FILE, SummaryRow, TOKEN_EMOTION_BREAKDOWN_FILE,
    TokenFrequency, emotion_token_file_name, token_frequency_rows,
};

/// Token counts of several emotions, laid out as per-emotion tables, a
/// token → emotion breakdown, and a summary.
#[derive(Debug, Clone, Default)]
pub struct EmotionFileReport {
    per_emotion: Vec<(String, Vec<TokenFrequency>)>,
    breakdown: Vec<BreakdownRow>,
    summary: Vec<SummaryRow>,
}

impl EmotionFileReport {
    /// Build the report from one frequency table per emotion, in the order
    /// the emotions should be listed.
    ///
    /// Every emotion gets a summary row, including 0/0 rows for emotions
    /// with no matches. Breakdown rows are ordered by token, then emotion
    /// order.
    pub fn build<S: AsRef<str>>(counts: &[(S, FrequencyTable)]) -> Self {
        let mut per_emotion = Vec::with_capacity(counts.len());
        let mut summary = Vec::with_capacity(counts.len());
        let mut breakdown: Vec<(usize, BreakdownRow)> = Vec::new();

        for (emotion_idx, (emotion, table)) in counts.iter().enumerate() {
            let emotion = emotion.as_ref();
            let rows = token_frequency_rows(table);

            breakdown.extend(rows.iter().map(|row| {
                (
                    emotion_idx,
                    BreakdownRow {
                        token: row.token.clone(),
                        emotion: emotion.to_string(),
                        frequency: row.frequency,
                    },
                )
            }));

            summary.push(SummaryRow {
                emotion: emotion.to_string(),
                total_tokens: table.total(),
                unique_tokens: table.len() as u64,
            });
            per_emotion.push((emotion.to_string(), rows));
        }

        breakdown.sort_by(|(ia, a), (ib, b)| a.token.cmp(&b.token).then(ia.cmp(ib)));

        EmotionFileReport {
            per_emotion,
            breakdown: breakdown.into_iter().map(|(_, row)| row).collect(),
            summary,
        }
    }

    /// Token table of one emotion.
    pub fn tokens_for(&self, emotion: &str) -> Option<&[TokenFrequency]> {
        self.per_emotion
            .iter()
            .find(|(e, _)| e == emotion)
            .map(|(_, rows)| rows.as_slice())
    }

    /// `(token, emotion, frequency)` rows.
    pub fn breakdown(&self) -> &[BreakdownRow] {
        &self.breakdown
    }

    /// One row per emotion.
    pub fn summary(&self) -> &[SummaryRow] {
        &self.summary
    }

    /// Write the per-emotion tables, the breakdown and the summary.
    ///
    /// An emotion without matches gets no token table, only its 0/0 summary
    /// row.
    pub fn write(&self, writer: &ReportWriter) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (emotion, rows) in &self.per_emotion {
            if rows.is_empty() {
                continue;
            }
            written.push(writer.write_table(&emotion_token_file_name(emotion), rows)?);
        }
        written.push(writer.write_table(TOKEN_EMOTION_BREAKDOWN_FILE, &self.breakdown)?);
        written.push(writer.write_table(EMOTION_SUMMARY_FILE, &self.summary)?);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn counts() -> Vec<(&'static str, FrequencyTable)> {
        vec![
            ("anger", FrequencyTable::new()),
            ("joy", ["happy", "glad", "happy"].into_iter().collect()),
            ("positive", ["happy", "calm"].into_iter().collect()),
        ]
    }

    #[test]
    fn test_summary_includes_empty_emotions() {
        let report = EmotionFileReport::build(&counts());

        let summary: Vec<(&str, u64, u64)> = report
            .summary()
            .iter()
            .map(|s| (s.emotion.as_str(), s.total_tokens, s.unique_tokens))
            .collect();
        assert_eq!(
            summary,
            vec![("anger", 0, 0), ("joy", 3, 2), ("positive", 2, 2)]
        );
    }

    #[test]
    fn test_breakdown_order() {
        let report = EmotionFileReport::build(&counts());

        let rows: Vec<(&str, &str, u64)> = report
            .breakdown()
            .iter()
            .map(|r| (r.token.as_str(), r.emotion.as_str(), r.frequency))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("calm", "positive", 1),
                ("glad", "joy", 1),
                ("happy", "joy", 2),
                ("happy", "positive", 1),
            ]
        );
    }

    #[test]
    fn test_write_skips_empty_emotion_tables() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap().with_bom(false);

        let report = EmotionFileReport::build(&counts());
        let written = report.write(&writer).unwrap();

        assert_eq!(written.len(), 4);
        assert!(!dir.path().join("anger_token_frequencies.csv").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("joy_token_frequencies.csv")).unwrap(),
            "token,frequency\nhappy,2\nglad,1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(".emotion_summary.csv")).unwrap(),
            "emotion,total_tokens,unique_tokens\nanger,0,0\njoy,3,2\npositive,2,2\n"
        );
        assert!(report.tokens_for("anger").unwrap().is_empty());
    }
}
