//! End-to-end counting pipelines.
//!
//! Each pipeline runs the same linear flow: load lexicon → load text →
//! normalize and tokenize → match → aggregate by emotion → write CSV files.
//!
//! - [`run_token_pipeline`] - single tokens against a word list
//! - [`run_phrase_pipeline`] - sliding windows against a one-hot emotion lexicon
//! - [`run_emotion_files_pipeline`] - single tokens against one word list per emotion
//!
//! # Examples
//!
//! ```no_run
//! use emolex::pipeline::{PhrasePipelineConfig, run_phrase_pipeline};
//!
//! let config = PhrasePipelineConfig::new("input/input.txt", "lexicons/emolex.csv", "output");
//! let summary = run_phrase_pipeline(&config).unwrap();
//! println!("{} phrase hits", summary.total_matches);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::emotion::EmotionAnalyzer;
use crate::analysis::token::Token;
use crate::error::{EmolexError, Result};
use crate::lexicon::NRC_EMOTIONS;
use crate::lexicon::emotion::EmotionLexicon;
use crate::lexicon::emotion_files::EmotionFileSet;
use crate::lexicon::word_list::WordList;
use crate::matcher::Matcher;
use crate::matcher::frequency::FrequencyTable;
use crate::matcher::phrase::PhraseMatcher;
use crate::matcher::token::TokenMatcher;
use crate::report::aggregate::EmotionReport;
use crate::report::breakdown::EmotionFileReport;
use crate::report::writer::ReportWriter;
use crate::report::{EmotionTotal, TOKEN_FREQUENCIES_FILE, token_frequency_rows};

fn default_bom() -> bool {
    true
}

/// Configuration of the single-token pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPipelineConfig {
    /// UTF-8 text file to analyze.
    pub text_path: PathBuf,
    /// CSV word list with a `word` column.
    pub lex_path: PathBuf,
    /// Output directory, created if absent.
    pub save_path: PathBuf,
    /// Start output files with a UTF-8 byte-order mark.
    #[serde(default = "default_bom")]
    pub bom: bool,
}

impl TokenPipelineConfig {
    pub fn new<P: Into<PathBuf>>(text_path: P, lex_path: P, save_path: P) -> Self {
        TokenPipelineConfig {
            text_path: text_path.into(),
            lex_path: lex_path.into(),
            save_path: save_path.into(),
            bom: true,
        }
    }
}

/// Configuration of the sliding-window phrase pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasePipelineConfig {
    /// UTF-8 text file to analyze.
    pub text_path: PathBuf,
    /// One-hot emotion lexicon CSV.
    pub lex_path: PathBuf,
    /// Output directory, created if absent.
    pub save_path: PathBuf,
    /// Optional cap on the window length; defaults to the longest entry.
    #[serde(default)]
    pub max_phrase_length: Option<usize>,
    /// Start output files with a UTF-8 byte-order mark.
    #[serde(default = "default_bom")]
    pub bom: bool,
}

impl PhrasePipelineConfig {
    pub fn new<P: Into<PathBuf>>(text_path: P, lex_path: P, save_path: P) -> Self {
        PhrasePipelineConfig {
            text_path: text_path.into(),
            lex_path: lex_path.into(),
            save_path: save_path.into(),
            max_phrase_length: None,
            bom: true,
        }
    }
}

/// Configuration of the per-emotion word list pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionFilesPipelineConfig {
    /// UTF-8 text file to analyze.
    pub text_path: PathBuf,
    /// Directory holding `NRC_EmoLex_<emotion>.csv` files.
    pub lex_dir: PathBuf,
    /// Output directory, created if absent.
    pub save_path: PathBuf,
    /// Emotions to load, in report order.
    pub emotions: Vec<String>,
    /// Start output files with a UTF-8 byte-order mark.
    #[serde(default = "default_bom")]
    pub bom: bool,
}

impl EmotionFilesPipelineConfig {
    /// Create a config over the ten NRC emotions.
    pub fn new<P: Into<PathBuf>>(text_path: P, lex_dir: P, save_path: P) -> Self {
        EmotionFilesPipelineConfig {
            text_path: text_path.into(),
            lex_dir: lex_dir.into(),
            save_path: save_path.into(),
            emotions: NRC_EMOTIONS.iter().map(|e| e.to_string()).collect(),
            bom: true,
        }
    }
}

/// What a pipeline run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Pipeline name: `token`, `phrase` or `emotion-files`.
    pub pipeline: String,
    /// Tokens in the analyzed text.
    pub tokens: usize,
    /// Distinct matched words or phrases.
    pub unique_matches: usize,
    /// Total matched words or phrases.
    pub total_matches: u64,
    /// Per-emotion totals, in report order.
    pub emotion_totals: Vec<EmotionTotal>,
    /// Files written.
    pub files: Vec<PathBuf>,
    pub duration_ms: u64,
}

/// Read the input text, failing if the file does not exist.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(EmolexError::not_found(format!(
            "Input text file {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path)?;
    info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

fn load_tokens(path: &Path, analyzer: &EmotionAnalyzer) -> Result<Vec<Token>> {
    let text = read_text(path)?;
    let tokens = analyzer.analyze_to_tokens(&text)?;
    debug!("Analyzed {} tokens", tokens.len());
    Ok(tokens)
}

/// Count single tokens found in a word list and write `token_frequencies.csv`.
pub fn run_token_pipeline(config: &TokenPipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let analyzer = EmotionAnalyzer::new()?;

    let words = WordList::from_path(&config.lex_path, &analyzer)?;
    let tokens = load_tokens(&config.text_path, &analyzer)?;

    let counts = TokenMatcher::new(&words).count(&tokens);

    let writer = ReportWriter::create(&config.save_path)?.with_bom(config.bom);
    let path = writer.write_table(TOKEN_FREQUENCIES_FILE, &token_frequency_rows(&counts))?;

    Ok(RunSummary {
        pipeline: "token".to_string(),
        tokens: tokens.len(),
        unique_matches: counts.len(),
        total_matches: counts.total(),
        emotion_totals: Vec::new(),
        files: vec![path],
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Count lexicon phrases with a sliding window and write
/// `aggregate_frequencies.csv` and `emotion_totals.csv`.
pub fn run_phrase_pipeline(config: &PhrasePipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let analyzer = EmotionAnalyzer::new()?;

    let lexicon = EmotionLexicon::from_path(&config.lex_path, &analyzer)?;
    let tokens = load_tokens(&config.text_path, &analyzer)?;

    let mut matcher = PhraseMatcher::new(&lexicon);
    if let Some(max) = config.max_phrase_length {
        matcher = matcher.with_max_phrase_length(max);
    }
    let counts = matcher.count(&tokens);
    let report = EmotionReport::build(&counts, &lexicon);

    let writer = ReportWriter::create(&config.save_path)?.with_bom(config.bom);
    let files = report.write(&writer)?;

    Ok(RunSummary {
        pipeline: "phrase".to_string(),
        tokens: tokens.len(),
        unique_matches: counts.len(),
        total_matches: counts.total(),
        emotion_totals: report.totals().to_vec(),
        files,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Count single tokens against one word list per emotion and write the
/// per-emotion tables, the breakdown and the hidden summary.
///
/// Missing per-emotion files are tolerated (the emotion reports 0/0); a
/// missing text file or lexicon directory is not.
pub fn run_emotion_files_pipeline(config: &EmotionFilesPipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let analyzer = EmotionAnalyzer::new()?;

    let lexicons = EmotionFileSet::load(&config.lex_dir, config.emotions.clone(), &analyzer)?;
    let tokens = load_tokens(&config.text_path, &analyzer)?;

    let counts: Vec<(&str, FrequencyTable)> = lexicons
        .iter()
        .map(|(emotion, words)| (emotion, TokenMatcher::new(words).count(&tokens)))
        .collect();

    // A token's count is the same in every emotion it belongs to.
    let mut matched = FrequencyTable::new();
    for (_, table) in &counts {
        for (token, count) in table.iter() {
            if !matched.contains(token) {
                matched.add(token, count);
            }
        }
    }

    let report = EmotionFileReport::build(&counts);
    let writer = ReportWriter::create(&config.save_path)?.with_bom(config.bom);
    let files = report.write(&writer)?;

    let emotion_totals = report
        .summary()
        .iter()
        .map(|row| EmotionTotal {
            emotion: row.emotion.clone(),
            frequency: row.total_tokens,
        })
        .collect();

    Ok(RunSummary {
        pipeline: "emotion-files".to_string(),
        tokens: tokens.len(),
        unique_matches: matched.len(),
        total_matches: matched.total(),
        emotion_totals,
        files,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
