//! Command line argument parsing for the emolex CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::{EmotionFilesPipelineConfig, PhrasePipelineConfig, TokenPipelineConfig};

/// emolex - count emotion words and phrases in text
#[derive(Parser, Debug, Clone)]
#[command(name = "emolex")]
#[command(about = "Count emotion lexicon words and phrases in a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EmolexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format of the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EmolexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count lexicon phrases with a sliding window and aggregate by emotion
    Phrase(PhraseArgs),

    /// Count single tokens found in a word list
    Token(TokenArgs),

    /// Count single tokens against one word list per emotion
    #[command(name = "emotion-files")]
    EmotionFiles(EmotionFilesArgs),
}

/// Arguments for the phrase pipeline
#[derive(Parser, Debug, Clone)]
pub struct PhraseArgs {
    /// Input text file (UTF-8)
    #[arg(long = "textPath", visible_alias = "text-path", value_name = "TEXT_PATH")]
    pub text_path: PathBuf,

    /// One-hot emotion lexicon CSV
    #[arg(long = "lexPath", visible_alias = "lex-path", value_name = "LEX_PATH")]
    pub lex_path: PathBuf,

    /// Output directory
    #[arg(long = "savePath", visible_alias = "save-path", value_name = "SAVE_PATH")]
    pub save_path: PathBuf,

    /// Longest window to try (default: longest lexicon entry)
    #[arg(long)]
    pub max_phrase_length: Option<usize>,

    /// Don't start output files with a UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,
}

/// Arguments for the token pipeline
#[derive(Parser, Debug, Clone)]
pub struct TokenArgs {
    /// Input text file (UTF-8)
    #[arg(long = "textPath", visible_alias = "text-path", value_name = "TEXT_PATH")]
    pub text_path: PathBuf,

    /// Word list CSV with a `word` column
    #[arg(long = "lexPath", visible_alias = "lex-path", value_name = "LEX_PATH")]
    pub lex_path: PathBuf,

    /// Output directory
    #[arg(long = "savePath", visible_alias = "save-path", value_name = "SAVE_PATH")]
    pub save_path: PathBuf,

    /// Don't start output files with a UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,
}

/// Arguments for the per-emotion word list pipeline
#[derive(Parser, Debug, Clone)]
pub struct EmotionFilesArgs {
    /// Input text file (UTF-8)
    #[arg(long = "textPath", visible_alias = "text-path", value_name = "TEXT_PATH")]
    pub text_path: PathBuf,

    /// Directory holding NRC_EmoLex_<emotion>.csv files
    #[arg(long = "lexDir", visible_alias = "lex-dir", value_name = "LEX_DIR")]
    pub lex_dir: PathBuf,

    /// Output directory
    #[arg(long = "savePath", visible_alias = "save-path", value_name = "SAVE_PATH")]
    pub save_path: PathBuf,

    /// Don't start output files with a UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl From<&PhraseArgs> for PhrasePipelineConfig {
    fn from(args: &PhraseArgs) -> Self {
        PhrasePipelineConfig {
            text_path: args.text_path.clone(),
            lex_path: args.lex_path.clone(),
            save_path: args.save_path.clone(),
            max_phrase_length: args.max_phrase_length,
            bom: !args.no_bom,
        }
    }
}

impl From<&TokenArgs> for TokenPipelineConfig {
    fn from(args: &TokenArgs) -> Self {
        TokenPipelineConfig {
            text_path: args.text_path.clone(),
            lex_path: args.lex_path.clone(),
            save_path: args.save_path.clone(),
            bom: !args.no_bom,
        }
    }
}

impl From<&EmotionFilesArgs> for EmotionFilesPipelineConfig {
    fn from(args: &EmotionFilesArgs) -> Self {
        let mut config = EmotionFilesPipelineConfig::new(
            args.text_path.clone(),
            args.lex_dir.clone(),
            args.save_path.clone(),
        );
        config.bom = !args.no_bom;
        config
    }
}
