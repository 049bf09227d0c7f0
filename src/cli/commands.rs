//! Command implementations for the emolex CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pipeline::{
    EmotionFilesPipelineConfig, PhrasePipelineConfig, TokenPipelineConfig,
    run_emotion_files_pipeline, run_phrase_pipeline, run_token_pipeline,
};

/// Execute a CLI command.
pub fn execute_command(args: EmolexArgs) -> Result<()> {
    match &args.command {
        Command::Phrase(phrase_args) => phrase(phrase_args, &args),
        Command::Token(token_args) => token(token_args, &args),
        Command::EmotionFiles(files_args) => emotion_files(files_args, &args),
    }
}

fn phrase(args: &PhraseArgs, cli_args: &EmolexArgs) -> Result<()> {
    let config = PhrasePipelineConfig::from(args);
    if cli_args.verbosity() > 1 {
        println!("Counting phrases in: {}", config.text_path.display());
    }
    let summary = run_phrase_pipeline(&config)?;
    output_result("Phrase counts written", &summary, cli_args)
}

fn token(args: &TokenArgs, cli_args: &EmolexArgs) -> Result<()> {
    let config = TokenPipelineConfig::from(args);
    if cli_args.verbosity() > 1 {
        println!("Counting tokens in: {}", config.text_path.display());
    }
    let summary = run_token_pipeline(&config)?;
    output_result("Token counts written", &summary, cli_args)
}

fn emotion_files(args: &EmotionFilesArgs, cli_args: &EmolexArgs) -> Result<()> {
    let config = EmotionFilesPipelineConfig::from(args);
    if cli_args.verbosity() > 1 {
        println!(
            "Counting tokens in: {} against {}",
            config.text_path.display(),
            config.lex_dir.display()
        );
    }
    let summary = run_emotion_files_pipeline(&config)?;
    output_result("Per-emotion counts written", &summary, cli_args)
}
