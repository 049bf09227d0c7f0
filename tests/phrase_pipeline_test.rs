//! Integration tests for the sliding-window phrase pipeline.

use std::fs;
use std::path::Path;

use emolex::error::Result;
use emolex::pipeline::{PhrasePipelineConfig, run_phrase_pipeline};
use tempfile::TempDir;

const LEXICON: &str = "\
word,anger,joy,positive,trust
joy,0,1,1,0
rage,1,0,0,0
vui mừng,0,1,1,0
well-being,0,1,1,0
faith,0,0,1,1
";

fn setup(text: &str) -> (TempDir, PhrasePipelineConfig) {
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("input.txt");
    let lex_path = dir.path().join("emolex.csv");
    fs::write(&text_path, text).unwrap();
    fs::write(&lex_path, LEXICON).unwrap();

    let mut config = PhrasePipelineConfig::new(text_path, lex_path, dir.path().join("output"));
    config.bom = false;
    (dir, config)
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

#[test]
fn test_case_folded_counts() -> Result<()> {
    let (_dir, config) = setup("I feel joy and JOY today");

    let summary = run_phrase_pipeline(&config)?;

    assert_eq!(summary.tokens, 6);
    assert_eq!(summary.total_matches, 2);
    assert_eq!(
        read(&config.save_path, "aggregate_frequencies.csv"),
        "phrase,emotion,frequency\njoy,joy,2\njoy,positive,2\n"
    );
    assert_eq!(
        read(&config.save_path, "emotion_totals.csv"),
        "emotion,frequency\njoy,2\npositive,2\n"
    );
    Ok(())
}

#[test]
fn test_accented_multiword_phrase() -> Result<()> {
    let (_dir, config) = setup("Ồ, vui mừng quá! Their well being matters.");

    let summary = run_phrase_pipeline(&config)?;

    assert_eq!(summary.unique_matches, 2);
    let aggregate = read(&config.save_path, "aggregate_frequencies.csv");
    assert!(aggregate.contains("vui mung,joy,1\n"));
    assert!(aggregate.contains("well being,positive,1\n"));
    assert_eq!(
        read(&config.save_path, "emotion_totals.csv"),
        "emotion,frequency\njoy,2\npositive,2\n"
    );
    Ok(())
}

#[test]
fn test_max_phrase_length_cap() -> Result<()> {
    let (_dir, mut config) = setup("vui mừng and joy");
    config.max_phrase_length = Some(1);

    let summary = run_phrase_pipeline(&config)?;

    assert_eq!(summary.total_matches, 1);
    assert!(!read(&config.save_path, "aggregate_frequencies.csv").contains("vui mung"));
    Ok(())
}

#[test]
fn test_no_matches_writes_headers_only() -> Result<()> {
    let (_dir, config) = setup("nothing to see here");

    let summary = run_phrase_pipeline(&config)?;

    assert_eq!(summary.total_matches, 0);
    assert!(summary.emotion_totals.is_empty());
    assert_eq!(
        read(&config.save_path, "aggregate_frequencies.csv"),
        "phrase,emotion,frequency\n"
    );
    assert_eq!(read(&config.save_path, "emotion_totals.csv"), "emotion,frequency\n");
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let (_dir, config) = setup("faith rage joy faith vui mừng joy rage faith");

    run_phrase_pipeline(&config)?;
    let first = (
        fs::read(config.save_path.join("aggregate_frequencies.csv")).unwrap(),
        fs::read(config.save_path.join("emotion_totals.csv")).unwrap(),
    );
    run_phrase_pipeline(&config)?;
    let second = (
        fs::read(config.save_path.join("aggregate_frequencies.csv")).unwrap(),
        fs::read(config.save_path.join("emotion_totals.csv")).unwrap(),
    );

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_bom_written_by_default() -> Result<()> {
    let (_dir, mut config) = setup("joy");
    config.bom = true;

    run_phrase_pipeline(&config)?;

    let bytes = fs::read(config.save_path.join("emotion_totals.csv")).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBFemotion,frequency\n"));
    Ok(())
}

#[test]
fn test_missing_lexicon_is_an_error() {
    let (dir, mut config) = setup("joy");
    config.lex_path = dir.path().join("missing.csv");

    assert!(run_phrase_pipeline(&config).is_err());
    assert!(!config.save_path.join("aggregate_frequencies.csv").exists());
}

#[test]
fn test_missing_text_is_an_error() {
    let (dir, mut config) = setup("joy");
    config.text_path = dir.path().join("missing.txt");

    let err = run_phrase_pipeline(&config).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_ragged_lexicon_is_an_error() {
    let (_dir, config) = setup("joy");
    fs::write(&config.lex_path, "word,anger,joy\njoy,0\n").unwrap();

    assert!(run_phrase_pipeline(&config).is_err());
}

#[test]
fn test_duplicate_lexicon_rows_use_first_row() -> Result<()> {
    let (_dir, config) = setup("vui");
    fs::write(&config.lex_path, "word,anger,joy\nvui,0,1\nvui,1,0\n").unwrap();

    let summary = run_phrase_pipeline(&config)?;

    assert_eq!(summary.total_matches, 1);
    assert_eq!(
        read(&config.save_path, "aggregate_frequencies.csv"),
        "phrase,emotion,frequency\nvui,joy,1\n"
    );
    assert_eq!(read(&config.save_path, "emotion_totals.csv"), "emotion,frequency\njoy,1\n");
    Ok(())
}
