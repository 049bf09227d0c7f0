//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{EmolexArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::RunSummary;

/// Output a run summary in the selected format.
pub fn output_result(message: &str, summary: &RunSummary, args: &EmolexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, summary, args),
        OutputFormat::Json => output_json(summary, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, summary: &RunSummary, args: &EmolexArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }
    print!("{}", format_summary(message, summary));
    Ok(())
}

fn format_summary(message: &str, summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{message}\n\n"));

    let heading = format!("Run Summary ({}):", summary.pipeline);
    out.push_str(&format!("{heading}\n{}\n", "═".repeat(heading.chars().count())));
    out.push_str(&format!("Tokens: {}\n", summary.tokens));
    out.push_str(&format!("Unique matches: {}\n", summary.unique_matches));
    out.push_str(&format!("Total matches: {}\n", summary.total_matches));
    out.push_str(&format!("Time: {}ms\n", summary.duration_ms));

    if !summary.emotion_totals.is_empty() {
        out.push_str("\nEmotions:\n────────\n");
        for total in &summary.emotion_totals {
            out.push_str(&format!("  {} ({})\n", total.emotion, total.frequency));
        }
    }

    out.push_str("\nFiles:\n──────\n");
    for file in &summary.files {
        out.push_str(&format!("  {}\n", file.display()));
    }
    out
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EmolexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
