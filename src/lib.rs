//! # emolex
//!
//! Emotion lexicon frequency counting for text, in the style of the NRC
//! Word-Emotion Association Lexicon.
//!
//! ## Features
//!
//! - Accent- and case-folding analysis pipeline (lowercase, NFD, strip
//!   combining marks, `\w+` tokens)
//! - Single-token and sliding-window phrase matching
//! - One-hot emotion lexicons and per-emotion word lists
//! - Deterministic CSV reports

pub mod analysis;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod pipeline;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
