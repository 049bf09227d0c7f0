//! Analyzer implementations that combine char filters and a tokenizer.

pub mod analyzer;
pub mod emotion;
pub mod pipeline;
