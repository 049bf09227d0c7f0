//! Text analysis module for emolex.
//!
//! This module turns raw text into the normalized token sequence that the
//! matchers consume: char filters fold case and diacritics, then a regex
//! tokenizer splits the folded text into word tokens.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;
