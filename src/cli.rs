//! Command line interface for emolex.

pub mod args;
pub mod commands;
pub mod output;
