//! # fibseq-cli
//!
//! Sequence output, REPL messages, and console styling.

pub mod messages;
pub mod output;
pub mod ui;

pub use output::{write_sequence, write_to_file};
