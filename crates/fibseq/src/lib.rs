//! FibSeq library — application logic for the interactive Fibonacci REPL.

pub mod app;
pub mod config;
pub mod errors;
pub mod repl;
pub mod version;
