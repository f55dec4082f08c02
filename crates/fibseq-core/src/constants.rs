//! Constants for sequence limits and output naming.

/// Longest sequence written to the console; longer ones go to a file.
pub const DEFAULT_DISPLAY_LIMIT: usize = 3_000;

/// Longest sequence the REPL will produce at all.
///
/// 10,000 numbers take roughly 10 MB of text on disk.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Prefix of the file written for oversized requests.
pub const OUTPUT_FILE_PREFIX: &str = "fibs-";

/// Extension of the file written for oversized requests.
pub const OUTPUT_FILE_EXTENSION: &str = "txt";

/// Exit codes reported by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, usually an unrecoverable I/O failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_limit_below_max() {
        assert!(DEFAULT_DISPLAY_LIMIT < DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::SUCCESS, exit_codes::ERROR_GENERIC);
        assert_ne!(exit_codes::ERROR_GENERIC, exit_codes::ERROR_CONFIG);
    }
}
