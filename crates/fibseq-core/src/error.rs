//! Error types shared by the sequence producers and request parsing.

/// Error type for sequence production and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A non-positive count reached a producer directly.
    #[error("the number of Fibonacci numbers requested must be positive, got {0}")]
    InvalidCount(i64),

    /// The operation is not supported by this producer.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
