//! Engine error types

use localmaxs_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core index or extraction error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error while emitting results
    #[error("I/O error: {0}")]
    IoError(String),

    /// Extraction stopped by the abort flag
    #[error("extraction aborted after {sentences_processed} sentences")]
    Aborted {
        /// Sentences fully emitted before the abort was observed
        sentences_processed: usize,
    },
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::Configuration("max_ngram must be at least 1".into()).into();
        assert!(matches!(err, EngineError::Core(_)));
        assert!(err.to_string().contains("max_ngram"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: EngineError = io.into();
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn test_aborted_display() {
        let err = EngineError::Aborted {
            sentences_processed: 12,
        };
        assert_eq!(err.to_string(), "extraction aborted after 12 sentences");
    }
}
