//! Error handling module for enginecalc
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Malformed numbers typed at a prompt are not errors; they are retried inside
//! the prompt loop and never reach this type.

use thiserror::Error;

/// Main error type for enginecalc
#[derive(Error, Debug)]
pub enum EngineCalcError {
    /// IO errors (reading stdin, writing the report)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream closed before a prompt received a valid number
    #[error("End of input while waiting for: {}", .question.trim_end())]
    EndOfInput { question: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for enginecalc operations
pub type Result<T> = std::result::Result<T, EngineCalcError>;

impl EngineCalcError {
    /// Create an end-of-input error for the given prompt
    pub fn end_of_input(question: impl Into<String>) -> Self {
        Self::EndOfInput {
            question: question.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineCalcError::end_of_input("Enter engine RPM: ");
        assert_eq!(
            err.to_string(),
            "End of input while waiting for: Enter engine RPM:"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: EngineCalcError = io_err.into();
        assert!(matches!(err, EngineCalcError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
