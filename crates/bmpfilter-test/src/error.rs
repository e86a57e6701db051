//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to encode a fixture image
    #[error("failed to encode fixture: {message}")]
    ImageEncode { message: String },

    /// Failed to decode bitmap bytes
    #[error("failed to decode bitmap: {message}")]
    ImageDecode { message: String },

    /// Failed to write a fixture file
    #[error("failed to write '{path}': {message}")]
    ImageWrite { path: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
