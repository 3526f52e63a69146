//! Error types for telemetry stream decoding

use thiserror::Error;

/// Result type for telemetry parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error types encountered while decoding a telemetry stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough bytes left in the buffer to hold a full frame
    #[error("Insufficient bytes: {0}")]
    InsufficientBytes(String),

    /// No bytes were acquired, so no report can be produced
    #[error("Empty input: no bytes to analyze")]
    EmptyInput,

    /// Analyzer configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Summary could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ParseError {
    /// Create a new InsufficientBytes error
    pub fn insufficient_bytes(msg: impl Into<String>) -> Self {
        ParseError::InsufficientBytes(msg.into())
    }

    /// Create a new InvalidConfig error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ParseError::InvalidConfig(msg.into())
    }

    /// Create a new Serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        ParseError::Serialization(msg.into())
    }

    /// Whether the stream walker absorbs this error as noise
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::InsufficientBytes(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::insufficient_bytes("need 39 bytes at offset 4, have 12");
        assert!(err.to_string().contains("Insufficient bytes"));
        assert!(err.to_string().contains("offset 4"));

        assert_eq!(
            ParseError::EmptyInput.to_string(),
            "Empty input: no bytes to analyze"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(ParseError::insufficient_bytes("tail").is_recoverable());
        assert!(!ParseError::EmptyInput.is_recoverable());
        assert!(!ParseError::invalid_config("NaN").is_recoverable());
    }
}
