//! Error types for the skald-rs library.
//!
//! Structured error types that preserve context and enable proper error
//! propagation from the scanner, rewriter, and pipeline. The curation core
//! itself has no failure modes; errors originate from I/O and configuration.

use std::io;

use thiserror::Error;

/// Main result type for skald operations.
pub type Result<T> = std::result::Result<T, SkaldError>;

/// Comprehensive error type for all skald operations.
#[derive(Error, Debug)]
pub enum SkaldError {
    /// I/O related errors (file operations, directory walking)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Document parsing errors
    #[error("Parse error: {message}")]
    Parse {
        /// Error description
        message: String,
        /// File path where error occurred
        file_path: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl SkaldError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_in_file(message: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: Some(file_path.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Implement From traits for common error types
impl From<io::Error> for SkaldError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for SkaldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for SkaldError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SkaldError::config("Invalid configuration");
        assert!(matches!(err, SkaldError::Config { .. }));

        let err = SkaldError::parse("Malformed doc block");
        assert!(matches!(err, SkaldError::Parse { .. }));
    }

    #[test]
    fn test_config_field_error() {
        let err = SkaldError::config_field("Invalid value", "extensions");

        if let SkaldError::Config { message, field } = err {
            assert_eq!(message, "Invalid value");
            assert_eq!(field, Some("extensions".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_parse_in_file() {
        let err = SkaldError::parse_in_file("Unreadable contents", "include/app.h");

        if let SkaldError::Parse { message, file_path } = err {
            assert_eq!(message, "Unreadable contents");
            assert_eq!(file_path, Some("include/app.h".to_string()));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let skald_err: SkaldError = io_err.into();

        assert!(matches!(skald_err, SkaldError::Io { .. }));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let skald_err: SkaldError = json_err.into();

        assert!(matches!(skald_err, SkaldError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_formatting() {
        let err = SkaldError::validation("Root must be a directory");
        let display = format!("{}", err);
        assert!(display.contains("Validation error"));
        assert!(display.contains("Root must be a directory"));
    }
}
