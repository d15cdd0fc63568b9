//! Error types for the token tooling
//!
//! Only I/O, decoding and configuration problems are errors. Problems found in
//! the tokens themselves are validation findings, see [`crate::report`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for token tooling operations
#[derive(Error, Debug)]
pub enum TokensError {
    /// IO errors (reading stylesheets, token files, writing output)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML configuration parsing errors
    #[error("YAML error in {file:?}: {source}")]
    Yaml {
        file: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A token file that is valid JSON but not a token tree
    #[error("Invalid token file {file:?}: {message}")]
    InvalidTokenFile { file: PathBuf, message: String },

    /// Configuration values that cannot be used
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for token tooling operations
pub type TokensResult<T> = Result<T, TokensError>;

impl From<std::io::Error> for TokensError {
    fn from(err: std::io::Error) -> Self {
        TokensError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for TokensError {
    fn from(err: serde_json::Error) -> Self {
        TokensError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> TokensResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> TokensResult<T> {
        self.map_err(|e| TokensError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> TokensResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> TokensResult<T> {
        self.map_err(|e| TokensError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_context_keeps_message() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.with_io_context("Failed to read tokens.css").unwrap_err();
        assert_eq!(err.to_string(), "IO error: Failed to read tokens.css");
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TokensError = json_err.into();
        assert!(matches!(err, TokensError::Json { .. }));
    }
}
