//! Error types shared across the workspace.

use thiserror::Error;

/// Result type alias for fallible startup and configuration paths.
pub type Result<T> = std::result::Result<T, ConvoError>;

/// Errors that prevent the bot from starting or loading its inputs.
///
/// Per-command errors (cooldown rejections, upstream fetch failures) live
/// next to the code that produces them; this type covers the fatal paths
/// where the process refuses to come up at all.
#[derive(Error, Debug)]
pub enum ConvoError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what is wrong.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A startup-time invariant was violated (missing or empty prompt file,
    /// HTTP client construction failure, and the like).
    #[error("startup error: {message}")]
    Startup {
        /// Human-readable description of what is wrong.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error surfaced during startup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvoError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with a source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new startup error.
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new startup error with a source.
    pub fn startup_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Startup {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convert from config::ConfigError so the loader can use `?`.
impl From<config::ConfigError> for ConvoError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("configuration loading failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_display() {
        let error = ConvoError::config("prefix cannot be empty");
        assert_eq!(
            error.to_string(),
            "configuration error: prefix cannot be empty"
        );

        let error = ConvoError::startup("prompt file missing");
        assert_eq!(error.to_string(), "startup error: prompt file missing");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let wrapped = ConvoError::startup_with_source("failed to read prompt list", io_error);

        assert!(wrapped.to_string().contains("failed to read prompt list"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: ConvoError = io_error.into();
        assert!(error.to_string().contains("I/O error"));
    }
}
