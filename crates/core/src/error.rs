//! Error types for PromptGuard.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! prompt reference, lookup and format failures.
//!
//! Validation findings are deliberately absent here: the validator reports
//! errors and warnings as data in a `ValidationResult`, never as `AppError`.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for PromptGuard.
///
/// All fallible functions return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A reference token that is not `name@version`
    #[error("Invalid prompt reference '{0}'. Expected format: name@version")]
    MalformedReference(String),

    /// A referenced prompt version file does not exist
    #[error("Prompt '{reference}' not found at {}", .path.display())]
    NotFound { reference: String, path: PathBuf },

    /// Structured-text parse failure; `path` is unset for in-memory text
    #[error("Failed to parse prompt YAML{}: {message}", format_origin(.path))]
    Format {
        path: Option<PathBuf>,
        message: String,
    },

    /// Target version file is already on disk
    #[error("Target version already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Prompt system errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

fn format_origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
