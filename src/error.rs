//! Error types for addon-build operations.
//!
//! This module defines [`BuildError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing tools and declined installs end the run through a
//!   [`FlowOutcome`](crate::orchestrator::FlowOutcome), not an error
//! - Use `BuildError` for failures that abort the run abnormally
//! - Use `anyhow::Error` (via `BuildError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for addon-build operations.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A required tool is missing and cannot be installed.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// The user declined installing a missing tool.
    #[error("Installation of '{requirement}' was declined")]
    InstallDeclined { requirement: String },

    /// External command could not be started or failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Moving a build output into place failed.
    #[error("Failed to move {from} to {to}: {source}")]
    ArtifactMove {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for addon-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
