//! Error types for Freshen operations.
//!
//! This module defines [`FreshenError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FreshenError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FreshenError::Other`) for unexpected errors
//! - Version-resolution failures are not errors: they surface as absent values

use thiserror::Error;

/// Core error type for Freshen operations.
#[derive(Debug, Error)]
pub enum FreshenError {
    /// The installer subprocess exited with a non-zero status.
    #[error("Installer failed with exit code {code:?}: {command}")]
    InstallerFailed { command: String, code: Option<i32> },

    /// No Python interpreter found on PATH for the pip fallback.
    #[error("No Python interpreter found on PATH (tried python3, python)")]
    NoInterpreter,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Freshen operations.
pub type Result<T> = std::result::Result<T, FreshenError>;
