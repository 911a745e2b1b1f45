//! Error types for lintweave operations.
//!
//! This module defines [`LintweaveError`], the error type used throughout
//! the crate, and a [`Result`] alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Errors that mean "this run's configuration cannot be trusted"
//!   (producer bugs, missing anchors) propagate and abort composition
//! - Errors that mean "an optional companion is absent" are absorbed by the
//!   fallback diagnostic and never reach the caller
//! - `anyhow::Error` (via `LintweaveError::Other`) covers unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lintweave operations.
#[derive(Debug, Error)]
pub enum LintweaveError {
    /// A name-keyed composer edit referenced a fragment that never appeared.
    #[error("Fragment not found: '{name}' (referenced by {operation})")]
    AnchorNotFound { name: String, operation: String },

    /// No package installer governs the directory tree.
    #[error("No package installer detected for {}", dir.display())]
    NoInstallerDetected { dir: PathBuf },

    /// The installer process exited unsuccessfully or failed to spawn.
    #[error("Failed to install '{spec}': {message}")]
    InstallFailed { spec: String, message: String },

    /// A companion spec could not be split into name and version.
    #[error("Invalid companion spec: '{spec}'")]
    InvalidCompanionSpec { spec: String },

    /// A companion's plugin binding could not be loaded.
    #[error("Failed to load plugin '{package}': {message}")]
    PluginLoad { package: String, message: String },

    /// A package manifest could not be parsed.
    #[error("Failed to parse manifest at {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    /// An options file could not be parsed.
    #[error("Failed to parse options at {}: {message}", path.display())]
    OptionsParse { path: PathBuf, message: String },

    /// Options were well-formed but not acceptable.
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lintweave operations.
pub type Result<T> = std::result::Result<T, LintweaveError>;
