//! Error types for provisioning operations.
//!
//! This module defines [`ProvisionError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Install and resolution failures carry the extension or package name so
//!   the caller can report exactly what failed
//! - Inside a manifest run these errors are recorded per task, not raised
//! - Use `anyhow::Error` (via `ProvisionError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for provisioning operations.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The extension registry reported a failure for this extension.
    #[error("Failed to install {name} extension")]
    ExtensionInstallFailed { name: String },

    /// A package version could not be derived from an extension.
    #[error("Cannot resolve version from extension '{extension}': {reason}")]
    VersionResolutionFailed { extension: String, reason: String },

    /// The package installer reported a failure.
    #[error("Failed to install package '{package}' ({version})")]
    PackageInstallFailed { package: String, version: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest violates an ordering or naming invariant.
    #[error("Invalid manifest: {message}")]
    ManifestInvalid { message: String },

    /// A child process could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;
