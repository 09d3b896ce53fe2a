//! Error types for the Jobdeck plugin.
//!
//! This module defines the centralized error type [`JobdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Filtering itself
//! never fails; these errors cover the ambient concerns around it (loading a
//! catalog or theme from disk, configuration problems).

use thiserror::Error;

/// The main error type for Jobdeck plugin operations.
///
/// # Examples
///
/// ```
/// use jobdeck::JobdeckError;
///
/// fn load_catalog() -> Result<(), JobdeckError> {
///     Err(JobdeckError::Catalog("duplicate job id: 7".to_string()))
/// }
///
/// assert!(load_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum JobdeckError {
    /// Catalog content is invalid.
    ///
    /// Occurs when a catalog file parses but violates a catalog invariant,
    /// such as two jobs sharing the same identifier.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Catalog JSON could not be parsed.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Jobdeck operations.
pub type Result<T> = std::result::Result<T, JobdeckError>;
