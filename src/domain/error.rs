//! Error types for the navigation state library.
//!
//! This module defines the centralized error type [`DocnavError`] and a type alias
//! [`Result`] for the internal layers (storage backends, configuration parsing,
//! tree loading). The user-facing state operations never surface these errors:
//! persistence converts them into its documented fallbacks.

use thiserror::Error;

/// The main error type for navigation state operations.
///
/// Most variants carry a description of what went wrong. `Io` wraps standard
/// library I/O failures via `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use docnav::DocnavError;
///
/// fn read_slot() -> Result<(), DocnavError> {
///     Err(DocnavError::Storage("storage is disabled".to_string()))
/// }
///
/// assert!(read_slot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DocnavError {
    /// Storage access failed.
    ///
    /// Covers disabled storage, exceeded quota, and backend-specific read or
    /// write failures.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted or supplied data could not be (de)serialized.
    ///
    /// A malformed state blob ends up here before being treated as absent.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The supplied navigation tree is structurally invalid.
    ///
    /// For example an item node that declares children.
    #[error("Tree error: {0}")]
    Tree(String),
}

/// A specialized `Result` type for navigation state operations.
pub type Result<T> = std::result::Result<T, DocnavError>;
