//! Error types for sanity-filter.
//!
//! The normalization functions themselves cannot fail; these errors come
//! from reading inputs, loading configuration and parsing arguments.

use thiserror::Error;

use crate::cli::ArgsError;
use crate::config::ConfigError;

/// Main error type for sanity-filter operations.
#[derive(Error, Debug)]
pub enum SanityFilterError {
    /// I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line arguments were rejected.
    #[error("argument error: {0}")]
    Args(#[from] ArgsError),

    /// Unknown filter mode name.
    #[error("invalid filter mode: '{0}' (expected 'paths' or 'full')")]
    InvalidMode(String),
}

/// Convenience Result type for sanity-filter operations.
pub type Result<T> = std::result::Result<T, SanityFilterError>;
