//! Theme provider errors
//!
//! Storage and appearance failures never reach callers of the provider; they
//! are logged and the provider falls back. Only parsing can fail.

use thiserror::Error;

/// Theme errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Unrecognized theme mode string
    #[error("Invalid theme mode: {0}")]
    InvalidMode(String),

    /// Malformed configuration document
    #[error("Invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
