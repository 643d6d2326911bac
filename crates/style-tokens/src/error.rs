//! Token parsing errors

use thiserror::Error;

/// Errors raised while parsing token-related names
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Unknown token category name
    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    /// Unknown breakpoint name
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// Unknown color scheme name
    #[error("Unknown color scheme: {0}")]
    UnknownScheme(String),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
