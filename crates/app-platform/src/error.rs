//! Platform adapter errors

use thiserror::Error;

use crate::target::RenderTarget;

/// Platform adapter errors
#[derive(Debug, Error)]
pub enum PlatformError {
    /// No host primitive exists for an element on the active target
    #[error("No {target} mapping for element '{element}'")]
    MissingElementMapping {
        /// Abstract element identity
        element: String,
        /// Active render target
        target: RenderTarget,
    },

    /// The host could not register an appearance observer
    #[error("Appearance observer unavailable: {0}")]
    AppearanceUnavailable(String),

    /// Unrecognized render target name
    #[error("Unknown render target: {0}")]
    UnknownTarget(String),

    /// Component name registered twice
    #[error("Component already registered: {0}")]
    DuplicateComponent(String),

    /// Invalid component description
    #[error("Style description error: {0}")]
    Style(#[from] style_core::StyleError),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
