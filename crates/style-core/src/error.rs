//! Component description validation errors
//!
//! Resolution itself never fails: unknown tokens and unmatched variants are
//! not errors. Only malformed component descriptions are rejected, and only at
//! registration time.

use thiserror::Error;

/// Style description errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Two axes share a name
    #[error("Component {component}: duplicate variant axis '{axis}'")]
    DuplicateAxis {
        /// Component name
        component: String,
        /// Axis name
        axis: String,
    },

    /// A compound variant or default selection names an undeclared axis
    #[error("Component {component}: unknown variant axis '{axis}'")]
    UnknownAxis {
        /// Component name
        component: String,
        /// Axis name
        axis: String,
    },

    /// A compound variant condition names an undeclared option
    #[error("Component {component}: axis '{axis}' has no option '{option}'")]
    UnknownOption {
        /// Component name
        component: String,
        /// Axis name
        axis: String,
        /// Option name
        option: String,
    },

    /// A compound variant has no conditions
    #[error("Component {component}: compound variant #{index} has no conditions")]
    EmptyCompound {
        /// Component name
        component: String,
        /// Position in the compound list
        index: usize,
    },

    /// Malformed JSON description
    #[error("Invalid style description: {0}")]
    Parse(String),
}

/// Result type for style description operations
pub type Result<T> = std::result::Result<T, StyleError>;
