//! Design tokens for the unistyle engine
//!
//! This crate is the leaf of the style pipeline. It holds the token
//! registry (an immutable, category-keyed dictionary of design values),
//! the breakpoint scale derived from it, and the light/dark color scheme.
//!
//! # Example
//!
//! ```rust
//! use style_tokens::{TokenCategory, TokenSet, StyleValue};
//!
//! let base = TokenSet::complete();
//! let overrides = TokenSet::new().with(TokenCategory::Colors, "primary500", "#FF5500");
//!
//! let merged = base.merge(&overrides);
//! assert_eq!(
//!     merged.get(TokenCategory::Colors, "primary500"),
//!     Some(&StyleValue::from("#FF5500"))
//! );
//! // Unknown keys are not errors
//! assert!(merged.get(TokenCategory::Space, "nope").is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breakpoint;
pub mod category;
pub mod defaults;
pub mod error;
pub mod scheme;
pub mod set;
pub mod value;

pub use breakpoint::{Breakpoint, BreakpointScale};
pub use category::TokenCategory;
pub use defaults::dark_overrides;
pub use error::{Result, TokenError};
pub use scheme::ColorScheme;
pub use set::{merge, TokenMap, TokenSet};
pub use value::{Shadow, StyleValue};
