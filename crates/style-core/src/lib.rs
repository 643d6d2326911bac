//! Style resolution core
//!
//! Pure, synchronous functions that turn declarative style props, variant
//! selections and responsive blocks into a resolved style. Nothing in this
//! crate reads ambient state: the token set and active breakpoint are always
//! passed in explicitly.
//!
//! # Pipeline
//!
//! 1. [`resolver`] expands shorthand aliases and substitutes token values
//! 2. [`variants`] computes axis and compound variant contributions
//! 3. [`responsive`] picks the override block for the active breakpoint
//! 4. [`compose`] merges every layer with a fixed precedence and keeps
//!    pseudo-state and animation layers separate from the base style
//!
//! # Example
//!
//! ```rust
//! use style_core::{
//!     resolve_component, ComponentDescription, Instance, ResolveContext, StyleProps,
//!     VariantAxis, VariantTable,
//! };
//! use style_tokens::{Breakpoint, StyleValue, TokenSet};
//!
//! let button = ComponentDescription::new("Button")
//!     .defaults(StyleProps::new().set("p", "md"))
//!     .variants(VariantTable::new().axis(
//!         VariantAxis::new("variant")
//!             .option("primary", StyleProps::new().set("bg", "$primary500"))
//!             .option("secondary", StyleProps::new().set("bg", "$contrast100")),
//!     ));
//!
//! let tokens = TokenSet::complete();
//! let ctx = ResolveContext::new(&tokens, Breakpoint::Md);
//! let resolved = resolve_component(&button, &Instance::new().variant("variant", "primary"), &ctx);
//!
//! assert_eq!(resolved.base["backgroundColor"], StyleValue::from("#9D4EDD"));
//! assert_eq!(resolved.base["padding"], StyleValue::from(12.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aliases;
pub mod compose;
pub mod description;
pub mod error;
pub mod instance;
pub mod interaction;
pub mod props;
pub mod resolver;
pub mod responsive;
pub mod variants;

pub use compose::{
    resolve_component, resolve_style, ResolveContext, ResolvedAnimation, ResolvedStyle,
};
pub use description::ComponentDescription;
pub use error::{Result, StyleError};
pub use instance::Instance;
pub use interaction::{active_layers, active_override, InteractionState};
pub use props::{overlay, AnimationDirectives, PseudoState, StyleMap, StyleProps};
pub use resolver::{normalize, normalize_props, resolve, resolve_props, resolve_value};
pub use responsive::resolve_responsive;
pub use variants::{apply_variants, CompoundVariant, VariantAxis, VariantOption, VariantTable};

pub use style_tokens::{Breakpoint, StyleValue, TokenCategory, TokenSet};
