//! Unistyle
//!
//! A cross-platform style resolution engine. Components declare styles with
//! design tokens, shorthand properties, variants and responsive blocks; the
//! engine resolves them against the active theme and viewport and emits
//! styles for the web or native render target.
//!
//! The workspace is split by concern:
//!
//! - [`tokens`]: token registry, breakpoints, color schemes
//! - [`style`]: prop resolution, variants, responsive blocks, merging
//! - [`platform`]: render targets, host elements, appearance, viewport
//! - [`storage`]: preference persistence
//! - [`theme`]: live theme mode and token layering
//!
//! [`StyleRoot`] ties them together.
//!
//! # Example
//!
//! ```rust
//! use unistyle::style::{
//!     ComponentDescription, Instance, InteractionState, StyleProps, VariantAxis,
//! };
//! use unistyle::platform::{ElementKind, RenderTarget};
//! use unistyle::{RootOptions, StyleRoot};
//!
//! let root = StyleRoot::mount(RootOptions::new().target(RenderTarget::Web));
//! root.register(
//!     ElementKind::Pressable,
//!     ComponentDescription::new("Button")
//!         .defaults(StyleProps::new().set("px", "md").set("br", "md"))
//!         .axis(
//!             VariantAxis::new("tone")
//!                 .option("brand", StyleProps::new().set("bg", "$primary500")),
//!         ),
//! )
//! .unwrap();
//!
//! let instance = Instance::new().variant("tone", "brand");
//! let button = root
//!     .render("Button", &instance, InteractionState::Idle, vec!["Save".into()])
//!     .unwrap();
//! assert_eq!(button.tag, "button");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod root;

pub use root::{RootOptions, StyleRoot, DEFAULT_VIEWPORT_WIDTH};

pub use app_platform as platform;
pub use storage;
pub use style_core as style;
pub use style_tokens as tokens;
pub use theme_state as theme;
