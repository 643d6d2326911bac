//! Platform adapter for the style engine
//!
//! This crate turns resolved styles into host elements for the web or native
//! render target, and supplies the host-facing inputs the theme layer reads:
//! system appearance and viewport breakpoints.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod appearance;
pub mod element;
pub mod error;
pub mod events;
pub mod native;
pub mod registry;
pub mod target;
pub mod viewport;
pub mod web;

pub use adapter::{
    HostElement, HostNode, HostStyle, NativeEmitter, PlatformAdapter, StyleEmitter, WebEmitter,
};
pub use appearance::{AppearanceSource, HostAppearance, StaticAppearance};
pub use element::ElementKind;
pub use error::{PlatformError, Result};
pub use events::{InteractionEvent, InteractionTracker};
pub use native::NativeStyle;
pub use registry::{ComponentRegistry, RegisteredComponent};
pub use target::RenderTarget;
pub use viewport::BreakpointTracker;
pub use web::{CssRule, WebStyle};
