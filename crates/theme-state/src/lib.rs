//! Live theme state
//!
//! This crate owns the application's theme mode (light, dark or following
//! the system), persists it, observes the system appearance, and publishes
//! the active token set for the current scheme.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_platform::StaticAppearance;
//! use storage::MemoryStore;
//! use style_tokens::ColorScheme;
//! use theme_state::{ThemeConfig, ThemeMode, ThemeProvider};
//!
//! let provider = ThemeProvider::mount(
//!     ThemeConfig::new(),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(StaticAppearance::new(ColorScheme::Dark)),
//! );
//! assert!(provider.is_dark());
//!
//! provider.set_mode(ThemeMode::Light);
//! assert!(!provider.is_dark());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod mode;
pub mod provider;

pub use config::{ThemeConfig, DEFAULT_PERSISTENCE_KEY};
pub use error::{Result, ThemeError};
pub use mode::ThemeMode;
pub use provider::{ThemeHandle, ThemeProvider, ThemeSnapshot};
