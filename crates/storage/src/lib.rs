//! Storage layer for the style engine
//!
//! This crate provides the sled-backed key-value store and the preference
//! persistence surface the theme layer writes the selected mode through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod preferences;

pub use kv::{KvConfig, KvError, KvStore, Result};
pub use preferences::{MemoryStore, PreferenceStore, UnavailableStore};
