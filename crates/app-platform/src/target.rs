//! Render target detection
//!
//! The target is decided once per process. Everything downstream receives it
//! explicitly, so tests can build adapters for either target side by side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::PlatformError;

/// Environment variable overriding target detection on non-wasm hosts
pub const TARGET_ENV_VAR: &str = "UNISTYLE_TARGET";

/// Host environment the adapter emits for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// Browser DOM
    Web,
    /// Native widget tree
    Native,
}

impl RenderTarget {
    /// Detect the target from the host environment
    ///
    /// wasm32 builds are always web. Elsewhere [`TARGET_ENV_VAR`] may name a
    /// target; anything missing or unparseable means native.
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            return RenderTarget::Web;
        }
        match std::env::var(TARGET_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to native", e);
                RenderTarget::Native
            }),
            Err(_) => RenderTarget::Native,
        }
    }

    /// Target detected on first call, fixed for the rest of the process
    pub fn current() -> Self {
        static CURRENT: OnceLock<RenderTarget> = OnceLock::new();
        *CURRENT.get_or_init(RenderTarget::detect)
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderTarget::Web => "web",
            RenderTarget::Native => "native",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderTarget {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "dom" => Ok(RenderTarget::Web),
            "native" => Ok(RenderTarget::Native),
            _ => Err(PlatformError::UnknownTarget(s.to_string())),
        }
    }
}
