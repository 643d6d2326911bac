//! System appearance sources
//!
//! The theme layer reads the host's light/dark preference through
//! [`AppearanceSource`] and observes changes through a `watch` channel.

use std::sync::Arc;
use style_tokens::ColorScheme;
use tokio::sync::watch;

use crate::error::Result;

/// Host light/dark preference
pub trait AppearanceSource: Send + Sync {
    /// Current system scheme
    fn current(&self) -> ColorScheme;

    /// Register for changes
    ///
    /// Fails when the host cannot deliver change events; callers then keep
    /// the scheme returned by [`AppearanceSource::current`].
    fn subscribe(&self) -> Result<watch::Receiver<ColorScheme>>;
}

/// A scheme that never changes
#[derive(Debug)]
pub struct StaticAppearance {
    tx: watch::Sender<ColorScheme>,
}

impl StaticAppearance {
    /// Fixed scheme
    pub fn new(scheme: ColorScheme) -> Self {
        let (tx, _) = watch::channel(scheme);
        Self { tx }
    }
}

impl Default for StaticAppearance {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl AppearanceSource for StaticAppearance {
    fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> Result<watch::Receiver<ColorScheme>> {
        Ok(self.tx.subscribe())
    }
}

/// Appearance pushed by the host shell
///
/// Clones share one channel, so the host keeps a clone to report changes.
#[derive(Debug, Clone)]
pub struct HostAppearance {
    tx: Arc<watch::Sender<ColorScheme>>,
}

impl HostAppearance {
    /// Start with `initial`
    pub fn new(initial: ColorScheme) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Report a system scheme; observers are woken only on change
    pub fn set(&self, scheme: ColorScheme) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == scheme {
                return false;
            }
            *current = scheme;
            true
        });
        if changed {
            tracing::debug!(scheme = %scheme, "System appearance changed");
        }
    }
}

impl AppearanceSource for HostAppearance {
    fn current(&self) -> ColorScheme {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> Result<watch::Receiver<ColorScheme>> {
        Ok(self.tx.subscribe())
    }
}
