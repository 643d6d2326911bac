//! Theme provider
//!
//! One provider is mounted per application. It owns the selected mode, the
//! last system scheme it has seen, and the token sets for both schemes. Every
//! change is published as a whole [`ThemeSnapshot`] through a `watch`
//! channel, so readers never see a mode paired with the other scheme's
//! tokens.
//!
//! Storage and appearance failures degrade instead of failing: a failed read
//! falls back to the configured default mode, a failed write keeps the new
//! mode in memory, and a failed observer registration keeps the scheme read
//! at mount.

use parking_lot::Mutex;
use std::ops::Deref;
use std::sync::{Arc, Weak};
use style_tokens::{ColorScheme, TokenSet};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use app_platform::AppearanceSource;
use storage::PreferenceStore;

use crate::config::ThemeConfig;
use crate::mode::ThemeMode;

/// Published theme state
#[derive(Debug, Clone)]
pub struct ThemeSnapshot {
    /// Selected mode
    pub mode: ThemeMode,
    /// Effective scheme
    pub scheme: ColorScheme,
    /// Shorthand for `scheme.is_dark()`
    pub is_dark: bool,
    /// Active token set
    pub tokens: Arc<TokenSet>,
}

impl PartialEq for ThemeSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.scheme == other.scheme
            && (Arc::ptr_eq(&self.tokens, &other.tokens) || self.tokens == other.tokens)
    }
}

#[derive(Debug, Clone, Copy)]
struct ModeState {
    mode: ThemeMode,
    system: ColorScheme,
}

struct Shared {
    state: Mutex<ModeState>,
    tx: watch::Sender<ThemeSnapshot>,
    light: Arc<TokenSet>,
    dark: Arc<TokenSet>,
    store: Arc<dyn PreferenceStore>,
    persistence_key: Option<String>,
}

impl Shared {
    fn snapshot_for(&self, state: ModeState) -> ThemeSnapshot {
        let scheme = state.mode.scheme(state.system);
        let tokens = if scheme.is_dark() { self.dark.clone() } else { self.light.clone() };
        ThemeSnapshot { mode: state.mode, scheme, is_dark: scheme.is_dark(), tokens }
    }

    fn publish(&self, state: ModeState) -> ThemeSnapshot {
        let next = self.snapshot_for(state);
        self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next.clone();
            true
        });
        next
    }

    fn set_mode(&self, mode: ThemeMode) -> ThemeSnapshot {
        let mut state = self.state.lock();
        if state.mode != mode {
            tracing::debug!(from = %state.mode, to = %mode, "Theme mode changed");
        }
        state.mode = mode;
        self.persist(mode);
        self.publish(*state)
    }

    fn apply_system(&self, scheme: ColorScheme) {
        let mut state = self.state.lock();
        state.system = scheme;
        if state.mode != ThemeMode::System {
            tracing::debug!(
                scheme = %scheme,
                mode = %state.mode,
                "System appearance changed, mode is explicit"
            );
            return;
        }
        tracing::debug!(scheme = %scheme, "System appearance changed");
        self.publish(*state);
    }

    fn persist(&self, mode: ThemeMode) {
        let Some(key) = &self.persistence_key else {
            return;
        };
        if let Err(e) = self.store.save(key, mode.as_str()) {
            tracing::warn!("Failed to persist theme mode: {}", e);
        }
    }
}

/// Read the persisted mode, falling back to `default` on absence or failure
fn load_mode(store: &dyn PreferenceStore, key: Option<&str>, default: ThemeMode) -> ThemeMode {
    let Some(key) = key else {
        return default;
    };
    match store.load(key) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring persisted theme mode: {}", e);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            tracing::warn!("Failed to read persisted theme mode: {}", e);
            default
        }
    }
}

/// Cheap, cloneable access to the live theme
#[derive(Clone)]
pub struct ThemeHandle {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("ThemeHandle")
            .field("mode", &snapshot.mode)
            .field("scheme", &snapshot.scheme)
            .finish()
    }
}

impl ThemeHandle {
    /// Current snapshot
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.shared.tx.borrow().clone()
    }

    /// Selected mode
    pub fn mode(&self) -> ThemeMode {
        self.shared.tx.borrow().mode
    }

    /// Effective scheme
    pub fn scheme(&self) -> ColorScheme {
        self.shared.tx.borrow().scheme
    }

    /// Whether the effective scheme is dark
    pub fn is_dark(&self) -> bool {
        self.shared.tx.borrow().is_dark
    }

    /// Active token set
    pub fn tokens(&self) -> Arc<TokenSet> {
        self.shared.tx.borrow().tokens.clone()
    }

    /// Select a mode, persist it (best effort) and publish the result
    pub fn set_mode(&self, mode: ThemeMode) -> ThemeSnapshot {
        self.shared.set_mode(mode)
    }

    /// Switch between light and dark based on the effective scheme
    pub fn toggle(&self) -> ThemeSnapshot {
        let mode = if self.is_dark() { ThemeMode::Light } else { ThemeMode::Dark };
        self.set_mode(mode)
    }

    /// Observe snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.shared.tx.subscribe()
    }
}

/// The mounted theme root
///
/// Dropping or unmounting the provider stops the appearance observer.
pub struct ThemeProvider {
    handle: ThemeHandle,
    observer: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("handle", &self.handle)
            .field("observing", &self.is_observing())
            .finish()
    }
}

impl ThemeProvider {
    /// Mount the provider
    ///
    /// Reads the persisted mode once, reads the system appearance, and starts
    /// observing appearance changes when called inside a tokio runtime.
    pub fn mount(
        config: ThemeConfig,
        store: Arc<dyn PreferenceStore>,
        appearance: Arc<dyn AppearanceSource>,
    ) -> Self {
        let key = config.persistence_key.as_deref();
        let mode = load_mode(store.as_ref(), key, config.default_mode);

        let receiver = match appearance.subscribe() {
            Ok(rx) => Some(rx),
            Err(e) => {
                tracing::warn!("Appearance observer unavailable, using static scheme: {}", e);
                None
            }
        };
        let system = match &receiver {
            Some(rx) => *rx.borrow(),
            None => appearance.current(),
        };

        let light = Arc::new(config.tokens_for(false));
        let dark = Arc::new(config.tokens_for(true));
        let state = ModeState { mode, system };

        let scheme = mode.scheme(system);
        let initial = ThemeSnapshot {
            mode,
            scheme,
            is_dark: scheme.is_dark(),
            tokens: if scheme.is_dark() { dark.clone() } else { light.clone() },
        };
        let (tx, _) = watch::channel(initial);

        let shared = Arc::new(Shared {
            state: Mutex::new(state),
            tx,
            light,
            dark,
            store,
            persistence_key: config.persistence_key,
        });

        let observer = receiver.and_then(|rx| spawn_observer(Arc::downgrade(&shared), rx));
        tracing::debug!(mode = %mode, scheme = %scheme, "Theme provider mounted");

        Self { handle: ThemeHandle { shared }, observer }
    }

    /// A cloneable handle
    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    /// Whether appearance changes are being observed
    pub fn is_observing(&self) -> bool {
        self.observer.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop observing and release the provider
    pub fn unmount(mut self) {
        self.stop_observer();
    }

    fn stop_observer(&mut self) {
        if let Some(task) = self.observer.take() {
            task.abort();
        }
    }
}

impl Deref for ThemeProvider {
    type Target = ThemeHandle;

    fn deref(&self) -> &ThemeHandle {
        &self.handle
    }
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        self.stop_observer();
    }
}

fn spawn_observer(
    shared: Weak<Shared>,
    mut rx: watch::Receiver<ColorScheme>,
) -> Option<JoinHandle<()>> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::warn!("No async runtime, system appearance changes will not be observed");
        return None;
    };
    Some(runtime.spawn(async move {
        while rx.changed().await.is_ok() {
            let scheme = *rx.borrow_and_update();
            match shared.upgrade() {
                Some(shared) => shared.apply_system(scheme),
                None => break,
            }
        }
    }))
}
