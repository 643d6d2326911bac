//! The style root
//!
//! One [`StyleRoot`] is mounted per application. It fixes the render target,
//! owns the theme provider and the viewport tracker, and renders registered
//! components against the current tokens and breakpoint.

use std::sync::Arc;

use app_platform::{
    AppearanceSource, BreakpointTracker, ComponentRegistry, ElementKind, HostElement, HostNode,
    PlatformAdapter, RenderTarget, StaticAppearance,
};
use storage::{MemoryStore, PreferenceStore};
use style_core::{
    resolve_component, ComponentDescription, Instance, InteractionState, ResolveContext,
    ResolvedStyle,
};
use style_tokens::{Breakpoint, BreakpointScale};
use theme_state::{ThemeConfig, ThemeHandle, ThemeProvider};
use tokio::sync::watch;

/// Viewport width assumed until the host reports one
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// Options for [`StyleRoot::mount`]
pub struct RootOptions {
    /// Render target; detected from the host when `None`
    pub target: Option<RenderTarget>,
    /// Theme configuration
    pub theme: ThemeConfig,
    /// Storage for the selected theme mode
    pub store: Arc<dyn PreferenceStore>,
    /// System appearance source
    pub appearance: Arc<dyn AppearanceSource>,
    /// Initial viewport width
    pub viewport_width: f64,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            target: None,
            theme: ThemeConfig::default(),
            store: Arc::new(MemoryStore::new()),
            appearance: Arc::new(StaticAppearance::default()),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl RootOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the render target
    pub fn target(mut self, target: RenderTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the theme configuration
    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    /// Set the preference store
    pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = store;
        self
    }

    /// Set the appearance source
    pub fn appearance(mut self, appearance: Arc<dyn AppearanceSource>) -> Self {
        self.appearance = appearance;
        self
    }

    /// Set the initial viewport width
    pub fn viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }
}

/// Application style root
pub struct StyleRoot {
    theme: ThemeProvider,
    viewport: BreakpointTracker,
    registry: ComponentRegistry,
}

impl std::fmt::Debug for StyleRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRoot")
            .field("target", &self.target())
            .field("breakpoint", &self.active_breakpoint())
            .field("theme", &self.theme)
            .finish()
    }
}

impl StyleRoot {
    /// Mount the root
    ///
    /// Never fails: storage and appearance problems degrade to defaults.
    pub fn mount(options: RootOptions) -> Self {
        let target = options.target.unwrap_or_else(RenderTarget::current);
        let theme = ThemeProvider::mount(options.theme, options.store, options.appearance);
        let scale = BreakpointScale::from_tokens(&theme.tokens());
        let viewport = BreakpointTracker::new(scale, options.viewport_width);
        let registry = ComponentRegistry::new(PlatformAdapter::new(target));

        tracing::debug!(target = %target, breakpoint = %viewport.active(), "Style root mounted");
        Self { theme, viewport, registry }
    }

    /// Render target
    pub fn target(&self) -> RenderTarget {
        self.registry.target()
    }

    /// Theme handle
    pub fn theme(&self) -> ThemeHandle {
        self.theme.handle()
    }

    /// Register a component
    pub fn register(
        &self,
        element: ElementKind,
        description: ComponentDescription,
    ) -> app_platform::Result<()> {
        self.registry.register(element, description)
    }

    /// Component registry
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Report a viewport width; returns true when the breakpoint changed
    pub fn set_viewport_width(&self, width: f64) -> bool {
        self.viewport.update_width(width)
    }

    /// Active breakpoint
    pub fn active_breakpoint(&self) -> Breakpoint {
        self.viewport.active()
    }

    /// Observe breakpoint changes
    pub fn subscribe_breakpoint(&self) -> watch::Receiver<Breakpoint> {
        self.viewport.subscribe()
    }

    /// Resolve a registered component without rendering it
    pub fn resolve(&self, name: &str, instance: &Instance) -> Option<ResolvedStyle> {
        let component = self.registry.get(name)?;
        let tokens = self.theme.tokens();
        let ctx = self.context(&tokens);
        Some(resolve_component(&component.description, instance, &ctx))
    }

    /// Resolve and render a registered component with the current theme and
    /// breakpoint
    pub fn render(
        &self,
        name: &str,
        instance: &Instance,
        state: InteractionState,
        children: Vec<HostNode>,
    ) -> Option<HostElement> {
        let tokens = self.theme.tokens();
        let ctx = self.context(&tokens);
        self.registry.render(name, instance, &ctx, state, children)
    }

    /// Stop observing the system appearance
    pub fn unmount(self) {
        self.theme.unmount();
    }

    fn context<'a>(&self, tokens: &'a style_tokens::TokenSet) -> ResolveContext<'a> {
        ResolveContext::new(tokens, self.viewport.active()).with_order(self.viewport.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_core::{StyleProps, StyleValue, VariantAxis};
    use theme_state::ThemeMode;

    fn card() -> ComponentDescription {
        ComponentDescription::new("Card")
            .defaults(
                StyleProps::new()
                    .set("bg", "$background")
                    .set("p", "sm")
                    .at(Breakpoint::Lg, StyleProps::new().set("p", "lg")),
            )
            .axis(VariantAxis::new("elevated").option(true, StyleProps::new().set("shadow", "md")))
    }

    fn root(target: RenderTarget) -> StyleRoot {
        let root = StyleRoot::mount(RootOptions::new().target(target).viewport_width(600.0));
        root.register(ElementKind::View, card()).unwrap();
        root
    }

    #[test]
    fn test_render_uses_current_breakpoint() {
        let root = root(RenderTarget::Native);
        assert_eq!(root.active_breakpoint(), Breakpoint::Sm);

        let small = root.resolve("Card", &Instance::new()).unwrap();
        assert_eq!(small.base["padding"], StyleValue::from(8.0));

        assert!(root.set_viewport_width(1200.0));
        let large = root.resolve("Card", &Instance::new()).unwrap();
        assert_eq!(large.base["padding"], StyleValue::from(16.0));
    }

    #[test]
    fn test_render_follows_theme() {
        let root = root(RenderTarget::Web);
        root.theme().set_mode(ThemeMode::Light);
        let light = root.render("Card", &Instance::new(), InteractionState::Idle, vec![]).unwrap();

        root.theme().set_mode(ThemeMode::Dark);
        let dark = root.render("Card", &Instance::new(), InteractionState::Idle, vec![]).unwrap();

        assert_eq!(light.tag, "div");
        assert_ne!(
            light.style.effective()["backgroundColor"],
            dark.style.effective()["backgroundColor"]
        );
    }

    #[test]
    fn test_unknown_component() {
        let root = root(RenderTarget::Web);
        assert!(root.resolve("Nope", &Instance::new()).is_none());
        assert!(root.render("Nope", &Instance::new(), InteractionState::Idle, vec![]).is_none());
    }
}
