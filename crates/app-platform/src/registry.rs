//! Component registry
//!
//! Components are registered once with their element identity and style
//! description. Registration validates both, so configuration mistakes
//! surface at startup rather than on first render.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use style_core::{
    resolve_component, ComponentDescription, Instance, InteractionState, ResolveContext,
};

use crate::adapter::{HostElement, HostNode, PlatformAdapter};
use crate::element::ElementKind;
use crate::error::{PlatformError, Result};
use crate::target::RenderTarget;

/// A registered component
#[derive(Debug)]
pub struct RegisteredComponent {
    /// Element identity
    pub element: ElementKind,
    /// Style description
    pub description: ComponentDescription,
}

/// Named components rendered through one adapter
#[derive(Debug)]
pub struct ComponentRegistry {
    adapter: PlatformAdapter,
    components: RwLock<HashMap<String, Arc<RegisteredComponent>>>,
}

impl ComponentRegistry {
    /// Empty registry for an adapter
    pub fn new(adapter: PlatformAdapter) -> Self {
        Self { adapter, components: RwLock::new(HashMap::new()) }
    }

    /// Render target of the underlying adapter
    pub fn target(&self) -> RenderTarget {
        self.adapter.target()
    }

    /// The underlying adapter
    pub fn adapter(&self) -> &PlatformAdapter {
        &self.adapter
    }

    /// Register a component under its description's name
    ///
    /// Fails when the description is invalid, the element has no host
    /// primitive on this target, or the name is taken.
    pub fn register(&self, element: ElementKind, description: ComponentDescription) -> Result<()> {
        description.validate()?;
        element.host_tag(self.target(), false)?;

        let mut components = self.components.write();
        if components.contains_key(&description.name) {
            return Err(PlatformError::DuplicateComponent(description.name));
        }
        tracing::debug!(component = %description.name, element = %element, "Registered component");
        let name = description.name.clone();
        components.insert(name, Arc::new(RegisteredComponent { element, description }));
        Ok(())
    }

    /// Look up a component
    pub fn get(&self, name: &str) -> Option<Arc<RegisteredComponent>> {
        self.components.read().get(name).cloned()
    }

    /// Whether a component is registered
    pub fn contains(&self, name: &str) -> bool {
        self.components.read().contains_key(name)
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.read().len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.components.read().is_empty()
    }

    /// Resolve and render a component instance
    ///
    /// Unknown component names log an error and render nothing.
    pub fn render(
        &self,
        name: &str,
        instance: &Instance,
        ctx: &ResolveContext<'_>,
        state: InteractionState,
        children: Vec<HostNode>,
    ) -> Option<HostElement> {
        let Some(component) = self.get(name) else {
            tracing::error!(component = name, "Render of unregistered component");
            return None;
        };
        let style = resolve_component(&component.description, instance, ctx);
        self.adapter.render_instance(&component.element, &style, instance, state, children)
    }
}
