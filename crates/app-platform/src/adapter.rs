//! Platform adapter
//!
//! Turns an abstract element plus its resolved style into a host element for
//! the render target chosen at startup. The target never changes for the
//! lifetime of an adapter.

use serde::Serialize;
use std::collections::BTreeMap;
use style_core::{
    Instance, InteractionState, ResolvedAnimation, ResolvedStyle, StyleMap, StyleValue,
};

use crate::element::ElementKind;
use crate::native::NativeStyle;
use crate::target::RenderTarget;
use crate::web::{self, WebStyle};

/// Target-specific style payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", content = "style", rename_all = "lowercase")]
pub enum HostStyle {
    /// Inline style object plus state rules
    Web(WebStyle),
    /// Style array
    Native(NativeStyle),
}

impl HostStyle {
    /// The style the host ends up applying, as one map
    pub fn effective(&self) -> StyleMap {
        match self {
            HostStyle::Web(style) => style.inline.clone(),
            HostStyle::Native(style) => style.flatten(),
        }
    }
}

/// Converts a resolved style into a target's payload
pub trait StyleEmitter: Send + Sync {
    /// Target this emitter serves
    fn target(&self) -> RenderTarget;

    /// Emit the style for an element in `state`
    fn emit(&self, style: &ResolvedStyle, state: InteractionState) -> HostStyle;

    /// Emit an enter/exit animation block
    fn emit_block(&self, block: &StyleMap) -> StyleMap {
        block.clone()
    }
}

/// Web emitter
#[derive(Debug, Default, Clone, Copy)]
pub struct WebEmitter;

impl StyleEmitter for WebEmitter {
    fn target(&self) -> RenderTarget {
        RenderTarget::Web
    }

    fn emit(&self, style: &ResolvedStyle, state: InteractionState) -> HostStyle {
        HostStyle::Web(WebStyle::from_resolved(style, state))
    }

    fn emit_block(&self, block: &StyleMap) -> StyleMap {
        web::expand(block)
    }
}

/// Native emitter
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEmitter;

impl StyleEmitter for NativeEmitter {
    fn target(&self) -> RenderTarget {
        RenderTarget::Native
    }

    fn emit(&self, style: &ResolvedStyle, state: InteractionState) -> HostStyle {
        HostStyle::Native(NativeStyle::from_resolved(style, state))
    }
}

/// Child of a host element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostNode {
    /// Nested element
    Element(HostElement),
    /// Text content
    Text(String),
}

impl From<HostElement> for HostNode {
    fn from(element: HostElement) -> Self {
        HostNode::Element(element)
    }
}

impl From<&str> for HostNode {
    fn from(text: &str) -> Self {
        HostNode::Text(text.to_string())
    }
}

/// A rendered host element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostElement {
    /// Host primitive name
    pub tag: String,
    /// Style payload
    pub style: HostStyle,
    /// Passthrough props
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, StyleValue>,
    /// Named animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<ResolvedAnimation>,
    /// Style to animate in from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_style: Option<StyleMap>,
    /// Style to animate out to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_style: Option<StyleMap>,
    /// Children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HostNode>,
}

/// Renders abstract elements for one target
pub struct PlatformAdapter {
    emitter: Box<dyn StyleEmitter>,
}

impl std::fmt::Debug for PlatformAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformAdapter").field("target", &self.target()).finish()
    }
}

impl PlatformAdapter {
    /// Adapter for a target
    pub fn new(target: RenderTarget) -> Self {
        let emitter: Box<dyn StyleEmitter> = match target {
            RenderTarget::Web => Box::new(WebEmitter),
            RenderTarget::Native => Box::new(NativeEmitter),
        };
        Self { emitter }
    }

    /// Adapter for the target detected for this process
    pub fn detect() -> Self {
        Self::new(RenderTarget::current())
    }

    /// Adapter around a custom emitter
    pub fn with_emitter(emitter: Box<dyn StyleEmitter>) -> Self {
        Self { emitter }
    }

    /// Active target
    pub fn target(&self) -> RenderTarget {
        self.emitter.target()
    }

    /// Render an element
    ///
    /// Returns `None` and logs an error when the element has no host
    /// primitive on this target.
    pub fn render(
        &self,
        element: &ElementKind,
        style: &ResolvedStyle,
        state: InteractionState,
        children: Vec<HostNode>,
    ) -> Option<HostElement> {
        let interactive = element.is_pressable();
        self.render_element(element, style, state, interactive, BTreeMap::new(), children)
    }

    /// Render an element for a component instance, carrying its passthrough
    /// props and interactivity
    pub fn render_instance(
        &self,
        element: &ElementKind,
        style: &ResolvedStyle,
        instance: &Instance,
        state: InteractionState,
        children: Vec<HostNode>,
    ) -> Option<HostElement> {
        let interactive = instance.interactive || element.is_pressable();
        let props = instance.passthrough.clone();
        self.render_element(element, style, state, interactive, props, children)
    }

    fn render_element(
        &self,
        element: &ElementKind,
        style: &ResolvedStyle,
        state: InteractionState,
        interactive: bool,
        props: BTreeMap<String, StyleValue>,
        children: Vec<HostNode>,
    ) -> Option<HostElement> {
        let tag = match element.host_tag(self.target(), interactive) {
            Ok(tag) => tag.to_string(),
            Err(e) => {
                tracing::error!("Failed to render element: {}", e);
                return None;
            }
        };

        Some(HostElement {
            tag,
            style: self.emitter.emit(style, state),
            props,
            animation: style.animation.clone(),
            enter_style: style.enter.as_ref().map(|block| self.emitter.emit_block(block)),
            exit_style: style.exit.as_ref().map(|block| self.emitter.emit_block(block)),
            children,
        })
    }
}
