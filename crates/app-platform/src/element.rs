//! Abstract element identities and their host primitives

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlatformError, Result};
use crate::target::RenderTarget;

/// Concrete web tags accepted as pass-through identities
const WEB_PRIMITIVES: &[&str] = &[
    "a", "article", "aside", "button", "div", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "img", "input", "label", "li", "main", "nav", "ol", "p", "section", "select", "span",
    "textarea", "ul",
];

/// Concrete native primitives accepted as pass-through identities
const NATIVE_PRIMITIVES: &[&str] = &[
    "ActivityIndicator",
    "FlatList",
    "Image",
    "Pressable",
    "SafeAreaView",
    "ScrollView",
    "SectionList",
    "Switch",
    "Text",
    "TextInput",
    "TouchableOpacity",
    "View",
];

/// Platform-neutral element identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Layout container
    View,
    /// Text run
    Text,
    /// Image
    Image,
    /// Scrollable container
    ScrollView,
    /// Single-line text field
    TextInput,
    /// Press target
    Pressable,
    /// Navigation link
    Link,
    /// A concrete host primitive name, used verbatim when the target has it
    Host(String),
}

impl ElementKind {
    /// Host primitive for this element on `target`
    ///
    /// Interactive text becomes a `button` on the web.
    pub fn host_tag(&self, target: RenderTarget, interactive: bool) -> Result<&str> {
        let tag = match (self, target) {
            (ElementKind::View, RenderTarget::Web) => "div",
            (ElementKind::Text, RenderTarget::Web) if interactive => "button",
            (ElementKind::Text, RenderTarget::Web) => "span",
            (ElementKind::Image, RenderTarget::Web) => "img",
            (ElementKind::ScrollView, RenderTarget::Web) => "div",
            (ElementKind::TextInput, RenderTarget::Web) => "input",
            (ElementKind::Pressable, RenderTarget::Web) => "button",
            (ElementKind::Link, RenderTarget::Web) => "a",

            (ElementKind::View, RenderTarget::Native) => "View",
            (ElementKind::Text, RenderTarget::Native) => "Text",
            (ElementKind::Image, RenderTarget::Native) => "Image",
            (ElementKind::ScrollView, RenderTarget::Native) => "ScrollView",
            (ElementKind::TextInput, RenderTarget::Native) => "TextInput",
            (ElementKind::Pressable, RenderTarget::Native) => "Pressable",
            (ElementKind::Link, RenderTarget::Native) => "Text",

            (ElementKind::Host(name), target) => {
                let known = match target {
                    RenderTarget::Web => WEB_PRIMITIVES,
                    RenderTarget::Native => NATIVE_PRIMITIVES,
                };
                if known.contains(&name.as_str()) {
                    return Ok(name.as_str());
                }
                return Err(PlatformError::MissingElementMapping { element: name.clone(), target });
            }
        };
        Ok(tag)
    }

    /// Whether the element always receives presses
    pub fn is_pressable(&self) -> bool {
        matches!(self, ElementKind::Pressable | ElementKind::Link)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Host(name) => f.write_str(name),
            other => write!(f, "{:?}", other),
        }
    }
}

impl From<&str> for ElementKind {
    fn from(name: &str) -> Self {
        match name {
            "View" => ElementKind::View,
            "Text" => ElementKind::Text,
            "Image" => ElementKind::Image,
            "ScrollView" => ElementKind::ScrollView,
            "TextInput" => ElementKind::TextInput,
            "Pressable" => ElementKind::Pressable,
            "Link" => ElementKind::Link,
            other => ElementKind::Host(other.to_string()),
        }
    }
}
