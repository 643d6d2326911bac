//! Per-render component instance props

use std::collections::BTreeMap;
use style_tokens::StyleValue;

use crate::props::StyleProps;

/// A component invocation's props for one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    /// Declared style properties
    pub style: StyleProps,
    /// Selected option per variant axis
    pub variants: BTreeMap<String, String>,
    /// Explicit caller style, merged after everything else
    pub style_override: Option<StyleProps>,
    /// Platform passthrough props (handlers, test ids, accessibility labels)
    pub passthrough: BTreeMap<String, StyleValue>,
    /// Whether the element reacts to presses
    pub interactive: bool,
}

impl Instance {
    /// Create an instance with no props
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a style property
    pub fn style(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.base.insert(name.into(), value.into());
        self
    }

    /// Replace the declared style bag
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Select a variant option. Booleans select `"true"` / `"false"`.
    pub fn variant(mut self, axis: impl Into<String>, value: impl ToString) -> Self {
        self.variants.insert(axis.into(), value.to_string());
        self
    }

    /// Set the explicit caller style
    pub fn override_style(mut self, style: StyleProps) -> Self {
        self.style_override = Some(style);
        self
    }

    /// Set a passthrough prop
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.passthrough.insert(name.into(), value.into());
        self
    }

    /// Mark as interactive
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Selected option for an axis
    pub fn selection(&self, axis: &str) -> Option<&str> {
        self.variants.get(axis).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selection_from_bool_and_str() {
        let instance = Instance::new().variant("size", "lg").variant("disabled", true);
        assert_eq!(instance.selection("size"), Some("lg"));
        assert_eq!(instance.selection("disabled"), Some("true"));
        assert_eq!(instance.selection("tone"), None);
    }

    #[test]
    fn test_builder_fields() {
        let instance = Instance::new()
            .style("bg", "red")
            .prop("testID", "submit")
            .interactive(true)
            .override_style(StyleProps::new().set("opacity", 0.5));
        assert_eq!(instance.style.base["bg"], StyleValue::from("red"));
        assert_eq!(instance.passthrough["testID"], StyleValue::from("submit"));
        assert!(instance.interactive);
        assert!(instance.style_override.is_some());
    }
}
