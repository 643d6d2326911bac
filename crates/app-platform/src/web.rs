//! Web style emission
//!
//! The base style becomes a flat inline style object. Pseudo-state blocks are
//! emitted twice: as CSS rules keyed by state selector, and merged inline for
//! the interaction state the host reports, so hosts without a stylesheet
//! still get the right look.

use serde::Serialize;
use style_core::{InteractionState, PseudoState, ResolvedStyle, StyleMap, StyleValue};
use style_tokens::value::fmt_number;

/// Properties whose numbers are emitted without a unit
const UNITLESS: &[&str] = &[
    "aspectRatio",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "opacity",
    "order",
    "zIndex",
];

/// Rule emission order; later rules win in the cascade
const RULE_ORDER: [PseudoState; 5] = [
    PseudoState::Hover,
    PseudoState::Focus,
    PseudoState::Active,
    PseudoState::Press,
    PseudoState::Disabled,
];

/// CSS selector suffix for a pseudo state
pub fn selector_for(state: PseudoState) -> &'static str {
    match state {
        PseudoState::Hover => ":hover",
        PseudoState::Press | PseudoState::Active => ":active",
        PseudoState::Focus => ":focus-visible",
        PseudoState::Disabled => ":disabled",
    }
}

/// One state-conditional rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssRule {
    /// Selector suffix (`:hover`, ...)
    pub selector: &'static str,
    /// Declarations, already expanded for the web
    pub declarations: StyleMap,
}

impl CssRule {
    /// Serialize under a class name
    pub fn to_css(&self, class: &str) -> String {
        format!(".{}{} {{ {} }}", class, self.selector, declarations(&self.declarations))
    }
}

/// Web output for one element
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebStyle {
    /// Inline style object (base plus the current state's override)
    pub inline: StyleMap,
    /// State rules for a stylesheet
    pub rules: Vec<CssRule>,
}

impl WebStyle {
    /// Build the web output for a resolved style in the given state
    pub fn from_resolved(style: &ResolvedStyle, state: InteractionState) -> Self {
        let mut inline = expand(&style.for_state(state));
        if let Some(animation) = &style.animation {
            if let Some(duration) = animation.duration_ms {
                let easing = animation.easing.as_deref().unwrap_or("ease");
                inline.insert(
                    "transition".to_string(),
                    StyleValue::Text(format!("all {}ms {}", fmt_number(duration), easing)),
                );
            }
        }

        let rules = RULE_ORDER
            .iter()
            .filter_map(|pseudo| {
                style.pseudo.get(pseudo).map(|block| CssRule {
                    selector: selector_for(*pseudo),
                    declarations: expand(block),
                })
            })
            .collect();

        Self { inline, rules }
    }

    /// Stylesheet text for a class: base rule then state rules
    pub fn to_css(&self, class: &str) -> String {
        let mut out = format!(".{} {{ {} }}", class, declarations(&self.inline));
        for rule in &self.rules {
            out.push('\n');
            out.push_str(&rule.to_css(class));
        }
        out
    }
}

/// Expand horizontal/vertical spacing into per-edge properties
///
/// Explicit per-edge values win over the axis shorthand. Merging already
/// dropped edges an axis from a later layer replaced, so any edge left here
/// was declared in the same layer as its axis or a later one.
pub fn expand(style: &StyleMap) -> StyleMap {
    let mut out = StyleMap::new();
    for (name, value) in style {
        if let Some(edges) = axis_edges(name) {
            for edge in edges {
                out.insert(edge.to_string(), value.clone());
            }
        }
    }
    for (name, value) in style.iter().filter(|(name, _)| axis_edges(name).is_none()) {
        out.insert(name.clone(), value.clone());
    }
    out
}

fn axis_edges(name: &str) -> Option<[&'static str; 2]> {
    match name {
        "marginHorizontal" => Some(["marginLeft", "marginRight"]),
        "marginVertical" => Some(["marginTop", "marginBottom"]),
        "paddingHorizontal" => Some(["paddingLeft", "paddingRight"]),
        "paddingVertical" => Some(["paddingTop", "paddingBottom"]),
        _ => None,
    }
}

/// `camelCase` → `kebab-case`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// CSS text for one value
pub fn css_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) if UNITLESS.contains(&property) || *n == 0.0 => fmt_number(*n),
        StyleValue::Number(n) => format!("{}px", fmt_number(*n)),
        StyleValue::Shadow(shadow) => shadow.to_css(),
        StyleValue::Raw(_) if property == "transform" => {
            value.transform_css().unwrap_or_else(|| value.to_string())
        }
        other => other.to_string(),
    }
}

fn declarations(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(name, value)| format!("{}: {};", kebab_case(name), css_value(name, value)))
        .collect::<Vec<_>>()
        .join(" ")
}
