//! Native style emission
//!
//! Native hosts take a style array: the base style followed by whichever
//! pseudo-state layers are active, merged right-biased by the host.

use serde::Serialize;
use style_core::{active_layers, overlay, InteractionState, ResolvedStyle, StyleMap};

/// Native output for one element
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NativeStyle {
    /// Style array, lowest precedence first
    pub layers: Vec<StyleMap>,
}

impl NativeStyle {
    /// Build the style array for a resolved style in the given state
    pub fn from_resolved(style: &ResolvedStyle, state: InteractionState) -> Self {
        let mut layers = vec![style.base.clone()];
        layers.extend(active_layers(state, &style.pseudo).into_iter().cloned());
        Self { layers }
    }

    /// Collapse the array the way the host does
    pub fn flatten(&self) -> StyleMap {
        let mut out = StyleMap::new();
        for layer in &self.layers {
            overlay(&mut out, layer);
        }
        out
    }
}
