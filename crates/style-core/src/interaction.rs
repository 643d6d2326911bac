//! Interaction state → active pseudo-state override
//!
//! State transitions belong to the platform layer; this module only maps a
//! state and a set of pseudo blocks to the override that applies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::props::{overlay, PseudoState, StyleMap};

/// Interaction state of one rendered element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    /// No interaction
    #[default]
    Idle,
    /// Pointer over the element
    Hover,
    /// Being pressed
    Pressed,
    /// Focused
    Focused,
    /// Disabled; suppresses every other state
    Disabled,
}

impl InteractionState {
    /// Pseudo blocks that apply in this state, lowest precedence first
    pub fn pseudo_layers(&self) -> &'static [PseudoState] {
        match self {
            InteractionState::Idle => &[],
            InteractionState::Hover => &[PseudoState::Hover],
            InteractionState::Pressed => &[PseudoState::Active, PseudoState::Press],
            InteractionState::Focused => &[PseudoState::Focus],
            InteractionState::Disabled => &[PseudoState::Disabled],
        }
    }
}

/// Declared pseudo blocks active in `state`, lowest precedence first
pub fn active_layers(
    state: InteractionState,
    pseudo: &BTreeMap<PseudoState, StyleMap>,
) -> Vec<&StyleMap> {
    state.pseudo_layers().iter().filter_map(|layer| pseudo.get(layer)).collect()
}

/// Single merged override for `state`
pub fn active_override(
    state: InteractionState,
    pseudo: &BTreeMap<PseudoState, StyleMap>,
) -> StyleMap {
    let mut out = StyleMap::new();
    for layer in active_layers(state, pseudo) {
        overlay(&mut out, layer);
    }
    out
}
