//! Interaction event handling
//!
//! Hosts report raw events; [`InteractionTracker`] folds them into the single
//! [`InteractionState`] the style layer understands. Precedence when several
//! conditions hold: disabled, pressed, focused, hovered, idle.

use serde::{Deserialize, Serialize};
use style_core::InteractionState;

/// Raw interaction event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionEvent {
    /// Pointer entered the element
    PointerEnter,
    /// Pointer left the element
    PointerLeave,
    /// Press started
    PressIn,
    /// Press ended or was cancelled
    PressOut,
    /// Element gained focus
    Focus,
    /// Element lost focus
    Blur,
    /// Element became disabled
    Disable,
    /// Element became enabled
    Enable,
}

/// Per-element interaction state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionTracker {
    hovered: bool,
    pressed: bool,
    focused: bool,
    disabled: bool,
}

impl InteractionTracker {
    /// Tracker in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for an element that starts disabled
    pub fn disabled() -> Self {
        Self { disabled: true, ..Self::default() }
    }

    /// Next tracker after `event`
    ///
    /// Presses and focus are ignored while disabled; disabling clears them.
    pub fn apply(self, event: InteractionEvent) -> Self {
        let mut next = self;
        match event {
            InteractionEvent::PointerEnter => next.hovered = true,
            InteractionEvent::PointerLeave => {
                next.hovered = false;
                next.pressed = false;
            }
            InteractionEvent::PressIn if !self.disabled => next.pressed = true,
            InteractionEvent::PressOut => next.pressed = false,
            InteractionEvent::Focus if !self.disabled => next.focused = true,
            InteractionEvent::Blur => next.focused = false,
            InteractionEvent::Disable => {
                next.disabled = true;
                next.pressed = false;
                next.focused = false;
            }
            InteractionEvent::Enable => next.disabled = false,
            InteractionEvent::PressIn | InteractionEvent::Focus => {}
        }
        next
    }

    /// Apply an event in place and return the resulting state
    pub fn handle(&mut self, event: InteractionEvent) -> InteractionState {
        *self = self.apply(event);
        self.state()
    }

    /// Current state
    pub fn state(&self) -> InteractionState {
        if self.disabled {
            InteractionState::Disabled
        } else if self.pressed {
            InteractionState::Pressed
        } else if self.focused {
            InteractionState::Focused
        } else if self.hovered {
            InteractionState::Hover
        } else {
            InteractionState::Idle
        }
    }
}
