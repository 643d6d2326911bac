//! Viewport width → active breakpoint

use style_tokens::{Breakpoint, BreakpointScale};
use tokio::sync::watch;

/// Tracks the active breakpoint as the viewport resizes
///
/// Subscribers are woken only when the breakpoint changes, not on every
/// width change.
#[derive(Debug)]
pub struct BreakpointTracker {
    scale: BreakpointScale,
    tx: watch::Sender<Breakpoint>,
}

impl BreakpointTracker {
    /// Start from an initial viewport width
    pub fn new(scale: BreakpointScale, width: f64) -> Self {
        let (tx, _) = watch::channel(scale.active_for(width));
        Self { scale, tx }
    }

    /// Report a new viewport width; returns true when the breakpoint changed
    pub fn update_width(&self, width: f64) -> bool {
        let next = self.scale.active_for(width);
        let changed = self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        if changed {
            tracing::debug!(width, breakpoint = %next, "Active breakpoint changed");
        }
        changed
    }

    /// Active breakpoint
    pub fn active(&self) -> Breakpoint {
        *self.tx.borrow()
    }

    /// Ascending breakpoint order of the scale
    pub fn order(&self) -> Vec<Breakpoint> {
        self.scale.order()
    }

    /// Observe breakpoint changes
    pub fn subscribe(&self) -> watch::Receiver<Breakpoint> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_breakpoint() {
        let tracker = BreakpointTracker::new(BreakpointScale::default(), 900.0);
        assert_eq!(tracker.active(), Breakpoint::Md);
    }

    #[test]
    fn test_update_reports_only_breakpoint_changes() {
        let tracker = BreakpointTracker::new(BreakpointScale::default(), 900.0);
        let rx = tracker.subscribe();

        assert!(!tracker.update_width(950.0));
        assert!(!rx.has_changed().unwrap());

        assert!(tracker.update_width(1400.0));
        assert_eq!(tracker.active(), Breakpoint::Xl);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_narrow_viewport() {
        let tracker = BreakpointTracker::new(BreakpointScale::default(), 320.0);
        assert_eq!(tracker.active(), Breakpoint::Xs);
        assert_eq!(tracker.order().first(), Some(&Breakpoint::Xs));
    }
}
