//! Responsive block selection
//!
//! Breakpoints are mobile-first: a block declared for `sm` applies at `sm`
//! and every larger breakpoint until a larger block takes over. Only the
//! single closest block at or below the active breakpoint applies.

use std::collections::BTreeMap;
use style_tokens::Breakpoint;

use crate::props::StyleMap;

/// Pick the override block for the active breakpoint
///
/// Walks `order` downward from `active` and returns the first declared block.
/// Returns an empty map when nothing applies or `active` is not in `order`.
pub fn resolve_responsive(
    blocks: &BTreeMap<Breakpoint, StyleMap>,
    active: Breakpoint,
    order: &[Breakpoint],
) -> StyleMap {
    let Some(position) = order.iter().position(|b| *b == active) else {
        tracing::debug!(breakpoint = %active, "active breakpoint not in breakpoint order");
        return StyleMap::new();
    };

    order[..=position]
        .iter()
        .rev()
        .find_map(|bp| blocks.get(bp))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_tokens::StyleValue;

    fn blocks() -> BTreeMap<Breakpoint, StyleMap> {
        let mut blocks = BTreeMap::new();
        blocks.insert(
            Breakpoint::Sm,
            StyleMap::from([("padding".to_string(), StyleValue::from(8))]),
        );
        blocks.insert(
            Breakpoint::Xl,
            StyleMap::from([
                ("padding".to_string(), StyleValue::from(24)),
                ("width".to_string(), StyleValue::from(960)),
            ]),
        );
        blocks
    }

    #[test]
    fn test_closest_lower_block_applies() {
        let order = Breakpoint::ORDER;
        assert_eq!(
            resolve_responsive(&blocks(), Breakpoint::Md, &order)["padding"],
            StyleValue::from(8)
        );
        assert_eq!(
            resolve_responsive(&blocks(), Breakpoint::Sm, &order)["padding"],
            StyleValue::from(8)
        );
        assert_eq!(
            resolve_responsive(&blocks(), Breakpoint::Xxl, &order)["padding"],
            StyleValue::from(24)
        );
    }

    #[test]
    fn test_below_smallest_block_is_empty() {
        assert!(resolve_responsive(&blocks(), Breakpoint::Xs, &Breakpoint::ORDER).is_empty());
    }

    #[test]
    fn test_only_one_block_applies() {
        // md sits between sm and xl: width from xl must not leak in
        let out = resolve_responsive(&blocks(), Breakpoint::Lg, &Breakpoint::ORDER);
        assert_eq!(out.len(), 1);
        assert!(!out.contains_key("width"));
    }

    #[test]
    fn test_exact_match() {
        let out = resolve_responsive(&blocks(), Breakpoint::Xl, &Breakpoint::ORDER);
        assert_eq!(out["width"], StyleValue::from(960));
    }

    #[test]
    fn test_active_not_in_order() {
        let order = [Breakpoint::Xs, Breakpoint::Md];
        assert!(resolve_responsive(&blocks(), Breakpoint::Xl, &order).is_empty());
    }

    #[test]
    fn test_custom_order_skips_undeclared_breakpoints() {
        // Sm is not part of this order, so its block is never considered
        let order = [Breakpoint::Xs, Breakpoint::Md, Breakpoint::Xl];
        assert!(resolve_responsive(&blocks(), Breakpoint::Md, &order).is_empty());
    }

    #[test]
    fn test_no_blocks() {
        assert!(
            resolve_responsive(&BTreeMap::new(), Breakpoint::Md, &Breakpoint::ORDER).is_empty()
        );
    }
}
