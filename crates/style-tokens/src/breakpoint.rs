//! Breakpoints and the breakpoint scale
//!
//! Breakpoint names are fixed and ascending. Their minimum widths come from
//! the `breakpoints` token category so a theme can move them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::TokenCategory;
use crate::error::TokenError;
use crate::set::TokenSet;

/// Named viewport threshold, ascending by width
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    /// Extra small (phones, portrait)
    #[serde(rename = "xs")]
    Xs,
    /// Small
    #[serde(rename = "sm")]
    Sm,
    /// Medium (tablets)
    #[serde(rename = "md")]
    Md,
    /// Large
    #[serde(rename = "lg")]
    Lg,
    /// Extra large
    #[serde(rename = "xl")]
    Xl,
    /// Double extra large
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Default ascending order
    pub const ORDER: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Token key / serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Fallback minimum width (px) when the token set lacks an entry
    pub fn default_min_width(&self) -> f64 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 500.0,
            Breakpoint::Md => 800.0,
            Breakpoint::Lg => 1100.0,
            Breakpoint::Xl => 1300.0,
            Breakpoint::Xxl => 1600.0,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('$').unwrap_or(s);
        Breakpoint::ORDER
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| TokenError::UnknownBreakpoint(s.to_string()))
    }
}

/// Minimum widths for every breakpoint, ascending
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointScale {
    steps: Vec<(Breakpoint, f64)>,
}

impl Default for BreakpointScale {
    fn default() -> Self {
        Self { steps: Breakpoint::ORDER.iter().map(|b| (*b, b.default_min_width())).collect() }
    }
}

impl BreakpointScale {
    /// Build the scale from the `breakpoints` token category
    ///
    /// Missing or non-numeric entries fall back to the built-in widths.
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        let mut steps: Vec<(Breakpoint, f64)> = Breakpoint::ORDER
            .iter()
            .map(|b| {
                let width = tokens
                    .get(TokenCategory::Breakpoints, b.as_str())
                    .and_then(|v| v.as_f64())
                    .unwrap_or_else(|| b.default_min_width());
                (*b, width)
            })
            .collect();
        steps.sort_by(|a, b| a.0.cmp(&b.0));
        Self { steps }
    }

    /// Ascending breakpoint order
    pub fn order(&self) -> Vec<Breakpoint> {
        self.steps.iter().map(|(b, _)| *b).collect()
    }

    /// Minimum width for a breakpoint
    pub fn min_width(&self, breakpoint: Breakpoint) -> Option<f64> {
        self.steps.iter().find(|(b, _)| *b == breakpoint).map(|(_, w)| *w)
    }

    /// Active breakpoint for a viewport width: the largest breakpoint whose
    /// minimum width is at or below `width`
    pub fn active_for(&self, width: f64) -> Breakpoint {
        self.steps
            .iter()
            .rev()
            .find(|(_, min)| width >= *min)
            .map(|(b, _)| *b)
            .unwrap_or(Breakpoint::Xs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_order() {
        assert!(Breakpoint::Xs < Breakpoint::Sm);
        assert!(Breakpoint::Xl < Breakpoint::Xxl);
    }

    #[test]
    fn test_breakpoint_from_str() {
        assert_eq!("md".parse::<Breakpoint>().unwrap(), Breakpoint::Md);
        assert_eq!("$2xl".parse::<Breakpoint>().unwrap(), Breakpoint::Xxl);
        assert!("xxl".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn test_breakpoint_serde() {
        assert_eq!(serde_json::to_string(&Breakpoint::Xxl).unwrap(), "\"2xl\"");
        let bp: Breakpoint = serde_json::from_str("\"sm\"").unwrap();
        assert_eq!(bp, Breakpoint::Sm);
    }

    #[test]
    fn test_active_for_default_scale() {
        let scale = BreakpointScale::default();
        assert_eq!(scale.active_for(320.0), Breakpoint::Xs);
        assert_eq!(scale.active_for(500.0), Breakpoint::Sm);
        assert_eq!(scale.active_for(799.0), Breakpoint::Sm);
        assert_eq!(scale.active_for(800.0), Breakpoint::Md);
        assert_eq!(scale.active_for(4000.0), Breakpoint::Xxl);
    }

    #[test]
    fn test_scale_from_tokens_uses_overrides() {
        let tokens = TokenSet::new().with(TokenCategory::Breakpoints, "md", 700.0);
        let scale = BreakpointScale::from_tokens(&tokens);
        assert_eq!(scale.min_width(Breakpoint::Md), Some(700.0));
        assert_eq!(scale.min_width(Breakpoint::Lg), Some(1100.0));
        assert_eq!(scale.active_for(750.0), Breakpoint::Md);
    }

    #[test]
    fn test_negative_width_is_xs() {
        assert_eq!(BreakpointScale::default().active_for(-10.0), Breakpoint::Xs);
    }
}
