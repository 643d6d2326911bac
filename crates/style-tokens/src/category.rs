//! Token categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

/// A token category: the namespace a token key is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    /// Color values
    Colors,
    /// Spacing scale (margin, padding, gap, offsets)
    Space,
    /// Dimension scale (width, height)
    Size,
    /// Font families
    Fonts,
    /// Font sizes
    FontSizes,
    /// Font weights
    FontWeights,
    /// Line heights
    LineHeights,
    /// Letter spacing
    LetterSpacings,
    /// Border radii
    Radii,
    /// Border widths
    BorderWidths,
    /// Shadows
    Shadows,
    /// Breakpoint minimum widths
    Breakpoints,
    /// Animation durations in milliseconds
    Durations,
    /// Animation easing curves
    Easings,
    /// Stacking layers
    ZIndices,
}

impl TokenCategory {
    /// All categories, in declaration order
    pub const ALL: [TokenCategory; 15] = [
        TokenCategory::Colors,
        TokenCategory::Space,
        TokenCategory::Size,
        TokenCategory::Fonts,
        TokenCategory::FontSizes,
        TokenCategory::FontWeights,
        TokenCategory::LineHeights,
        TokenCategory::LetterSpacings,
        TokenCategory::Radii,
        TokenCategory::BorderWidths,
        TokenCategory::Shadows,
        TokenCategory::Breakpoints,
        TokenCategory::Durations,
        TokenCategory::Easings,
        TokenCategory::ZIndices,
    ];

    /// Serialized name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Space => "space",
            TokenCategory::Size => "size",
            TokenCategory::Fonts => "fonts",
            TokenCategory::FontSizes => "fontSizes",
            TokenCategory::FontWeights => "fontWeights",
            TokenCategory::LineHeights => "lineHeights",
            TokenCategory::LetterSpacings => "letterSpacings",
            TokenCategory::Radii => "radii",
            TokenCategory::BorderWidths => "borderWidths",
            TokenCategory::Shadows => "shadows",
            TokenCategory::Breakpoints => "breakpoints",
            TokenCategory::Durations => "durations",
            TokenCategory::Easings => "easings",
            TokenCategory::ZIndices => "zIndices",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TokenError::UnknownCategory(s.to_string()))
    }
}
