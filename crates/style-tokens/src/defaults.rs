//! Built-in token sets
//!
//! [`TokenSet::complete`] populates every category, so it can serve as the
//! base layer of a theme. [`dark_overrides`] only redefines colors.

use crate::category::TokenCategory;
use crate::set::TokenSet;
use crate::value::Shadow;

// =============================================================================
// Colors
// =============================================================================

const LIGHT_COLORS: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("transparent", "transparent"),
    // Neutral contrast scale
    ("contrast0", "#FFFFFF"),
    ("contrast25", "#F7F7F7"),
    ("contrast50", "#F0F0F0"),
    ("contrast100", "#E5E5E5"),
    ("contrast200", "#D4D4D4"),
    ("contrast300", "#B3B3B3"),
    ("contrast400", "#8F8F8F"),
    ("contrast500", "#6B6B6B"),
    ("contrast600", "#525252"),
    ("contrast700", "#3D3D3D"),
    ("contrast800", "#2E2E2E"),
    ("contrast900", "#1F1F1F"),
    ("contrast950", "#141414"),
    ("contrast975", "#0A0A0A"),
    // Primary scale
    ("primary25", "#F5F0FF"),
    ("primary50", "#EDE4FF"),
    ("primary100", "#D9C9FF"),
    ("primary200", "#C4ADFF"),
    ("primary300", "#B392FF"),
    ("primary400", "#A77BFF"),
    ("primary500", "#9D4EDD"),
    ("primary600", "#8A3DC7"),
    ("primary700", "#752FB0"),
    ("primary800", "#602499"),
    ("primary900", "#4A1A7A"),
    // Status
    ("positive500", "#06FFA5"),
    ("positive700", "#04B376"),
    ("negative500", "#EF4444"),
    ("negative700", "#B91C1C"),
    ("warning500", "#FFB703"),
    // Semantic
    ("background", "#FFFFFF"),
    ("backgroundLight", "#F7F7F7"),
    ("text", "#000000"),
    ("textLight", "#525252"),
    ("textInverted", "#FFFFFF"),
    ("link", "#9D4EDD"),
    ("border", "#E5E5E5"),
    ("borderDark", "#D4D4D4"),
    ("icon", "#3D3D3D"),
];

const DARK_COLORS: &[(&str, &str)] = &[
    ("contrast0", "#0A0F1A"),
    ("contrast25", "#111827"),
    ("contrast50", "#1A2332"),
    ("contrast100", "#243044"),
    ("contrast200", "#2E3D55"),
    ("contrast300", "#3D4F6A"),
    ("contrast400", "#4F6380"),
    ("contrast500", "#647896"),
    ("contrast600", "#7B8DAA"),
    ("contrast700", "#96A5BC"),
    ("contrast800", "#B3BFCE"),
    ("contrast900", "#D1D9E3"),
    ("contrast950", "#E8ECF1"),
    ("contrast975", "#F5F7F9"),
    ("primary25", "#1A102A"),
    ("primary50", "#251538"),
    ("primary100", "#351F4F"),
    ("primary600", "#B06BE8"),
    ("primary700", "#C38AF0"),
    ("background", "#0A0F1A"),
    ("backgroundLight", "#111827"),
    ("text", "#FFFFFF"),
    ("textLight", "#96A5BC"),
    ("textInverted", "#000000"),
    ("link", "#B06BE8"),
    ("border", "#243044"),
    ("borderDark", "#2E3D55"),
    ("icon", "#B3BFCE"),
];

// =============================================================================
// Scales
// =============================================================================

/// 4px base unit with t-shirt names
const SPACE: &[(&str, f64)] = &[
    ("0", 0.0),
    ("2xs", 2.0),
    ("xs", 4.0),
    ("sm", 8.0),
    ("md", 12.0),
    ("lg", 16.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 32.0),
    ("4xl", 40.0),
    ("5xl", 48.0),
];

const SIZE: &[(&str, f64)] = &[
    ("xs", 24.0),
    ("sm", 32.0),
    ("md", 40.0),
    ("lg", 48.0),
    ("xl", 64.0),
    ("2xl", 90.0),
    ("hitTarget", 44.0),
];

const FONT_SIZES: &[(&str, f64)] = &[
    ("2xs", 10.0),
    ("xs", 12.0),
    ("sm", 14.0),
    ("md", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
];

const FONT_WEIGHTS: &[(&str, f64)] =
    &[("normal", 400.0), ("medium", 500.0), ("semiBold", 600.0), ("bold", 700.0), ("heavy", 800.0)];

const LINE_HEIGHTS: &[(&str, f64)] = &[
    ("none", 1.0),
    ("tight", 1.25),
    ("snug", 1.375),
    ("normal", 1.5),
    ("relaxed", 1.625),
    ("loose", 2.0),
];

const LETTER_SPACINGS: &[(&str, f64)] = &[("tight", -0.025), ("default", 0.0), ("wide", 0.025)];

const RADII: &[(&str, f64)] = &[
    ("none", 0.0),
    ("sm", 4.0),
    ("md", 8.0),
    ("lg", 12.0),
    ("xl", 16.0),
    ("2xl", 24.0),
    ("full", 9999.0),
];

const BORDER_WIDTHS: &[(&str, f64)] =
    &[("none", 0.0), ("hairline", 0.5), ("thin", 1.0), ("medium", 2.0), ("thick", 3.0)];

const DURATIONS: &[(&str, f64)] = &[
    ("instant", 0.0),
    ("extraFast", 50.0),
    ("fast", 100.0),
    ("normal", 150.0),
    ("moderate", 200.0),
    ("slow", 300.0),
    ("extraSlow", 500.0),
];

const EASINGS: &[(&str, &str)] = &[
    ("default", "cubic-bezier(0.17, 0.73, 0.14, 1)"),
    ("linear", "linear"),
    ("easeIn", "cubic-bezier(0.4, 0, 1, 1)"),
    ("easeOut", "cubic-bezier(0, 0, 0.2, 1)"),
    ("easeInOut", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("bounce", "cubic-bezier(0.34, 1.56, 0.64, 1)"),
];

const Z_INDICES: &[(&str, f64)] = &[
    ("default", 0.0),
    ("dropdown", 10.0),
    ("sticky", 20.0),
    ("fixed", 30.0),
    ("modalBackdrop", 40.0),
    ("modal", 50.0),
    ("popover", 60.0),
    ("tooltip", 70.0),
    ("toast", 80.0),
    ("max", 9999.0),
];

const FONTS: &[(&str, &str)] = &[
    ("body", "Inter, -apple-system, BlinkMacSystemFont, sans-serif"),
    ("heading", "Inter, -apple-system, BlinkMacSystemFont, sans-serif"),
    ("mono", "ui-monospace, SFMono-Regular, Menlo, monospace"),
];

fn extend_numbers(set: &mut TokenSet, category: TokenCategory, entries: &[(&str, f64)]) {
    for (key, value) in entries {
        set.insert(category, *key, *value);
    }
}

fn extend_strings(set: &mut TokenSet, category: TokenCategory, entries: &[(&str, &str)]) {
    for (key, value) in entries {
        set.insert(category, *key, *value);
    }
}

impl TokenSet {
    /// Built-in base token set with every category populated
    pub fn complete() -> Self {
        let mut set = TokenSet::new();
        extend_strings(&mut set, TokenCategory::Colors, LIGHT_COLORS);
        extend_numbers(&mut set, TokenCategory::Space, SPACE);
        extend_numbers(&mut set, TokenCategory::Size, SIZE);
        extend_strings(&mut set, TokenCategory::Fonts, FONTS);
        extend_numbers(&mut set, TokenCategory::FontSizes, FONT_SIZES);
        extend_numbers(&mut set, TokenCategory::FontWeights, FONT_WEIGHTS);
        extend_numbers(&mut set, TokenCategory::LineHeights, LINE_HEIGHTS);
        extend_numbers(&mut set, TokenCategory::LetterSpacings, LETTER_SPACINGS);
        extend_numbers(&mut set, TokenCategory::Radii, RADII);
        extend_numbers(&mut set, TokenCategory::BorderWidths, BORDER_WIDTHS);
        extend_numbers(&mut set, TokenCategory::Durations, DURATIONS);
        extend_strings(&mut set, TokenCategory::Easings, EASINGS);
        extend_numbers(&mut set, TokenCategory::ZIndices, Z_INDICES);

        for breakpoint in crate::breakpoint::Breakpoint::ORDER {
            let min_width = breakpoint.default_min_width();
            set.insert(TokenCategory::Breakpoints, breakpoint.as_str(), min_width);
        }

        let shadows = [
            ("none", Shadow::new(0.0, 0.0, 0.0, 0.0, "transparent")),
            ("xs", Shadow::new(0.0, 1.0, 2.0, 0.0, "rgba(0, 0, 0, 0.05)")),
            ("sm", Shadow::new(0.0, 1.0, 3.0, 0.0, "rgba(0, 0, 0, 0.1)")),
            ("md", Shadow::new(0.0, 4.0, 6.0, -1.0, "rgba(0, 0, 0, 0.1)")),
            ("lg", Shadow::new(0.0, 10.0, 15.0, -3.0, "rgba(0, 0, 0, 0.1)")),
            ("xl", Shadow::new(0.0, 20.0, 25.0, -5.0, "rgba(0, 0, 0, 0.1)")),
        ];
        for (key, shadow) in shadows {
            set.insert(TokenCategory::Shadows, key, shadow);
        }

        set
    }
}

/// Built-in dark-mode color overrides
pub fn dark_overrides() -> TokenSet {
    let mut set = TokenSet::new();
    extend_strings(&mut set, TokenCategory::Colors, DARK_COLORS);
    set
}
