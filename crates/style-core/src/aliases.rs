//! Shorthand aliases and property → token category mapping
//!
//! Both tables are static: a shorthand always expands to exactly one
//! long-form property, and a long-form property reads from at most one
//! token category.

use style_tokens::TokenCategory;

/// Expand a shorthand alias to its long-form property name
///
/// Returns `None` for names that are not shorthands (including long forms).
pub fn expand(name: &str) -> Option<&'static str> {
    let long = match name {
        // Margin
        "m" => "margin",
        "mt" => "marginTop",
        "mr" => "marginRight",
        "mb" => "marginBottom",
        "ml" => "marginLeft",
        "mx" => "marginHorizontal",
        "my" => "marginVertical",
        // Padding
        "p" => "padding",
        "pt" => "paddingTop",
        "pr" => "paddingRight",
        "pb" => "paddingBottom",
        "pl" => "paddingLeft",
        "px" => "paddingHorizontal",
        "py" => "paddingVertical",
        // Color
        "bg" => "backgroundColor",
        "col" => "color",
        "bc" => "borderColor",
        // Border
        "br" => "borderRadius",
        "bw" => "borderWidth",
        "btlr" => "borderTopLeftRadius",
        "btrr" => "borderTopRightRadius",
        "bblr" => "borderBottomLeftRadius",
        "bbrr" => "borderBottomRightRadius",
        // Size
        "w" => "width",
        "h" => "height",
        "minW" => "minWidth",
        "maxW" => "maxWidth",
        "minH" => "minHeight",
        "maxH" => "maxHeight",
        // Flex
        "f" => "flex",
        "fd" => "flexDirection",
        "fw" => "flexWrap",
        "fg" => "flexGrow",
        "fs" => "flexShrink",
        "fb" => "flexBasis",
        "ai" => "alignItems",
        "ac" => "alignContent",
        "als" => "alignSelf",
        "jc" => "justifyContent",
        // Position
        "pos" => "position",
        "t" => "top",
        "r" => "right",
        "b" => "bottom",
        "l" => "left",
        "zi" => "zIndex",
        // Typography
        "ff" => "fontFamily",
        "fos" => "fontSize",
        "fow" => "fontWeight",
        "lh" => "lineHeight",
        "ls" => "letterSpacing",
        "ta" => "textAlign",
        "tt" => "textTransform",
        // Misc
        "o" => "opacity",
        "ov" => "overflow",
        "dsp" => "display",
        "shadow" => "boxShadow",
        _ => return None,
    };
    Some(long)
}

/// Whether `name` is a shorthand alias
pub fn is_shorthand(name: &str) -> bool {
    expand(name).is_some()
}

/// Long-form name for any property name (shorthand or not)
pub fn canonical(name: &str) -> &str {
    expand(name).unwrap_or(name)
}

/// Long-form properties that `property` sets on the host as well as itself
///
/// `padding` covers every padding edge and axis, `paddingHorizontal` covers
/// the left and right edges, and so on.
pub fn covered(property: &str) -> &'static [&'static str] {
    match property {
        "margin" => &[
            "marginTop",
            "marginRight",
            "marginBottom",
            "marginLeft",
            "marginHorizontal",
            "marginVertical",
            "marginStart",
            "marginEnd",
        ],
        "marginHorizontal" => &["marginLeft", "marginRight", "marginStart", "marginEnd"],
        "marginVertical" => &["marginTop", "marginBottom"],
        "padding" => &[
            "paddingTop",
            "paddingRight",
            "paddingBottom",
            "paddingLeft",
            "paddingHorizontal",
            "paddingVertical",
            "paddingStart",
            "paddingEnd",
        ],
        "paddingHorizontal" => &["paddingLeft", "paddingRight", "paddingStart", "paddingEnd"],
        "paddingVertical" => &["paddingTop", "paddingBottom"],
        "borderRadius" => &[
            "borderTopLeftRadius",
            "borderTopRightRadius",
            "borderBottomLeftRadius",
            "borderBottomRightRadius",
        ],
        _ => &[],
    }
}

/// Whether setting `outer` in a later layer replaces `inner` from an earlier one
pub fn overrides(outer: &str, inner: &str) -> bool {
    let outer = canonical(outer);
    let inner = canonical(inner);
    outer == inner || covered(outer).contains(&inner)
}

/// Token category a long-form property reads from
pub fn category_for(property: &str) -> Option<TokenCategory> {
    let category = match property {
        "margin" | "marginTop" | "marginRight" | "marginBottom" | "marginLeft" | "marginHorizontal"
        | "marginVertical" | "marginStart" | "marginEnd" | "padding" | "paddingTop" | "paddingRight"
        | "paddingBottom" | "paddingLeft" | "paddingHorizontal" | "paddingVertical" | "paddingStart"
        | "paddingEnd" | "gap" | "rowGap" | "columnGap" | "top" | "right" | "bottom" | "left" => {
            TokenCategory::Space
        }
        "width" | "height" | "minWidth" | "maxWidth" | "minHeight" | "maxHeight" | "flexBasis" => {
            TokenCategory::Size
        }
        "color" | "backgroundColor" | "borderColor" | "borderTopColor" | "borderRightColor"
        | "borderBottomColor" | "borderLeftColor" | "outlineColor" | "shadowColor"
        | "textDecorationColor" | "placeholderTextColor" | "tintColor" => TokenCategory::Colors,
        "borderRadius" | "borderTopLeftRadius" | "borderTopRightRadius" | "borderBottomLeftRadius"
        | "borderBottomRightRadius" => TokenCategory::Radii,
        "borderWidth" | "borderTopWidth" | "borderRightWidth" | "borderBottomWidth"
        | "borderLeftWidth" | "outlineWidth" => TokenCategory::BorderWidths,
        "fontFamily" => TokenCategory::Fonts,
        "fontSize" => TokenCategory::FontSizes,
        "fontWeight" => TokenCategory::FontWeights,
        "lineHeight" => TokenCategory::LineHeights,
        "letterSpacing" => TokenCategory::LetterSpacings,
        "zIndex" => TokenCategory::ZIndices,
        "boxShadow" => TokenCategory::Shadows,
        _ => return None,
    };
    Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_shorthands() {
        assert_eq!(expand("mt"), Some("marginTop"));
        assert_eq!(expand("bg"), Some("backgroundColor"));
        assert_eq!(expand("px"), Some("paddingHorizontal"));
        assert_eq!(expand("marginTop"), None);
        assert_eq!(expand("unknownThing"), None);
    }

    #[test]
    fn test_every_shorthand_targets_a_long_form() {
        let shorts = [
            "m", "mt", "p", "px", "bg", "br", "bw", "w", "h", "zi", "fos", "fow", "lh", "ls", "ff",
        ];
        for short in shorts {
            let long = expand(short).unwrap();
            assert!(!is_shorthand(long), "{} expands to another shorthand", short);
            assert!(category_for(long).is_some(), "{} has no category", long);
        }
    }

    #[test]
    fn test_category_for() {
        assert_eq!(category_for("marginTop"), Some(TokenCategory::Space));
        assert_eq!(category_for("backgroundColor"), Some(TokenCategory::Colors));
        assert_eq!(category_for("fontWeight"), Some(TokenCategory::FontWeights));
        assert_eq!(category_for("borderRadius"), Some(TokenCategory::Radii));
        assert_eq!(category_for("zIndex"), Some(TokenCategory::ZIndices));
        assert_eq!(category_for("opacity"), None);
    }

    #[test]
    fn test_overrides() {
        assert!(overrides("px", "paddingLeft"));
        assert!(overrides("paddingHorizontal", "pr"));
        assert!(overrides("p", "paddingVertical"));
        assert!(overrides("bg", "backgroundColor"));
        assert!(overrides("br", "borderTopLeftRadius"));
        assert!(!overrides("paddingLeft", "paddingHorizontal"));
        assert!(!overrides("px", "paddingTop"));
        assert!(!overrides("mx", "paddingLeft"));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("bg"), "backgroundColor");
        assert_eq!(canonical("backgroundColor"), "backgroundColor");
        assert_eq!(canonical("custom"), "custom");
    }
}
