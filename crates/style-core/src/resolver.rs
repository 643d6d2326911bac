//! Style prop resolution
//!
//! Turns declared properties into long-form properties with token aliases
//! replaced by primitive values. Values that are not a known token key stay
//! as literals; resolution never fails.

use style_tokens::{StyleValue, TokenCategory, TokenSet};

use crate::aliases;
use crate::props::{AnimationDirectives, StyleMap, StyleProps};

/// Expand shorthand names to long forms without touching values
///
/// Shorthands are applied before long forms, so when both spell the same
/// property the long form wins regardless of map order.
pub fn normalize(props: &StyleMap) -> StyleMap {
    let mut out = StyleMap::new();
    for (name, value) in props.iter().filter(|(name, _)| aliases::is_shorthand(name)) {
        out.insert(aliases::canonical(name).to_string(), value.clone());
    }
    for (name, value) in props.iter().filter(|(name, _)| !aliases::is_shorthand(name)) {
        out.insert(name.clone(), value.clone());
    }
    out
}

/// Resolve a property map against a token set
///
/// Output keys are long-form names. Unrecognized names pass through verbatim.
pub fn resolve(props: &StyleMap, tokens: &TokenSet) -> StyleMap {
    normalize(props)
        .into_iter()
        .map(|(name, value)| {
            let resolved = resolve_value(&name, &value, tokens);
            (name, resolved)
        })
        .collect()
}

/// Resolve one value for a long-form property name
pub fn resolve_value(property: &str, value: &StyleValue, tokens: &TokenSet) -> StyleValue {
    let Some(category) = aliases::category_for(aliases::canonical(property)) else {
        return value.clone();
    };
    let StyleValue::Text(raw) = value else {
        return value.clone();
    };
    lookup(category, raw, tokens).unwrap_or_else(|| value.clone())
}

fn lookup(category: TokenCategory, raw: &str, tokens: &TokenSet) -> Option<StyleValue> {
    if let Some(value) = tokens.get(category, raw) {
        return Some(value.clone());
    }
    // Negative spacing: "-md" / "-$md"
    if category == TokenCategory::Space {
        if let Some(stripped) = raw.strip_prefix('-') {
            if let Some(StyleValue::Number(n)) = tokens.get(category, stripped) {
                return Some(StyleValue::Number(-n));
            }
        }
    }
    None
}

/// Normalize every block of a bag (base, pseudo, responsive, enter/exit)
pub fn normalize_props(props: &StyleProps) -> StyleProps {
    map_blocks(props, normalize)
}

/// Resolve every block of a bag (base, pseudo, responsive, enter/exit)
pub fn resolve_props(props: &StyleProps, tokens: &TokenSet) -> StyleProps {
    map_blocks(props, |block| resolve(block, tokens))
}

fn map_blocks(props: &StyleProps, f: impl Fn(&StyleMap) -> StyleMap) -> StyleProps {
    StyleProps {
        base: f(&props.base),
        pseudo: props.pseudo.iter().map(|(state, block)| (*state, f(block))).collect(),
        responsive: props.responsive.iter().map(|(bp, block)| (*bp, f(block))).collect(),
        animation: AnimationDirectives {
            animation: props.animation.animation.clone(),
            enter: props.animation.enter.as_ref().map(&f),
            exit: props.animation.exit.as_ref().map(&f),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PseudoState;

    fn tokens() -> TokenSet {
        TokenSet::new()
            .with(TokenCategory::Space, "sm", 8.0)
            .with(TokenCategory::Space, "md", 12.0)
            .with(TokenCategory::Colors, "primary500", "#9D4EDD")
            .with(TokenCategory::Colors, "text", "#000000")
            .with(TokenCategory::FontSizes, "lg", 18.0)
            .with(TokenCategory::Radii, "md", 8.0)
            .with(TokenCategory::ZIndices, "modal", 50.0)
    }

    fn map(entries: &[(&str, StyleValue)]) -> StyleMap {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_token_substitution_per_category() {
        let resolved = resolve(
            &map(&[
                ("marginTop", "md".into()),
                ("backgroundColor", "primary500".into()),
                ("fontSize", "lg".into()),
                ("borderRadius", "md".into()),
                ("zIndex", "modal".into()),
            ]),
            &tokens(),
        );
        assert_eq!(resolved["marginTop"], StyleValue::from(12.0));
        assert_eq!(resolved["backgroundColor"], StyleValue::from("#9D4EDD"));
        assert_eq!(resolved["fontSize"], StyleValue::from(18.0));
        assert_eq!(resolved["borderRadius"], StyleValue::from(8.0));
        assert_eq!(resolved["zIndex"], StyleValue::from(50.0));
    }

    #[test]
    fn test_category_is_respected() {
        // "primary500" is a color, not a spacing token
        let resolved = resolve(&map(&[("marginTop", "primary500".into())]), &tokens());
        assert_eq!(resolved["marginTop"], StyleValue::from("primary500"));
    }

    #[test]
    fn test_literals_pass_through() {
        let resolved = resolve(
            &map(&[("color", "red".into()), ("padding", 3.0.into()), ("marginTop", "xxl".into())]),
            &tokens(),
        );
        assert_eq!(resolved["color"], StyleValue::from("red"));
        assert_eq!(resolved["padding"], StyleValue::from(3.0));
        assert_eq!(resolved["marginTop"], StyleValue::from("xxl"));
    }

    #[test]
    fn test_unknown_properties_pass_through() {
        let resolved =
            resolve(&map(&[("cursor", "pointer".into()), ("md", "md".into())]), &tokens());
        assert_eq!(resolved["cursor"], StyleValue::from("pointer"));
        assert_eq!(resolved["md"], StyleValue::from("md"));
    }

    #[test]
    fn test_shorthand_equals_long_form() {
        for (short, long, value) in [
            ("mt", "marginTop", StyleValue::from("md")),
            ("bg", "backgroundColor", StyleValue::from("primary500")),
            ("px", "paddingHorizontal", StyleValue::from("sm")),
            ("fos", "fontSize", StyleValue::from("lg")),
            ("o", "opacity", StyleValue::from(0.5)),
        ] {
            let a = resolve(&map(&[(short, value.clone())]), &tokens());
            let b = resolve(&map(&[(long, value)]), &tokens());
            assert_eq!(a, b, "{} vs {}", short, long);
        }
    }

    #[test]
    fn test_long_form_wins_over_shorthand() {
        // BTreeMap order puts "backgroundColor" before "bg"; the long form must still win
        let resolved =
            resolve(&map(&[("bg", "red".into()), ("backgroundColor", "blue".into())]), &tokens());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["backgroundColor"], StyleValue::from("blue"));

        let resolved = resolve(&map(&[("marginTop", 1.0.into()), ("mt", 2.0.into())]), &tokens());
        assert_eq!(resolved["marginTop"], StyleValue::from(1.0));
    }

    #[test]
    fn test_dollar_prefixed_tokens() {
        let resolved =
            resolve(&map(&[("bg", "$primary500".into()), ("$unknown", 1.0.into())]), &tokens());
        assert_eq!(resolved["backgroundColor"], StyleValue::from("#9D4EDD"));
        assert_eq!(resolved["$unknown"], StyleValue::from(1.0));
    }

    #[test]
    fn test_negative_spacing_tokens() {
        let declared = map(&[("mt", "-md".into()), ("ml", "-$sm".into()), ("mr", "-nope".into())]);
        let resolved = resolve(&declared, &tokens());
        assert_eq!(resolved["marginTop"], StyleValue::from(-12.0));
        assert_eq!(resolved["marginLeft"], StyleValue::from(-8.0));
        assert_eq!(resolved["marginRight"], StyleValue::from("-nope"));
    }

    #[test]
    fn test_resolution_is_pure() {
        let input = map(&[("bg", "primary500".into()), ("p", "md".into())]);
        let tokens = tokens();
        assert_eq!(resolve(&input, &tokens), resolve(&input, &tokens));
    }

    #[test]
    fn test_resolve_props_covers_every_block() {
        let props = StyleProps::new()
            .set("bg", "primary500")
            .hover(StyleProps::new().set("col", "text"))
            .at(style_tokens::Breakpoint::Md, StyleProps::new().set("p", "md"))
            .enter(StyleProps::new().set("mt", "sm"));

        let resolved = resolve_props(&props, &tokens());
        assert_eq!(resolved.base["backgroundColor"], StyleValue::from("#9D4EDD"));
        assert_eq!(resolved.pseudo[&PseudoState::Hover]["color"], StyleValue::from("#000000"));
        assert_eq!(
            resolved.responsive[&style_tokens::Breakpoint::Md]["padding"],
            StyleValue::from(12.0)
        );
        assert_eq!(resolved.animation.enter.unwrap()["marginTop"], StyleValue::from(8.0));
    }

    #[test]
    fn test_normalize_keeps_token_aliases() {
        let normalized = normalize(&map(&[("bg", "$primary500".into())]));
        assert_eq!(normalized["backgroundColor"], StyleValue::from("$primary500"));
    }
}
