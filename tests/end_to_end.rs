//! End-to-end style resolution tests
//!
//! Drive the full pipeline through [`StyleRoot`]: token lookup, shorthand
//! expansion, variants, responsive blocks, theme layering and host emission.

use std::sync::Arc;

use anyhow::Result;
use unistyle::platform::{
    ElementKind, HostAppearance, HostStyle, InteractionEvent, InteractionTracker, RenderTarget,
};
use unistyle::style::{
    ComponentDescription, CompoundVariant, Instance, InteractionState, PseudoState, StyleProps,
    StyleValue, VariantAxis,
};
use unistyle::theme::{ThemeConfig, ThemeMode};
use unistyle::tokens::{Breakpoint, ColorScheme, TokenCategory, TokenSet};
use unistyle::{RootOptions, StyleRoot};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn button() -> ComponentDescription {
    ComponentDescription::new("Button")
        .defaults(
            StyleProps::new()
                .set("px", "md")
                .set("py", "sm")
                .set("br", "md")
                .set("color", "black")
                .hover(StyleProps::new().set("o", 0.9))
                .press(StyleProps::new().set("o", 0.7)),
        )
        .axis(
            VariantAxis::new("variant")
                .option("primary", StyleProps::new().set("color", "blue").set("bg", "$primary500"))
                .option("secondary", StyleProps::new().set("bg", "$contrast100")),
        )
        .axis(
            VariantAxis::new("size")
                .option("sm", StyleProps::new().set("px", "sm"))
                .option("lg", StyleProps::new().set("px", "lg").set("fos", "lg")),
        )
        .compound(
            CompoundVariant::new(StyleProps::new().set("bw", 2))
                .when("variant", "secondary")
                .when("size", "lg"),
        )
        .default_variant("size", "sm")
}

fn mount(target: RenderTarget) -> Result<StyleRoot> {
    init_tracing();
    let root = StyleRoot::mount(
        RootOptions::new()
            .target(target)
            .theme(ThemeConfig::new().default_mode(ThemeMode::Light).without_persistence()),
    );
    root.register(ElementKind::Pressable, button())?;
    root.register(
        ElementKind::View,
        ComponentDescription::new("Container").defaults(
            StyleProps::new()
                .set("w", "100%")
                .at(Breakpoint::Sm, StyleProps::new().set("p", "sm"))
                .at(Breakpoint::Xl, StyleProps::new().set("p", "xl").set("maxW", 1200)),
        ),
    )?;
    Ok(root)
}

#[test]
fn test_instance_color_beats_variant_color() -> Result<()> {
    let root = mount(RenderTarget::Native)?;
    let instance = Instance::new().variant("variant", "primary").style("color", "red");

    let resolved = root.resolve("Button", &instance).expect("registered");
    assert_eq!(resolved.base["color"], StyleValue::from("red"));
    assert_eq!(resolved.base["backgroundColor"], StyleValue::from("#9D4EDD"));
    Ok(())
}

#[test]
fn test_unmatched_variant_resolves_to_defaults_and_instance() -> Result<()> {
    let root = mount(RenderTarget::Native)?;
    let resolved = root
        .resolve("Button", &Instance::new().variant("variant", "tertiary").style("mt", "xs"))
        .expect("registered");

    assert_eq!(resolved.base["color"], StyleValue::from("#000000"));
    assert_eq!(resolved.base["marginTop"], StyleValue::from(4.0));
    assert!(!resolved.base.contains_key("backgroundColor"));
    // default size "sm" still applies
    assert_eq!(resolved.base["paddingHorizontal"], StyleValue::from(8.0));
    Ok(())
}

#[test]
fn test_compound_variant_needs_every_condition() -> Result<()> {
    let root = mount(RenderTarget::Native)?;

    let both = root
        .resolve("Button", &Instance::new().variant("variant", "secondary").variant("size", "lg"))
        .expect("registered");
    assert_eq!(both.base["borderWidth"], StyleValue::from(2));
    assert_eq!(both.base["fontSize"], StyleValue::from(18.0));

    let secondary = Instance::new().variant("variant", "secondary");
    let one = root.resolve("Button", &secondary).expect("registered");
    assert!(!one.base.contains_key("borderWidth"));
    Ok(())
}

#[test]
fn test_responsive_blocks_follow_viewport() -> Result<()> {
    let root = mount(RenderTarget::Web)?;
    let mut breakpoints = root.subscribe_breakpoint();

    root.set_viewport_width(900.0);
    assert_eq!(root.active_breakpoint(), Breakpoint::Md);
    let md = root.resolve("Container", &Instance::new()).expect("registered");
    assert_eq!(md.base["padding"], StyleValue::from(8.0));
    assert!(!md.base.contains_key("maxWidth"));

    root.set_viewport_width(1700.0);
    assert_eq!(*breakpoints.borrow_and_update(), Breakpoint::Xxl);
    let xxl = root.resolve("Container", &Instance::new()).expect("registered");
    assert_eq!(xxl.base["padding"], StyleValue::from(20.0));
    assert_eq!(xxl.base["maxWidth"], StyleValue::from(1200));
    assert_eq!(xxl.base["width"], StyleValue::from("100%"));
    Ok(())
}

#[test]
fn test_web_emission_with_interaction_events() -> Result<()> {
    let root = mount(RenderTarget::Web)?;
    let instance = Instance::new().variant("variant", "primary").prop("testID", "save");
    let mut tracker = InteractionTracker::new();

    let idle = root
        .render("Button", &instance, tracker.state(), vec!["Save".into()])
        .expect("rendered");
    assert_eq!(idle.tag, "button");
    assert_eq!(idle.props["testID"], StyleValue::from("save"));
    let HostStyle::Web(web) = &idle.style else { panic!("expected web output") };
    assert_eq!(web.inline["paddingLeft"], StyleValue::from(8.0));
    assert_eq!(web.inline["paddingTop"], StyleValue::from(8.0));
    assert!(!web.inline.contains_key("opacity"));
    assert!(web.to_css("btn").contains(".btn:hover { opacity: 0.9; }"));

    tracker.handle(InteractionEvent::PointerEnter);
    let pressed = tracker.handle(InteractionEvent::PressIn);
    assert_eq!(pressed, InteractionState::Pressed);
    let element = root.render("Button", &instance, pressed, vec![]).expect("rendered");
    assert_eq!(element.style.effective()["opacity"], StyleValue::from(0.7));
    Ok(())
}

#[test]
fn test_instance_axis_padding_beats_default_edge_on_web() -> Result<()> {
    let root = mount(RenderTarget::Web)?;
    root.register(
        ElementKind::View,
        ComponentDescription::new("Chip").defaults(StyleProps::new().set("pl", 2).set("pr", 3)),
    )?;

    let element = root
        .render("Chip", &Instance::new().style("px", 20), InteractionState::Idle, vec![])
        .expect("rendered");
    let HostStyle::Web(web) = &element.style else { panic!("expected web output") };
    assert_eq!(web.inline["paddingLeft"], StyleValue::from(20));
    assert_eq!(web.inline["paddingRight"], StyleValue::from(20));
    assert!(web.to_css("chip").contains("padding-left: 20px;"));
    Ok(())
}

#[test]
fn test_native_emission_is_style_array() -> Result<()> {
    let root = mount(RenderTarget::Native)?;
    let element = root
        .render("Button", &Instance::new(), InteractionState::Hover, vec![])
        .expect("rendered");

    assert_eq!(element.tag, "Pressable");
    let HostStyle::Native(native) = &element.style else { panic!("expected native output") };
    assert_eq!(native.layers.len(), 2);
    assert_eq!(native.layers[1]["opacity"], StyleValue::from(0.9));
    assert_eq!(native.flatten()["paddingHorizontal"], StyleValue::from(8.0));
    Ok(())
}

#[test]
fn test_dark_mode_switches_token_values() -> Result<()> {
    let root = mount(RenderTarget::Native)?;
    let instance = Instance::new().variant("variant", "secondary");

    let light = root.resolve("Button", &instance).expect("registered");
    assert_eq!(light.base["backgroundColor"], StyleValue::from("#E5E5E5"));

    root.theme().set_mode(ThemeMode::Dark);
    let dark = root.resolve("Button", &instance).expect("registered");
    assert_eq!(dark.base["backgroundColor"], StyleValue::from("#243044"));
    Ok(())
}

#[test]
fn test_custom_tokens_and_descriptions_from_json() -> Result<()> {
    init_tracing();
    let custom =
        TokenSet::from_json(r##"{"colors": {"brand": "#FF5500"}, "space": {"gutter": 18}}"##)?;
    let root = StyleRoot::mount(
        RootOptions::new()
            .target(RenderTarget::Native)
            .theme(ThemeConfig::new().custom_tokens(custom).without_persistence()),
    );

    let badge = ComponentDescription::from_json(
        r#"{
            "name": "Badge",
            "defaults": {"px": "gutter", "hoverStyle": {"bg": "$brand"}},
            "variants": [{"name": "tone", "options": {"brand": {"col": "$brand"}}}]
        }"#,
    )?;
    root.register(ElementKind::Text, badge)?;

    let brand = Instance::new().variant("tone", "brand");
    let resolved = root.resolve("Badge", &brand).expect("registered");
    assert_eq!(resolved.base["paddingHorizontal"], StyleValue::from(18.0));
    assert_eq!(resolved.base["color"], StyleValue::from("#FF5500"));
    let hover = &resolved.pseudo[&PseudoState::Hover];
    assert_eq!(hover["backgroundColor"], StyleValue::from("#FF5500"));
    let tokens = root.theme().tokens();
    assert_eq!(tokens.get(TokenCategory::Colors, "brand"), Some(&StyleValue::from("#FF5500")));
    Ok(())
}

#[test]
fn test_transform_list_passes_through_to_both_targets() -> Result<()> {
    let icon = || -> Result<ComponentDescription> {
        Ok(ComponentDescription::new("Icon").defaults(StyleProps::from_json(
            r#"{"transform": [{"rotate": "45deg"}], "shadowOffset": {"width": 0, "height": 2}}"#,
        )?))
    };
    let transform = StyleValue::from(serde_json::json!([{"rotate": "45deg"}]));

    let native = mount(RenderTarget::Native)?;
    native.register(ElementKind::Image, icon()?)?;
    let resolved = native.resolve("Icon", &Instance::new()).expect("registered");
    assert_eq!(resolved.base["transform"], transform);
    let offset = StyleValue::from(serde_json::json!({"width": 0, "height": 2}));
    assert_eq!(resolved.base["shadowOffset"], offset);
    let element = native
        .render("Icon", &Instance::new(), InteractionState::Idle, vec![])
        .expect("rendered");
    assert_eq!(element.style.effective()["transform"], transform);

    let web = mount(RenderTarget::Web)?;
    web.register(ElementKind::Image, icon()?)?;
    let element = web
        .render("Icon", &Instance::new(), InteractionState::Idle, vec![])
        .expect("rendered");
    let HostStyle::Web(style) = &element.style else { panic!("expected web output") };
    assert!(style.to_css("icon").contains("transform: rotate(45deg);"));
    Ok(())
}

#[test]
fn test_invalid_registration_is_rejected() -> Result<()> {
    let root = mount(RenderTarget::Native)?;
    let broken = ComponentDescription::new("Broken")
        .axis(VariantAxis::new("size").option("sm", StyleProps::new()))
        .compound(CompoundVariant::new(StyleProps::new().set("o", 0.5)).when("size", "xl"));

    assert!(root.register(ElementKind::View, broken).is_err());
    let section = ComponentDescription::new("Section");
    assert!(root.register(ElementKind::from("section"), section).is_err());
    assert!(root.register(ElementKind::View, button()).is_err());
    Ok(())
}

#[tokio::test]
async fn test_system_appearance_drives_rendered_tokens() -> Result<()> {
    init_tracing();
    let host = HostAppearance::new(ColorScheme::Light);
    let root = StyleRoot::mount(
        RootOptions::new()
            .target(RenderTarget::Native)
            .theme(ThemeConfig::new().without_persistence())
            .appearance(Arc::new(host.clone())),
    );
    root.register(
        ElementKind::Text,
        ComponentDescription::new("Label").defaults(StyleProps::new().set("col", "$text")),
    )?;
    let mut theme = root.theme().subscribe();

    let before = root.resolve("Label", &Instance::new()).expect("registered");
    assert_eq!(before.base["color"], StyleValue::from("#000000"));

    host.set(ColorScheme::Dark);
    tokio::time::timeout(std::time::Duration::from_secs(1), theme.changed()).await??;

    let after = root.resolve("Label", &Instance::new()).expect("registered");
    assert_eq!(after.base["color"], StyleValue::from("#FFFFFF"));
    Ok(())
}
