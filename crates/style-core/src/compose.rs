//! Merge & emit
//!
//! Combines every style layer of a component instance into a [`ResolvedStyle`].
//! Layers merge shallowly, later winning, in this order:
//!
//! 1. description defaults
//! 2. axis variants, in declaration order
//! 3. compound variants, in list order
//! 4. style declared on the instance
//! 5. the responsive block for the active breakpoint
//! 6. the explicit style override
//!
//! Each layer has its shorthands expanded before merging, so a later layer's
//! `bg` replaces an earlier layer's `backgroundColor`. Token substitution runs
//! once on the merged result. Pseudo-state blocks and animation directives
//! are carried separately and never folded into the base style.

use serde::Serialize;
use std::collections::BTreeMap;
use style_tokens::{Breakpoint, StyleValue, TokenCategory, TokenSet};

use crate::description::ComponentDescription;
use crate::instance::Instance;
use crate::interaction::{active_override, InteractionState};
use crate::props::{overlay, PseudoState, StyleMap, StyleProps};
use crate::resolver::{normalize_props, resolve};
use crate::responsive::resolve_responsive;
use crate::variants::apply_variants;

/// Token set and breakpoint a resolution pass runs against
#[derive(Debug, Clone)]
pub struct ResolveContext<'a> {
    /// Active token set
    pub tokens: &'a TokenSet,
    /// Active breakpoint
    pub breakpoint: Breakpoint,
    /// Ascending breakpoint order
    pub breakpoint_order: Vec<Breakpoint>,
}

impl<'a> ResolveContext<'a> {
    /// Context using the default breakpoint order
    pub fn new(tokens: &'a TokenSet, breakpoint: Breakpoint) -> Self {
        Self { tokens, breakpoint, breakpoint_order: Breakpoint::ORDER.to_vec() }
    }

    /// Replace the breakpoint order
    pub fn with_order(mut self, order: Vec<Breakpoint>) -> Self {
        self.breakpoint_order = order;
        self
    }
}

/// Named animation with its token values looked up
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnimation {
    /// Animation name as declared
    pub name: String,
    /// Duration (ms) from the `durations` category
    pub duration_ms: Option<f64>,
    /// Easing from the `easings` category, falling back to `default`
    pub easing: Option<String>,
}

impl ResolvedAnimation {
    fn lookup(name: &str, tokens: &TokenSet) -> Self {
        let duration_ms = tokens.get(TokenCategory::Durations, name).and_then(StyleValue::as_f64);
        let easing = tokens
            .get(TokenCategory::Easings, name)
            .or_else(|| tokens.get(TokenCategory::Easings, "default"))
            .and_then(StyleValue::as_str)
            .map(str::to_string);
        if duration_ms.is_none() {
            tracing::debug!(animation = name, "animation name has no duration token");
        }
        Self { name: name.to_string(), duration_ms, easing }
    }
}

/// Fully resolved, platform-neutral style for one instance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    /// Static base style
    pub base: StyleMap,
    /// Pseudo-state blocks, applied by the platform on interaction
    pub pseudo: BTreeMap<PseudoState, StyleMap>,
    /// Named animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<ResolvedAnimation>,
    /// Style to animate in from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter: Option<StyleMap>,
    /// Style to animate out to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<StyleMap>,
}

impl ResolvedStyle {
    /// Override for the given interaction state
    pub fn pseudo_override(&self, state: InteractionState) -> StyleMap {
        active_override(state, &self.pseudo)
    }

    /// Base style with the state's override applied on top
    pub fn for_state(&self, state: InteractionState) -> StyleMap {
        let mut out = self.base.clone();
        overlay(&mut out, &self.pseudo_override(state));
        out
    }
}

/// Resolve a component instance
///
/// Never fails: unknown tokens stay literal and unmatched selections
/// contribute nothing.
pub fn resolve_component(
    description: &ComponentDescription,
    instance: &Instance,
    ctx: &ResolveContext<'_>,
) -> ResolvedStyle {
    let effective = description.effective_instance(instance);

    let mut layered = normalize_props(&description.defaults);
    layered.merge(&apply_variants(
        &effective,
        &description.variants,
        &description.compound_variants,
    ));
    layered.merge(&normalize_props(&effective.style));

    let order = &ctx.breakpoint_order;
    let mut base = layered.base.clone();
    overlay(&mut base, &resolve_responsive(&layered.responsive, ctx.breakpoint, order));

    if let Some(explicit) = &effective.style_override {
        let explicit = normalize_props(explicit);
        overlay(&mut base, &explicit.base);
        overlay(&mut base, &resolve_responsive(&explicit.responsive, ctx.breakpoint, order));
        for (state, block) in &explicit.pseudo {
            overlay(layered.pseudo.entry(*state).or_default(), block);
        }
        layered.animation.merge(&explicit.animation);
    }

    let tokens = ctx.tokens;
    ResolvedStyle {
        base: resolve(&base, tokens),
        pseudo: layered
            .pseudo
            .iter()
            .map(|(state, block)| (*state, resolve(block, tokens)))
            .filter(|(_, block)| !block.is_empty())
            .collect(),
        animation: layered
            .animation
            .animation
            .as_deref()
            .map(|name| ResolvedAnimation::lookup(name, tokens)),
        enter: layered.animation.enter.as_ref().map(|block| resolve(block, tokens)),
        exit: layered.animation.exit.as_ref().map(|block| resolve(block, tokens)),
    }
}

/// Resolve a bare style bag with no description
pub fn resolve_style(style: &StyleProps, ctx: &ResolveContext<'_>) -> ResolvedStyle {
    let description = ComponentDescription::default();
    resolve_component(&description, &Instance::new().with_style(style.clone()), ctx)
}
