//! The style property bag
//!
//! [`StyleProps`] is what components and instances declare: base properties
//! (possibly shorthand, possibly token aliases), pseudo-state blocks,
//! per-breakpoint blocks and animation directives.
//!
//! # JSON form
//!
//! ```json
//! {
//!   "bg": "$primary500",
//!   "px": "md",
//!   "hoverStyle": { "bg": "$primary600" },
//!   "$md": { "px": "lg" },
//!   "animation": "fast",
//!   "enterStyle": { "opacity": 0 }
//! }
//! ```

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use style_tokens::{Breakpoint, StyleValue};

use crate::aliases;

/// Property name → value
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Lay `layer` over `target`, later layer winning
///
/// Besides replacing equal keys, a property in `layer` drops the entries of
/// `target` it covers, so a later `px` replaces an earlier `paddingLeft`.
/// Within one layer the more specific property still wins.
pub fn overlay(target: &mut StyleMap, layer: &StyleMap) {
    target.retain(|name, _| !layer.keys().any(|incoming| aliases::overrides(incoming, name)));
    target.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
}

/// Interaction-dependent style blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PseudoState {
    /// Pointer hovering
    Hover,
    /// Being pressed
    Press,
    /// Keyboard or programmatic focus
    Focus,
    /// Active (web `:active`)
    Active,
    /// Disabled
    Disabled,
}

impl PseudoState {
    /// Every pseudo state
    pub const ALL: [PseudoState; 5] = [
        PseudoState::Hover,
        PseudoState::Press,
        PseudoState::Focus,
        PseudoState::Active,
        PseudoState::Disabled,
    ];

    /// Property name carrying this block (`hoverStyle`, ...)
    pub fn prop_name(&self) -> &'static str {
        match self {
            PseudoState::Hover => "hoverStyle",
            PseudoState::Press => "pressStyle",
            PseudoState::Focus => "focusStyle",
            PseudoState::Active => "activeStyle",
            PseudoState::Disabled => "disabledStyle",
        }
    }

    /// Inverse of [`PseudoState::prop_name`]
    pub fn from_prop_name(name: &str) -> Option<Self> {
        PseudoState::ALL.iter().copied().find(|s| s.prop_name() == name)
    }
}

/// Animation directives, applied by the host rather than merged into the base style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationDirectives {
    /// Named animation (looked up in the duration/easing tokens)
    pub animation: Option<String>,
    /// Style to animate in from on mount
    pub enter: Option<StyleMap>,
    /// Style to animate out to on unmount
    pub exit: Option<StyleMap>,
}

impl AnimationDirectives {
    /// True when no directive is set
    pub fn is_empty(&self) -> bool {
        self.animation.is_none() && self.enter.is_none() && self.exit.is_none()
    }

    /// Right-biased merge
    pub fn merge(&mut self, other: &AnimationDirectives) {
        if other.animation.is_some() {
            self.animation = other.animation.clone();
        }
        merge_block(&mut self.enter, other.enter.as_ref());
        merge_block(&mut self.exit, other.exit.as_ref());
    }
}

fn merge_block(target: &mut Option<StyleMap>, other: Option<&StyleMap>) {
    if let Some(other) = other {
        overlay(target.get_or_insert_with(StyleMap::new), other);
    }
}

/// A declared bag of style properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProps {
    /// Base properties
    pub base: StyleMap,
    /// Pseudo-state blocks
    pub pseudo: BTreeMap<PseudoState, StyleMap>,
    /// Per-breakpoint override blocks
    pub responsive: BTreeMap<Breakpoint, StyleMap>,
    /// Animation directives
    pub animation: AnimationDirectives,
}

impl StyleProps {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a base property
    pub fn set(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.base.insert(name.into(), value.into());
        self
    }

    /// Get a base property
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.base.get(name)
    }

    /// Set a pseudo-state block from another bag's base properties
    pub fn pseudo(mut self, state: PseudoState, block: StyleProps) -> Self {
        self.pseudo.entry(state).or_default().extend(block.base);
        self
    }

    /// Shorthand for `pseudo(PseudoState::Hover, ..)`
    pub fn hover(self, block: StyleProps) -> Self {
        self.pseudo(PseudoState::Hover, block)
    }

    /// Shorthand for `pseudo(PseudoState::Press, ..)`
    pub fn press(self, block: StyleProps) -> Self {
        self.pseudo(PseudoState::Press, block)
    }

    /// Set the override block for a breakpoint
    pub fn at(mut self, breakpoint: Breakpoint, block: StyleProps) -> Self {
        self.responsive.entry(breakpoint).or_default().extend(block.base);
        self
    }

    /// Set the named animation
    pub fn animation(mut self, name: impl Into<String>) -> Self {
        self.animation.animation = Some(name.into());
        self
    }

    /// Set the enter style
    pub fn enter(mut self, block: StyleProps) -> Self {
        self.animation.enter = Some(block.base);
        self
    }

    /// Set the exit style
    pub fn exit(mut self, block: StyleProps) -> Self {
        self.animation.exit = Some(block.base);
        self
    }

    /// True when nothing is declared
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.pseudo.is_empty()
            && self.responsive.is_empty()
            && self.animation.is_empty()
    }

    /// Shallow right-biased merge: keys in `other` win, block by block
    pub fn merge(&mut self, other: &StyleProps) {
        overlay(&mut self.base, &other.base);
        for (state, block) in &other.pseudo {
            overlay(self.pseudo.entry(*state).or_default(), block);
        }
        for (breakpoint, block) in &other.responsive {
            overlay(self.responsive.entry(*breakpoint).or_default(), block);
        }
        self.animation.merge(&other.animation);
    }

    /// Non-mutating form of [`StyleProps::merge`]
    pub fn merged(&self, other: &StyleProps) -> StyleProps {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Parse a bag from its JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

const ANIMATION_KEY: &str = "animation";
const ENTER_KEY: &str = "enterStyle";
const EXIT_KEY: &str = "exitStyle";

impl<'de> Deserialize<'de> for StyleProps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut props = StyleProps::new();

        for (key, value) in raw {
            if let Some(state) = PseudoState::from_prop_name(&key) {
                let block: StyleMap = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.pseudo.insert(state, block);
            } else if key.starts_with('$') {
                let breakpoint: Breakpoint = key.parse().map_err(de::Error::custom)?;
                let block: StyleMap = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.responsive.insert(breakpoint, block);
            } else if key == ANIMATION_KEY {
                let name: String = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.animation.animation = Some(name);
            } else if key == ENTER_KEY {
                let enter: StyleMap = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.animation.enter = Some(enter);
            } else if key == EXIT_KEY {
                let exit: StyleMap = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.animation.exit = Some(exit);
            } else {
                let value: StyleValue = serde_json::from_value(value).map_err(de::Error::custom)?;
                props.base.insert(key, value);
            }
        }

        Ok(props)
    }
}

impl Serialize for StyleProps {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.base {
            map.serialize_entry(key, value)?;
        }
        for (state, block) in &self.pseudo {
            map.serialize_entry(state.prop_name(), block)?;
        }
        for (breakpoint, block) in &self.responsive {
            map.serialize_entry(&format!("${}", breakpoint), block)?;
        }
        if let Some(animation) = &self.animation.animation {
            map.serialize_entry(ANIMATION_KEY, animation)?;
        }
        if let Some(enter) = &self.animation.enter {
            map.serialize_entry(ENTER_KEY, enter)?;
        }
        if let Some(exit) = &self.animation.exit {
            map.serialize_entry(EXIT_KEY, exit)?;
        }
        map.end()
    }
}
