//! Variant engine
//!
//! A component declares named axes (`size`, `variant`, ...) whose options map
//! to partial styles, plus compound variants that apply when several axes
//! match at once. For an instance, contributions are merged in this order,
//! later winning on key collisions:
//!
//! 1. axis contributions, in axis declaration order
//! 2. compound contributions, in list order
//!
//! Selections with no matching option contribute nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::instance::Instance;
use crate::props::StyleProps;
use crate::resolver::normalize_props;

/// Style computed from the full instance props
pub type ComputedVariant = Arc<dyn Fn(&Instance) -> StyleProps + Send + Sync>;

/// One option of a variant axis
#[derive(Clone)]
pub enum VariantOption {
    /// Fixed partial style
    Static(StyleProps),
    /// Partial style computed from the instance
    Computed(ComputedVariant),
}

impl VariantOption {
    /// Wrap a closure as a computed option
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Instance) -> StyleProps + Send + Sync + 'static,
    {
        VariantOption::Computed(Arc::new(f))
    }

    /// Style contribution for an instance
    pub fn contribution(&self, instance: &Instance) -> StyleProps {
        match self {
            VariantOption::Static(style) => style.clone(),
            VariantOption::Computed(f) => f(instance),
        }
    }
}

impl fmt::Debug for VariantOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantOption::Static(style) => f.debug_tuple("Static").field(style).finish(),
            VariantOption::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A named axis with its options in declaration order
#[derive(Debug, Clone)]
pub struct VariantAxis {
    name: String,
    options: Vec<(String, VariantOption)>,
}

impl VariantAxis {
    /// Create an axis with no options
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), options: Vec::new() }
    }

    /// Add (or replace) a static option
    pub fn option(self, name: impl ToString, style: StyleProps) -> Self {
        self.with_option(name, VariantOption::Static(style))
    }

    /// Add (or replace) a computed option
    pub fn computed<F>(self, name: impl ToString, f: F) -> Self
    where
        F: Fn(&Instance) -> StyleProps + Send + Sync + 'static,
    {
        self.with_option(name, VariantOption::computed(f))
    }

    /// Add (or replace) an option
    pub fn with_option(mut self, name: impl ToString, option: VariantOption) -> Self {
        let name = name.to_string();
        match self.options.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = option,
            None => self.options.push((name, option)),
        }
        self
    }

    /// Axis name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an option
    pub fn get(&self, option: &str) -> Option<&VariantOption> {
        self.options.iter().find(|(name, _)| name == option).map(|(_, opt)| opt)
    }

    /// Option names in declaration order
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(name, _)| name.as_str())
    }
}

/// All axes of a component, in declaration order
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    axes: Vec<VariantAxis>,
}

impl VariantTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an axis
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Axes in declaration order
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Look up an axis by name
    pub fn get(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// True when no axis is declared
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// Style applied when every condition matches the instance's selections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Axis → required option
    pub conditions: BTreeMap<String, String>,
    /// Contribution on match
    pub style: StyleProps,
}

impl CompoundVariant {
    /// Create a compound variant with no conditions yet
    pub fn new(style: StyleProps) -> Self {
        Self { conditions: BTreeMap::new(), style }
    }

    /// Add a condition
    pub fn when(mut self, axis: impl Into<String>, option: impl ToString) -> Self {
        self.conditions.insert(axis.into(), option.to_string());
        self
    }

    /// Conjunctive match: every declared condition must hold
    pub fn matches(&self, instance: &Instance) -> bool {
        !self.conditions.is_empty()
            && self
                .conditions
                .iter()
                .all(|(axis, option)| instance.selection(axis) == Some(option.as_str()))
    }
}

/// Compute the variant contribution for an instance
///
/// The result carries long-form property names but still holds token aliases;
/// token substitution happens at the merge step.
pub fn apply_variants(
    instance: &Instance,
    table: &VariantTable,
    compounds: &[CompoundVariant],
) -> StyleProps {
    let mut acc = StyleProps::new();

    for axis in table.axes() {
        let Some(selected) = instance.selection(axis.name()) else {
            continue;
        };
        match axis.get(selected) {
            Some(option) => acc.merge(&normalize_props(&option.contribution(instance))),
            None => {
                tracing::trace!(axis = axis.name(), selected, "variant selection has no option");
            }
        }
    }

    for compound in compounds.iter().filter(|c| c.matches(instance)) {
        acc.merge(&normalize_props(&compound.style));
    }

    acc
}
