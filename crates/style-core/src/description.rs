//! Component style descriptions
//!
//! A description bundles a component's default style, its variant axes,
//! default selections and compound variants. Descriptions are built once and
//! validated at registration; resolution assumes a valid description.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, StyleError};
use crate::instance::Instance;
use crate::props::StyleProps;
use crate::variants::{CompoundVariant, VariantAxis, VariantTable};

/// Static style description of one component
#[derive(Debug, Clone, Default)]
pub struct ComponentDescription {
    /// Component name
    pub name: String,
    /// Style applied before any variant
    pub defaults: StyleProps,
    /// Selections used when the instance does not choose an option
    pub default_variants: BTreeMap<String, String>,
    /// Variant axes
    pub variants: VariantTable,
    /// Compound variants, in application order
    pub compound_variants: Vec<CompoundVariant>,
}

impl ComponentDescription {
    /// Create an empty description
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Set the default style
    pub fn defaults(mut self, defaults: StyleProps) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set a default selection for an axis
    pub fn default_variant(mut self, axis: impl Into<String>, option: impl ToString) -> Self {
        self.default_variants.insert(axis.into(), option.to_string());
        self
    }

    /// Replace the variant table
    pub fn variants(mut self, variants: VariantTable) -> Self {
        self.variants = variants;
        self
    }

    /// Append a variant axis
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        self.variants = self.variants.axis(axis);
        self
    }

    /// Append a compound variant
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// Instance with default selections filled in where it chose nothing
    pub fn effective_instance(&self, instance: &Instance) -> Instance {
        let mut effective = instance.clone();
        for (axis, option) in &self.default_variants {
            effective.variants.entry(axis.clone()).or_insert_with(|| option.clone());
        }
        effective
    }

    /// Check the description for structural mistakes
    ///
    /// Rejects duplicate axes, compound variants without conditions, and
    /// default selections or compound conditions naming an undeclared axis or
    /// option.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for axis in self.variants.axes() {
            if !seen.insert(axis.name()) {
                return Err(StyleError::DuplicateAxis {
                    component: self.name.clone(),
                    axis: axis.name().to_string(),
                });
            }
        }

        for (axis, option) in &self.default_variants {
            self.check_selection(axis, option)?;
        }

        for (index, compound) in self.compound_variants.iter().enumerate() {
            if compound.conditions.is_empty() {
                return Err(StyleError::EmptyCompound { component: self.name.clone(), index });
            }
            for (axis, option) in &compound.conditions {
                self.check_selection(axis, option)?;
            }
        }

        Ok(())
    }

    fn check_selection(&self, axis: &str, option: &str) -> Result<()> {
        let declared = self
            .variants
            .get(axis)
            .ok_or_else(|| StyleError::UnknownAxis {
                component: self.name.clone(),
                axis: axis.to_string(),
            })?;
        if declared.get(option).is_none() {
            return Err(StyleError::UnknownOption {
                component: self.name.clone(),
                axis: axis.to_string(),
                option: option.to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a static description from JSON
    ///
    /// ```json
    /// {
    ///   "name": "Button",
    ///   "defaults": { "px": "md" },
    ///   "defaultVariants": { "size": "md" },
    ///   "variants": [
    ///     { "name": "size", "options": { "sm": { "px": "sm" }, "md": {} } }
    ///   ],
    ///   "compoundVariants": [
    ///     { "conditions": { "size": "sm" }, "style": { "br": "sm" } }
    ///   ]
    /// }
    /// ```
    ///
    /// Axes are a list so declaration order survives parsing.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDescription =
            serde_json::from_str(json).map_err(|e| StyleError::Parse(e.to_string()))?;

        let mut description = ComponentDescription::new(raw.name).defaults(raw.defaults);
        for axis in raw.variants {
            let mut built = VariantAxis::new(axis.name);
            for (option, style) in axis.options {
                built = built.option(option, style);
            }
            description = description.axis(built);
        }
        for (axis, option) in raw.default_variants {
            description = description.default_variant(axis, selection_name(&option)?);
        }
        for compound in raw.compound_variants {
            let mut built = CompoundVariant::new(compound.style);
            for (axis, option) in compound.conditions {
                built = built.when(axis, selection_name(&option)?);
            }
            description = description.compound(built);
        }

        description.validate()?;
        Ok(description)
    }
}

fn selection_name(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(StyleError::Parse(format!("invalid variant selection: {}", other))),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescription {
    name: String,
    #[serde(default)]
    defaults: StyleProps,
    #[serde(default)]
    default_variants: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    variants: Vec<RawAxis>,
    #[serde(default)]
    compound_variants: Vec<RawCompound>,
}

#[derive(Deserialize)]
struct RawCompound {
    #[serde(default)]
    conditions: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    style: StyleProps,
}

#[derive(Deserialize)]
struct RawAxis {
    name: String,
    #[serde(default)]
    options: BTreeMap<String, StyleProps>,
}
