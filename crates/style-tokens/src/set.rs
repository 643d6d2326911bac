//! The token registry
//!
//! A [`TokenSet`] maps each [`TokenCategory`] to a dictionary of semantic keys.
//! Sets are treated as immutable values: [`merge`] returns a new set and
//! never edits either input.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::category::TokenCategory;
use crate::value::StyleValue;

/// Key → value dictionary for one category
pub type TokenMap = HashMap<String, StyleValue>;

/// Category-keyed dictionary of design tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    categories: BTreeMap<TokenCategory, TokenMap>,
}

impl TokenSet {
    /// Create an empty set (the identity for [`merge`])
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a token. A leading `$` on the key is ignored.
    ///
    /// Absent categories and keys yield `None`, never a panic.
    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&StyleValue> {
        let key = key.strip_prefix('$').unwrap_or(key);
        self.categories.get(&category).and_then(|map| map.get(key))
    }

    /// All tokens of a category
    pub fn category(&self, category: TokenCategory) -> Option<&TokenMap> {
        self.categories.get(&category)
    }

    /// Whether the category is present (possibly empty)
    pub fn has_category(&self, category: TokenCategory) -> bool {
        self.categories.contains_key(&category)
    }

    /// Categories present in this set
    pub fn categories(&self) -> impl Iterator<Item = TokenCategory> + '_ {
        self.categories.keys().copied()
    }

    /// Insert a token
    pub fn insert(
        &mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) {
        self.categories.entry(category).or_default().insert(key.into(), value.into());
    }

    /// Builder form of [`TokenSet::insert`]
    pub fn with(
        mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.insert(category, key, value);
        self
    }

    /// Ensure a category exists, even if empty
    pub fn with_category(mut self, category: TokenCategory) -> Self {
        self.categories.entry(category).or_default();
        self
    }

    /// True when no category holds any token
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|m| m.is_empty())
    }

    /// Total number of tokens across categories
    pub fn len(&self) -> usize {
        self.categories.values().map(|m| m.len()).sum()
    }

    /// Category-wise shallow merge; see [`merge`]
    pub fn merge(&self, overrides: &TokenSet) -> TokenSet {
        merge(self, overrides)
    }

    /// Parse a token set from JSON (`{"colors": {"primary500": "#..."}}`)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Category-wise shallow merge
///
/// Override entries win per key. Categories missing from `overrides` are
/// copied from `base` untouched, so every category of `base` is present in the
/// result. `merge(a, &TokenSet::new()) == a`.
pub fn merge(base: &TokenSet, overrides: &TokenSet) -> TokenSet {
    let mut merged = base.clone();
    for (category, entries) in &overrides.categories {
        let target = merged.categories.entry(*category).or_default();
        for (key, value) in entries {
            target.insert(key.clone(), value.clone());
        }
    }
    merged
}
