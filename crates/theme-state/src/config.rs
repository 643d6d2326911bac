//! Theme provider configuration

use serde::{Deserialize, Serialize};
use style_tokens::{dark_overrides, merge, TokenSet};

use crate::error::Result;
use crate::mode::ThemeMode;

/// Default storage key for the selected mode
pub const DEFAULT_PERSISTENCE_KEY: &str = "unistyle:themeMode";

/// Theme provider configuration
///
/// # JSON form
///
/// ```json
/// {
///   "defaultMode": "dark",
///   "customTokens": { "colors": { "brand": "#FF5500" } },
///   "persistenceKey": "myapp:theme"
/// }
/// ```
///
/// Missing fields take their defaults: the built-in base and dark sets, mode
/// `system`, and [`DEFAULT_PERSISTENCE_KEY`]. A `null` persistence key
/// disables persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Mode used when nothing is persisted
    pub default_mode: ThemeMode,
    /// Base token set (built-in complete set when `None`)
    pub base_tokens: Option<TokenSet>,
    /// Caller tokens merged over the base
    pub custom_tokens: TokenSet,
    /// Dark overrides merged last when dark (built-in dark palette when `None`)
    pub dark_tokens: Option<TokenSet>,
    /// Storage key for the selected mode
    pub persistence_key: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::System,
            base_tokens: None,
            custom_tokens: TokenSet::new(),
            dark_tokens: None,
            persistence_key: Some(DEFAULT_PERSISTENCE_KEY.to_string()),
        }
    }
}

impl ThemeConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the default mode
    pub fn default_mode(mut self, mode: ThemeMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Replace the base token set
    pub fn base_tokens(mut self, tokens: TokenSet) -> Self {
        self.base_tokens = Some(tokens);
        self
    }

    /// Set caller tokens
    pub fn custom_tokens(mut self, tokens: TokenSet) -> Self {
        self.custom_tokens = tokens;
        self
    }

    /// Replace the dark override set
    pub fn dark_tokens(mut self, tokens: TokenSet) -> Self {
        self.dark_tokens = Some(tokens);
        self
    }

    /// Set the storage key
    pub fn persistence_key(mut self, key: impl Into<String>) -> Self {
        self.persistence_key = Some(key.into());
        self
    }

    /// Do not read or write the selected mode
    pub fn without_persistence(mut self) -> Self {
        self.persistence_key = None;
        self
    }

    /// Token set for a scheme: `merge(merge(base, custom), dark ? dark : {})`
    pub fn tokens_for(&self, is_dark: bool) -> TokenSet {
        let base = match &self.base_tokens {
            Some(base) => merge(base, &self.custom_tokens),
            None => merge(&TokenSet::complete(), &self.custom_tokens),
        };
        if !is_dark {
            return base;
        }
        match &self.dark_tokens {
            Some(dark) => merge(&base, dark),
            None => merge(&base, &dark_overrides()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_tokens::{StyleValue, TokenCategory};

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_mode, ThemeMode::System);
        assert_eq!(config.persistence_key.as_deref(), Some(DEFAULT_PERSISTENCE_KEY));
    }

    #[test]
    fn test_from_json() {
        let config = ThemeConfig::from_json(
            r##"{
                "defaultMode": "dark",
                "customTokens": {"colors": {"brand": "#FF5500"}},
                "persistenceKey": null
            }"##,
        )
        .unwrap();
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(
            config.custom_tokens.get(TokenCategory::Colors, "brand"),
            Some(&StyleValue::from("#FF5500"))
        );
        assert_eq!(config.persistence_key, None);
        assert!(ThemeConfig::from_json(r#"{"defaultMode": "dim"}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ThemeConfig::from_json("{").unwrap_err();
        assert!(matches!(err, crate::ThemeError::Config(_)));
        assert!(err.to_string().starts_with("Invalid theme config"));
    }

    #[test]
    fn test_dark_layer_beats_custom_tokens() {
        let custom = TokenSet::new().with(TokenCategory::Colors, "text", "#111111");
        let config = ThemeConfig::new().custom_tokens(custom);

        let light = config.tokens_for(false);
        assert_eq!(light.get(TokenCategory::Colors, "text"), Some(&StyleValue::from("#111111")));

        let dark = config.tokens_for(true);
        assert_eq!(dark.get(TokenCategory::Colors, "text"), Some(&StyleValue::from("#FFFFFF")));
    }

    #[test]
    fn test_custom_base_and_dark_sets() {
        let config = ThemeConfig::new()
            .base_tokens(TokenSet::new().with(TokenCategory::Space, "md", 10.0))
            .dark_tokens(TokenSet::new().with(TokenCategory::Colors, "bg", "#000"));

        let dark = config.tokens_for(true);
        assert_eq!(dark.get(TokenCategory::Space, "md"), Some(&StyleValue::from(10.0)));
        assert_eq!(dark.get(TokenCategory::Colors, "bg"), Some(&StyleValue::from("#000")));
        assert_eq!(dark.len(), 2);
    }

    #[test]
    fn test_every_base_category_survives() {
        let config = ThemeConfig::new();
        let dark = config.tokens_for(true);
        for category in TokenCategory::ALL {
            assert!(dark.has_category(category), "missing {}", category);
        }
    }
}
