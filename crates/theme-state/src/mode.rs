//! User-selected theme mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use style_tokens::ColorScheme;

use crate::error::ThemeError;

/// Theme mode chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the system appearance
    #[default]
    System,
}

impl ThemeMode {
    /// Effective scheme given the system appearance
    pub fn scheme(&self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => system,
        }
    }

    /// Persisted name
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "auto" => Ok(ThemeMode::System),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_resolution() {
        assert_eq!(ThemeMode::Light.scheme(ColorScheme::Dark), ColorScheme::Light);
        assert_eq!(ThemeMode::Dark.scheme(ColorScheme::Light), ColorScheme::Dark);
        assert_eq!(ThemeMode::System.scheme(ColorScheme::Dark), ColorScheme::Dark);
    }

    #[test]
    fn test_parse_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
        assert_eq!("Auto".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!(matches!("dim".parse::<ThemeMode>(), Err(ThemeError::InvalidMode(_))));
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
