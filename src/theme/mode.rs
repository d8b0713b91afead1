//! Light/dark visual mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The page's visual mode.
///
/// Written to the root `data-theme` attribute and persisted under the
/// theme key as `light` or `dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes in toggle order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Attribute and storage value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Maps a `prefers-color-scheme: dark` match result to a mode.
    pub fn from_prefers_dark(matches: bool) -> Self {
        if matches {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseError::InvalidMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_valid() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_parse_is_case_sensitive() {
        let err = "Dark".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, ParseError::InvalidMode("Dark".into()));
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_all_in_toggle_order() {
        assert_eq!(ThemeMode::ALL[0].toggled(), ThemeMode::ALL[1]);
        assert!(ThemeMode::ALL[1].is_dark());
        assert!(!ThemeMode::ALL[0].is_dark());
    }

    #[test]
    fn test_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_from_prefers_dark() {
        assert_eq!(ThemeMode::from_prefers_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemeMode::Light);
    }
}
