//! Storage keys and defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{AccentColor, ThemeMode};

pub const DEFAULT_THEME_KEY: &str = "user-theme-preference";
pub const DEFAULT_COLOR_KEY: &str = "user-color-preference";

/// Settings for a [`PreferenceManager`](crate::PreferenceManager).
///
/// Every field has a default, so a partial JSON document such as
/// `{"default_mode": "dark"}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Store key holding the mode.
    pub theme_key: String,
    /// Store key holding the accent color.
    pub color_key: String,
    /// Mode used when nothing valid is persisted and no system signal applies.
    pub default_mode: ThemeMode,
    /// Accent color used when nothing valid is persisted.
    pub default_color: AccentColor,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            color_key: DEFAULT_COLOR_KEY.to_string(),
            default_mode: ThemeMode::Light,
            default_color: AccentColor::Default,
        }
    }
}

impl PreferenceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PreferenceConfig::default();
        assert_eq!(config.theme_key, "user-theme-preference");
        assert_eq!(config.color_key, "user-color-preference");
        assert_eq!(config.default_mode, ThemeMode::Light);
        assert_eq!(config.default_color, AccentColor::Default);
    }

    #[test]
    fn test_config_partial_json() {
        let config =
            PreferenceConfig::from_json_str(r#"{"default_mode": "dark", "color_key": "accent"}"#)
                .unwrap();
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(config.color_key, "accent");
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn test_config_rejects_unknown_color() {
        let result = PreferenceConfig::from_json_str(r#"{"default_color": "magenta"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PreferenceConfig::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
