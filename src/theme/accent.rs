//! Named accent palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An accent palette, independent of [`ThemeMode`](super::ThemeMode).
///
/// The set is closed: anything outside these seven names is rejected at
/// parse time, so a value of this type is always safe to write to the
/// document or the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Default,
    Teal,
    Blue,
    Purple,
    Coral,
    Orange,
    Gold,
}

impl AccentColor {
    /// Every accent color, in swatch order.
    pub const ALL: [AccentColor; 7] = [
        AccentColor::Default,
        AccentColor::Teal,
        AccentColor::Blue,
        AccentColor::Purple,
        AccentColor::Coral,
        AccentColor::Orange,
        AccentColor::Gold,
    ];

    /// Attribute and storage value for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            AccentColor::Default => "default",
            AccentColor::Teal => "teal",
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Coral => "coral",
            AccentColor::Orange => "orange",
            AccentColor::Gold => "gold",
        }
    }

    /// Human-readable swatch title, e.g. `Teal theme`.
    pub fn title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} theme", first.to_ascii_uppercase(), chars.as_str()),
            None => String::from("theme"),
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccentColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccentColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseError::InvalidColor(s.to_string()))
    }
}
