//! Preference values and the system color-scheme signal.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: Light or dark visual mode
//! - [`AccentColor`]: The closed set of named accent palettes
//! - [`SchemeSource`]: Capability for reading the OS color-scheme preference
//! - [`OsScheme`] / [`FixedScheme`]: Detector-backed and constant sources

mod accent;
mod mode;
mod system;

pub use accent::AccentColor;
pub use mode::ThemeMode;
pub use system::{FixedScheme, OsScheme, SchemeDetector, SchemeSource};
