//! The operating system's color-scheme preference.

use std::cell::Cell;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ThemeMode;

/// Function used to read the current system preference.
pub type SchemeDetector = fn() -> ThemeMode;

/// A source of the system-level light/dark preference.
///
/// The manager reads it once at initialization. Later changes arrive as
/// [`UiEvent::SystemScheme`](crate::UiEvent::SystemScheme) events, which a
/// host produces from its native notification or from [`OsScheme::poll`].
pub trait SchemeSource {
    /// The preference as of now.
    fn current(&self) -> ThemeMode;
}

/// Reads the preference from the OS through `dark-light`.
///
/// The detector can be swapped out, which is how tests and hosts with
/// their own signal force a specific mode.
///
/// Both [`current`](SchemeSource::current) and [`poll`](OsScheme::poll)
/// record what they return, so the first `poll` after
/// [`PreferenceManager::initialize`](crate::PreferenceManager::initialize)
/// only reports a real change.
#[derive(Debug, Clone)]
pub struct OsScheme {
    detector: SchemeDetector,
    last_seen: Cell<Option<ThemeMode>>,
}

impl OsScheme {
    pub fn new() -> Self {
        Self::with_detector(os_theme_detector)
    }

    /// Creates a source backed by a custom detector.
    pub fn with_detector(detector: SchemeDetector) -> Self {
        Self {
            detector,
            last_seen: Cell::new(None),
        }
    }

    /// Replaces the detector.
    pub fn set_detector(&mut self, detector: SchemeDetector) {
        self.detector = detector;
    }

    /// Re-reads the preference and returns it only if it differs from the
    /// last value this source reported.
    ///
    /// Reports on the first call if nothing was read before.
    pub fn poll(&mut self) -> Option<ThemeMode> {
        let now = (self.detector)();
        if self.last_seen.replace(Some(now)) == Some(now) {
            return None;
        }
        Some(now)
    }
}

impl Default for OsScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeSource for OsScheme {
    fn current(&self) -> ThemeMode {
        let now = (self.detector)();
        self.last_seen.set(Some(now));
        now
    }
}

fn os_theme_detector() -> ThemeMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeMode::Dark,
        OsThemeMode::Light => ThemeMode::Light,
    }
}

/// A source that always reports the same preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedScheme(pub ThemeMode);

impl SchemeSource for FixedScheme {
    fn current(&self) -> ThemeMode {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_scheme_uses_detector() {
        let mut source = OsScheme::with_detector(|| ThemeMode::Dark);
        assert_eq!(source.current(), ThemeMode::Dark);

        source.set_detector(|| ThemeMode::Light);
        assert_eq!(source.current(), ThemeMode::Light);
    }

    #[test]
    fn test_poll_reports_only_changes() {
        let mut source = OsScheme::with_detector(|| ThemeMode::Dark);
        assert_eq!(source.poll(), Some(ThemeMode::Dark));
        assert_eq!(source.poll(), None);

        source.set_detector(|| ThemeMode::Light);
        assert_eq!(source.poll(), Some(ThemeMode::Light));
        assert_eq!(source.poll(), None);
    }

    #[test]
    fn test_poll_after_current_skips_known_value() {
        let mut source = OsScheme::with_detector(|| ThemeMode::Dark);
        assert_eq!(source.current(), ThemeMode::Dark);
        assert_eq!(source.poll(), None);

        source.set_detector(|| ThemeMode::Light);
        assert_eq!(source.poll(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_fixed_scheme() {
        assert_eq!(FixedScheme(ThemeMode::Dark).current(), ThemeMode::Dark);
        assert_eq!(FixedScheme::default().current(), ThemeMode::Light);
    }
}
