//! Convenience surface for scripts that do not hold the manager's internals.

use tracing::debug;

use crate::document::Document;
use crate::manager::{PreferenceManager, UiEvent};
use crate::store::PreferenceStore;
use crate::theme::{AccentColor, ThemeMode};

/// Borrowed handle exposing the actions other page code is allowed to take.
///
/// Obtained from [`PreferenceManager::utils`].
pub struct ThemeUtils<'a, D, S> {
    manager: &'a mut PreferenceManager<D, S>,
}

impl<'a, D: Document, S: PreferenceStore> ThemeUtils<'a, D, S> {
    pub(crate) fn new(manager: &'a mut PreferenceManager<D, S>) -> Self {
        Self { manager }
    }

    /// Clicks the mode switcher, exactly as a user would.
    ///
    /// Does nothing when the controls have not been built.
    pub fn toggle_dark_mode(&mut self) {
        if let Some(switcher) = self.manager.widgets().map(|w| w.switcher) {
            self.manager.handle_event(UiEvent::Click { target: switcher });
        }
    }

    /// Applies `color` if it names an accent color.
    ///
    /// Returns `false`, and changes nothing, for any other string.
    pub fn set_color_theme(&mut self, color: &str) -> bool {
        match self.manager.set_accent_color_str(color) {
            Ok(_) => true,
            Err(err) => {
                debug!("Rejected external color: {}", err);
                false
            }
        }
    }

    pub fn current_theme(&self) -> ThemeMode {
        self.manager.current_mode()
    }

    pub fn current_color(&self) -> AccentColor {
        self.manager.current_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::manager::ACTIVE_CLASS;
    use crate::store::MemoryStore;
    use crate::theme::FixedScheme;

    fn initialized() -> PreferenceManager<MemoryDocument, MemoryStore> {
        let mut manager = PreferenceManager::new(MemoryDocument::new(), MemoryStore::new());
        manager.initialize(&FixedScheme(ThemeMode::Light));
        manager
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut manager = initialized();
        manager.utils().toggle_dark_mode();
        assert_eq!(manager.utils().current_theme(), ThemeMode::Dark);

        manager.utils().toggle_dark_mode();
        assert_eq!(manager.utils().current_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_dark_mode_without_controls() {
        let mut manager = PreferenceManager::new(MemoryDocument::new(), MemoryStore::new());
        manager.utils().toggle_dark_mode();

        assert!(manager.store().is_empty());
        assert!(manager.document().dispatched().is_empty());
    }

    #[test]
    fn test_set_color_theme_valid() {
        let mut manager = initialized();
        assert!(manager.utils().set_color_theme("teal"));
        assert_eq!(manager.utils().current_color(), AccentColor::Teal);
    }

    #[test]
    fn test_set_color_theme_invalid_changes_nothing() {
        let mut manager = initialized();
        manager.set_accent_color(AccentColor::Blue);
        let before = manager.document().find_by_class(ACTIVE_CLASS);
        let events = manager.document().dispatched().len();

        assert!(!manager.utils().set_color_theme("chartreuse"));

        assert_eq!(manager.current_color(), AccentColor::Blue);
        assert_eq!(manager.current_mode(), ThemeMode::Light);
        assert_eq!(manager.document().find_by_class(ACTIVE_CLASS), before);
        assert_eq!(manager.document().dispatched().len(), events);
    }
}
